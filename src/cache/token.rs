use crate::helpers::time::{expires_at_millis, now_millis};

/// An access token and the unix millis at which it stops being valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    pub access_token: String,
    pub expiration_time: i64,
}

impl CachedToken {
    pub fn new(access_token: String, expiration_time: i64) -> Self {
        Self { access_token, expiration_time }
    }

    /// Build from a server-declared lifetime in seconds, counted from `fetched_at`.
    pub fn from_lifetime(access_token: String, expires_in_secs: f64, fetched_at: i64) -> Self {
        Self::new(access_token, expires_at_millis(fetched_at, expires_in_secs))
    }

    pub fn is_valid_at(&self, now: i64) -> bool {
        self.expiration_time > now
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(now_millis())
    }
}
