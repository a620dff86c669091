use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::cache::token::CachedToken;
use crate::error::Result;
use crate::helpers::time::now_millis;
use crate::sources::fetch::FetchToken;

/// Single cached access token owned by one client.
///
/// Reads go through the `RwLock`. A refresh holds `refresh` for the whole
/// fetch, and callers that queue behind it re-check the cache before fetching,
/// so concurrent misses share one metadata request.
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    token: Arc<RwLock<Option<CachedToken>>>,
    refresh: Arc<Mutex<()>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token if present and not expired at `now`.
    pub async fn get_valid_at(&self, now: i64) -> Option<CachedToken> {
        self.token
            .read()
            .await
            .as_ref()
            .filter(|t| t.is_valid_at(now))
            .cloned()
    }

    pub async fn get(&self) -> Option<CachedToken> {
        self.get_valid_at(now_millis()).await
    }

    /// Replace the cached token wholesale.
    pub async fn set(&self, token: CachedToken) {
        *self.token.write().await = Some(token);
    }

    pub async fn clear(&self) {
        *self.token.write().await = None;
    }

    /// Cached access token, or a fresh one from `source`.
    ///
    /// `Ok(None)` means the source answered with a null credential; nothing is
    /// cached in that case. A failed fetch leaves the previous entry in place.
    pub async fn get_or_refresh<S: FetchToken>(&self, source: &S) -> Result<Option<String>> {
        if let Some(token) = self.get().await {
            return Ok(Some(token.access_token));
        }

        let _guard = self.refresh.lock().await;
        // another caller may have refreshed while we waited
        if let Some(token) = self.get().await {
            debug!("token refreshed by a concurrent caller");
            return Ok(Some(token.access_token));
        }

        match source.fetch_token().await? {
            Some(token) => {
                debug!("caching token, expires at {}", token.expiration_time);
                let access_token = token.access_token.clone();
                self.set(token).await;
                Ok(Some(access_token))
            }
            None => Ok(None),
        }
    }
}
