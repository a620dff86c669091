use chrono::Utc;

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Expiration in unix millis for a lifetime declared in seconds.
/// Saturates at `i64::MAX` for absurd lifetimes.
pub fn expires_at_millis(fetched_at_millis: i64, expires_in_secs: f64) -> i64 {
    // `as` saturates out-of-range floats
    let lifetime_millis = (expires_in_secs * 1000.0) as i64;
    fetched_at_millis.saturating_add(lifetime_millis)
}
