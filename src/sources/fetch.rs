use std::future::Future;

use crate::cache::token::CachedToken;
use crate::error::Result;

/// Anything that can mint a fresh access token.
///
/// `Ok(None)` is a null credential: a valid answer that carries no token.
pub trait FetchToken {
    fn fetch_token(&self) -> impl Future<Output = Result<Option<CachedToken>>> + Send;
}
