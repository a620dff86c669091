use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::cache::token::CachedToken;
use crate::error::{CloudError, Result};
use crate::helpers::time::now_millis;
use crate::sources::fetch::FetchToken;
use crate::utils::constants::{METADATA_FLAVOR_HEADER, METADATA_FLAVOR_VALUE};

/// Token source backed by the instance metadata service.
#[derive(Debug, Clone)]
pub struct MetadataSource {
    pub url: String,
    pub client: Client,
}

impl MetadataSource {
    pub fn new(url: String, client: Client) -> Self {
        Self { url, client }
    }
}

impl FetchToken for MetadataSource {
    async fn fetch_token(&self) -> Result<Option<CachedToken>> {
        info!("fetching access token from metadata service");
        let response = self
            .client
            .get(&self.url)
            .header(METADATA_FLAVOR_HEADER, METADATA_FLAVOR_VALUE)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CloudError::Status {
                url: self.url.clone(),
                status,
                body,
            });
        }

        let fetched_at = now_millis();
        let value: Value = serde_json::from_str(&body)?;
        let token = parse_token_response(&value, fetched_at)?;
        debug!("metadata token parsed, null credential: {}", token.is_none());
        Ok(token)
    }
}

/// Validate a metadata token body of shape `{access_token, expires_in, ...}`.
pub fn parse_token_response(value: &Value, fetched_at: i64) -> Result<Option<CachedToken>> {
    if value.is_null() {
        return Ok(None);
    }
    let access_token = value.get("access_token").and_then(Value::as_str);
    let expires_in = value.get("expires_in").and_then(Value::as_f64);

    match (value.is_object(), access_token, expires_in) {
        (true, Some(access_token), Some(expires_in)) => Ok(Some(CachedToken::from_lifetime(
            access_token.to_owned(),
            expires_in,
            fetched_at,
        ))),
        _ => Err(CloudError::InvalidCredential(value.to_string())),
    }
}
