//! Service bindings: one configured client per API family.

pub mod options;

use std::collections::HashMap;

use http::Method;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::client::Cloud;
use crate::error::{CloudError, Result};
use crate::utils::constants::PROJECT_PLACEHOLDER;
pub use options::{RequestOptions, AUTHORIZATION};

/// An API family addressed as `<scheme>://<base_uri>/<path>`.
#[derive(Debug, Clone)]
pub struct Service {
    cloud: Cloud,
    base_uri: String,
    scheme: String,
}

impl Service {
    pub fn new(cloud: Cloud, base_uri: &str) -> Self {
        let scheme = cloud.scheme().to_owned();
        Self {
            cloud,
            base_uri: base_uri.trim_end_matches('/').to_owned(),
            scheme,
        }
    }

    /// Override the URI scheme, e.g. `http` for a local emulator.
    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_owned();
        self
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Absolute URI for `path`; the first `projects/*` becomes `projects/<project>`.
    pub fn resolve_uri(&self, path: &str) -> Result<String> {
        let path = if path.contains(PROJECT_PLACEHOLDER) {
            let project = self.cloud.project().ok_or_else(|| CloudError::MissingProject {
                path: path.to_owned(),
            })?;
            path.replacen(PROJECT_PLACEHOLDER, &format!("projects/{}", project), 1)
        } else {
            path.to_owned()
        };
        Ok(format!("{}://{}/{}", self.scheme, self.base_uri, path))
    }

    /// Caller headers plus a bearer Authorization header.
    ///
    /// When the caller already set Authorization the headers are returned as is
    /// and no token is fetched.
    pub async fn resolve_headers(&self, options: &RequestOptions) -> Result<HashMap<String, String>> {
        if options.authorization().is_some() {
            return Ok(options.headers.clone());
        }
        let token = self.cloud.get_token().await?.ok_or(CloudError::NullCredential)?;
        let mut headers = options.headers.clone();
        headers.insert(AUTHORIZATION.to_owned(), format!("Bearer {}", token));
        Ok(headers)
    }

    /// GET `path` and decode the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, options: &RequestOptions) -> Result<T> {
        let uri = self.resolve_uri(path)?;
        let headers = self.resolve_headers(options).await?;
        debug!(uri = %uri, headers = ?headers.keys().collect::<Vec<_>>(), "fetching");
        let request = self.build_request(Method::GET, &uri, &headers, options);
        send_json(request, &uri).await
    }

    /// POST `options.body` as JSON to `path` and decode the JSON response.
    pub async fn post<T: DeserializeOwned>(&self, path: &str, options: &RequestOptions) -> Result<T> {
        let uri = self.resolve_uri(path)?;
        let headers = self.resolve_headers(options).await?;
        debug!(uri = %uri, "posting");
        let mut request = self.build_request(Method::POST, &uri, &headers, options);
        if let Some(body) = &options.body {
            request = request.json(body);
        }
        send_json(request, &uri).await
    }

    /// GET `path` and return the raw body bytes. Non-2xx statuses are not errors here.
    pub async fn get_buffer(&self, path: &str, options: &RequestOptions) -> Result<Vec<u8>> {
        let uri = self.resolve_uri(path)?;
        let headers = self.resolve_headers(options).await?;
        debug!(uri = %uri, "fetching raw body");
        let mut response = self
            .build_request(Method::GET, &uri, &headers, options)
            .send()
            .await?;
        if !response.status().is_success() {
            warn!("raw request to {} answered {}", uri, response.status());
        }

        let mut buffer = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            buffer.extend_from_slice(&chunk);
        }
        Ok(buffer)
    }

    fn build_request(
        &self,
        method: Method,
        uri: &str,
        headers: &HashMap<String, String>,
        options: &RequestOptions,
    ) -> RequestBuilder {
        let mut request = self.cloud.http().request(method, uri);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if !options.qs.is_empty() {
            request = request.query(&options.qs);
        }
        request
    }
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder, uri: &str) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(CloudError::Status {
            url: uri.to_owned(),
            status,
            body,
        });
    }
    // empty bodies decode as JSON null
    let body = if body.trim().is_empty() { "null" } else { body.as_str() };
    Ok(serde_json::from_str(body)?)
}
