//! Top-level client: owns the project id, the HTTP client and the token cache.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::cache::token_cache::TokenCache;
use crate::config::settings::CloudConfig;
use crate::error::Result;
use crate::service::Service;
use crate::sources::metadata::MetadataSource;
use crate::utils::constants::{PROJECT_ENV, STORAGE_BASE_URI, TRANSLATE_BASE_URI};

/// Cheap to clone; clones share one token cache.
#[derive(Debug, Clone)]
pub struct Cloud {
    inner: Arc<CloudInner>,
}

#[derive(Debug)]
struct CloudInner {
    project: Option<String>,
    scheme: String,
    http: Client,
    cache: TokenCache,
    metadata: MetadataSource,
}

impl Cloud {
    /// Client with default settings. Without `project`, `GCP_PROJECT` is used.
    pub fn new(project: Option<String>) -> Result<Self> {
        Self::from_config(CloudConfig {
            project_id: project,
            ..CloudConfig::default()
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(None)
    }

    pub fn from_config(config: CloudConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout_ms) = config.http.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let http = builder.build()?;

        let project = config
            .project_id
            .or_else(|| std::env::var(PROJECT_ENV).ok())
            .filter(|p| !p.is_empty());

        Ok(Self {
            inner: Arc::new(CloudInner {
                project,
                scheme: config.http.scheme,
                metadata: MetadataSource::new(config.metadata.url, http.clone()),
                http,
                cache: TokenCache::new(),
            }),
        })
    }

    pub fn project(&self) -> Option<&str> {
        self.inner.project.as_deref()
    }

    pub fn http(&self) -> &Client {
        &self.inner.http
    }

    pub(crate) fn scheme(&self) -> &str {
        &self.inner.scheme
    }

    pub fn token_cache(&self) -> &TokenCache {
        &self.inner.cache
    }

    /// Access token from the cache, refreshed from the metadata service when
    /// missing or expired. `None` when the service returned a null credential.
    pub async fn get_token(&self) -> Result<Option<String>> {
        self.inner.cache.get_or_refresh(&self.inner.metadata).await
    }

    /// Binding for an arbitrary `host/path-prefix`, without scheme.
    pub fn service(&self, base_uri: &str) -> Service {
        Service::new(self.clone(), base_uri)
    }

    pub fn storage(&self) -> Service {
        self.service(STORAGE_BASE_URI)
    }

    pub fn translate(&self) -> Service {
        self.service(TRANSLATE_BASE_URI)
    }
}
