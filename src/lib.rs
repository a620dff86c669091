//! # Cloud Fetch Library
//!
//! Calls Google Cloud HTTP APIs with access tokens fetched from the
//! instance metadata service and cached until they expire.
//!
//! Modules:
//! - `client` — top-level `Cloud` client, project id and token access
//! - `service` — per-API bindings building URIs and bearer headers
//! - `cache` — cached access token with single-flight refresh
//! - `sources` — metadata-service token source
//! - `config` — client configuration and YAML loading

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod helpers;
pub mod service;
pub mod sources;
#[cfg(test)]
mod tests;
pub mod utils;

pub use crate::client::Cloud;
pub use crate::config::settings::CloudConfig;
pub use crate::error::{CloudError, Result};
pub use crate::service::{RequestOptions, Service};
