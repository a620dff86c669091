//! Shared constants and invariants

pub const METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1beta1/instance/service-accounts/default/token";
pub const METADATA_FLAVOR_HEADER: &str = "Metadata-Flavor";
pub const METADATA_FLAVOR_VALUE: &str = "Google";

/// Environment variable holding the default project id.
pub const PROJECT_ENV: &str = "GCP_PROJECT";

pub const STORAGE_BASE_URI: &str = "www.googleapis.com/storage/v1";
pub const TRANSLATE_BASE_URI: &str = "www.googleapis.com/language/translate/v2";

pub const PROJECT_PLACEHOLDER: &str = "projects/*";
pub const DEFAULT_SCHEME: &str = "https";
