use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CloudError>;

/// Failures surfaced by the token cache and the service bindings.
#[derive(Debug, Error)]
pub enum CloudError {
    /// DNS, connection or IO failure, passed through unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("request to {url} failed: {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("Metadata Service credential created invalid access tokens: {0}")]
    InvalidCredential(String),

    /// The metadata service answered `null`, so no bearer header can be built.
    #[error("Metadata Service returned a null credential")]
    NullCredential,

    #[error("path '{path}' needs a project id but none is configured")]
    MissingProject { path: String },

    #[error("malformed JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CloudError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CloudError::Status { status, .. } => Some(*status),
            CloudError::Transport(e) => e.status(),
            _ => None,
        }
    }
}
