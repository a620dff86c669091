use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

pub const AUTHORIZATION: &str = "Authorization";

/// Per-call request settings: extra headers, query string and POST body.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: HashMap<String, String>,
    pub qs: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.qs.push((key.into(), value.into()));
        self
    }

    pub fn body<B: Serialize>(mut self, body: &B) -> serde_json::Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Caller-supplied Authorization header, matched case-insensitively.
    pub fn authorization(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(AUTHORIZATION))
            .map(|(_, value)| value.as_str())
    }
}
