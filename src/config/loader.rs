use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Result};
use regex::{Captures, Regex};
use tracing::{debug, error};

use crate::config::settings::CloudConfig;

/// Load config from YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CloudConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow!("cannot read config {}: {}", path.display(), e))?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<CloudConfig> {
    let expanded = expand_env_vars(content)?;
    let config: CloudConfig = if expanded.trim().is_empty() {
        CloudConfig::default()
    } else {
        serde_yaml::from_str(&expanded).inspect_err(|e| error!("parse config error: {}", e))?
    };

    debug!("validation config ...");
    if config.http.scheme != "http" && config.http.scheme != "https" {
        bail!("Unsupported scheme '{}' in http.scheme", config.http.scheme);
    }
    if config.metadata.url.trim().is_empty() {
        bail!("metadata.url must not be empty");
    }
    Ok(config)
}

/// Replaces `${VAR}` and `${VAR:default}` with the environment value.
pub fn expand_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}")?;
    let expanded = re.replace_all(input, |caps: &Captures| {
        let var = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        std::env::var(var).unwrap_or_else(|_| default.to_string())
    });
    Ok(expanded.into_owned())
}
