use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::settings::{CloudConfig, LogFormat, LoggingConfig};

/// Logging settings from config, with the level optionally overridden.
pub fn resolve_logging_config(config: &CloudConfig, level: Option<&str>) -> LoggingConfig {
    let base = config.logging.clone().unwrap_or_else(|| LoggingConfig {
        level: "info".to_owned(),
        format: LogFormat::from_env(),
    });
    match level {
        Some(level) => LoggingConfig::new(level.to_lowercase(), base.format),
        None => base,
    }
}

pub fn run(config: &CloudConfig, level: Option<&str>) {
    init_logging(&resolve_logging_config(config, level));
}

/// Initialize tracing with the desired config. Later calls are no-ops.
pub fn init_logging(cfg: &LoggingConfig) {
    let env_filter = EnvFilter::try_new(&cfg.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match cfg.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_timer(UtcTime::rfc_3339())
                .flatten_event(true)
                .with_ansi(false);

            let _ = registry.with(layer).try_init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_timer(UtcTime::rfc_3339())
                .with_ansi(true);

            let _ = registry.with(layer).try_init();
        }
    };
}
