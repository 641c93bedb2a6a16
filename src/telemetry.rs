use crate::{CafeError, LogFormat, LoggingConfig};
use std::env::VarError;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "CAFE_LOG";

/// Builds the log filter: `CAFE_LOG` when set, the configured level otherwise.
///
/// A malformed `CAFE_LOG` is an error, same as a malformed `logging.level`.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, CafeError> {
    match std::env::var(LOG_ENV_VAR) {
        Ok(directives) => filter_from(Some(&directives), config),
        Err(VarError::NotPresent) => filter_from(None, config),
        Err(e) => Err(CafeError::invalid_config(format!("Invalid {}: {}", LOG_ENV_VAR, e))),
    }
}

fn filter_from(
    env_directives: Option<&str>,
    config: &LoggingConfig,
) -> Result<EnvFilter, CafeError> {
    let (source, directives) = match env_directives {
        Some(directives) => (LOG_ENV_VAR, directives),
        None => ("logging.level", config.level.as_str()),
    };

    EnvFilter::try_new(directives).map_err(|e| {
        CafeError::invalid_config(format!("Invalid {} '{}': {}", source, directives, e))
    })
}

/// Installs the global subscriber. Logs go to stderr so stdout only carries
/// the shop's own output.
pub fn init(config: &LoggingConfig) -> Result<(), CafeError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config)?)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| CafeError::config(format!("Failed to install logger: {}", e)))
}
