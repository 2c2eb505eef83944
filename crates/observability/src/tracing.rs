//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig};

/// Initialize tracing/logging from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops). A bad
/// configuration falls back to defaults and is reported once logging is up.
pub fn init() {
    match ObservabilityConfig::from_env() {
        Ok(config) => {
            if let Err(err) = init_with(&config) {
                let _ = init_with(&ObservabilityConfig::default());
                ::tracing::warn!(error = %format!("{err:#}"), "invalid log filter; using defaults");
            }
        }
        Err(err) => {
            let _ = init_with(&ObservabilityConfig::default());
            ::tracing::warn!(error = %format!("{err:#}"), "invalid observability config; using defaults");
        }
    }
}

/// Initialize tracing/logging with an explicit configuration.
///
/// Fails only on an unparseable filter directive. If a global subscriber is
/// already installed this is a no-op.
pub fn init_with(config: &ObservabilityConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.filter)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_a_noop() {
        let config = ObservabilityConfig::default();
        assert!(init_with(&config).is_ok());
        assert!(init_with(&config).is_ok());
        init();
    }

    #[test]
    fn invalid_filter_is_reported() {
        let config = ObservabilityConfig {
            filter: "billforge=notalevel".to_string(),
            format: LogFormat::Pretty,
        };
        assert!(init_with(&config).is_err());
    }
}
