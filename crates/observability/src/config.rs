use core::str::FromStr;

use anyhow::{Context, bail};

/// Variable holding the filter directive (e.g. `info,billforge_service=debug`).
pub const FILTER_VAR: &str = "RUST_LOG";
/// Variable selecting the output format: `json` or `pretty`.
pub const FORMAT_VAR: &str = "BILLFORGE_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => bail!("unknown log format {other:?} (expected json or pretty)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Read configuration from an explicit set of variables. Unset or blank
    /// variables fall back to defaults.
    pub fn from_vars<I, K, V>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (key, value) in vars {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                FILTER_VAR => config.filter = value.to_string(),
                FORMAT_VAR => {
                    config.format = value
                        .parse()
                        .with_context(|| format!("invalid {FORMAT_VAR}"))?;
                }
                _ => {}
            }
        }
        Ok(config)
    }
}
