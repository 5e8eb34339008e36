use crate::error::CliError;

/// Runtime configuration for `eventex-check`, loaded from environment
/// variables (a `.env` file is honoured by the binary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Pretty-print JSON output (default: `false`).
    pub pretty: bool,
    /// Largest accepted stdin payload in bytes (default: `65536`).
    pub max_input_bytes: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            max_input_bytes: 64 * 1024,
        }
    }
}

impl CheckConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default |
    /// |---------------------------|---------|
    /// | `EVENTEX_PRETTY`          | `false` |
    /// | `EVENTEX_MAX_INPUT_BYTES` | `65536` |
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let pretty = match lookup("EVENTEX_PRETTY") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                CliError::Config(format!("EVENTEX_PRETTY must be a boolean, got {raw:?}"))
            })?,
            None => defaults.pretty,
        };

        let max_input_bytes = match lookup("EVENTEX_MAX_INPUT_BYTES") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                CliError::Config(format!(
                    "EVENTEX_MAX_INPUT_BYTES must be a valid usize, got {raw:?}"
                ))
            })?,
            None => defaults.max_input_bytes,
        };

        Ok(Self {
            pretty,
            max_input_bytes,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
