//! Runtime settings read from the environment (and `.env` via dotenv).

use std::env;
use std::str::FromStr;

/// Selects the report output format.
pub const ENV_OUTPUT: &str = "IPV4_INFO_OUTPUT";
/// Set to `0` or `false` to disable colored section headers.
pub const ENV_COLOR: &str = "IPV4_INFO_COLOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Box,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "box" | "text" => Ok(OutputFormat::Box),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output: OutputFormat,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputFormat::Box,
            color: true,
        }
    }
}

impl Config {
    /// Read settings from process environment variables.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup. Bad values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(value) = lookup(ENV_OUTPUT) {
            match value.parse() {
                Ok(output) => config.output = output,
                Err(e) => log::warn!("{ENV_OUTPUT}: {e}, using {:?}", config.output),
            }
        }
        if let Some(value) = lookup(ENV_COLOR) {
            config.color = !matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }
        log::debug!("Config {:?}", config);
        config
    }
}
