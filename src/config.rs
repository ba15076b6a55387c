//! Server configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 500;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Delay applied before every API operation resolves.
    pub simulated_latency: Duration,
    /// Start with the demo warehouse instead of an empty store.
    pub seed_demo_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            simulated_latency: Duration::from_millis(DEFAULT_SIMULATED_LATENCY_MS),
            seed_demo_data: true,
        }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SIMULATED_LATENCY_MS`: default 500, `0` disables the delay
    /// - `SEED_DEMO_DATA`: default true (`1/true/yes/on`, `0/false/no/off`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            simulated_latency: parse_latency(std::env::var("SIMULATED_LATENCY_MS").ok().as_deref())?,
            seed_demo_data: parse_bool("SEED_DEMO_DATA", std::env::var("SEED_DEMO_DATA").ok().as_deref(), true)?,
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { key: "PORT", value: value.to_owned() }),
    }
}

fn parse_latency(raw: Option<&str>) -> Result<Duration, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Duration::from_millis(DEFAULT_SIMULATED_LATENCY_MS)),
        Some(value) => value
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::Invalid { key: "SIMULATED_LATENCY_MS", value: value.to_owned() }),
    }
}

fn parse_bool(key: &'static str, raw: Option<&str>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(default);
    };
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value: value.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
