//! Server configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `TICTACTOE_*` environment variables, then command-line flags.

use crate::games::tictactoe::OpponentKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable overriding the bind host.
pub const HOST_VAR: &str = "TICTACTOE_HOST";
/// Environment variable overriding the bind port.
pub const PORT_VAR: &str = "TICTACTOE_PORT";
/// Environment variable overriding the opponent strategy.
pub const OPPONENT_VAR: &str = "TICTACTOE_OPPONENT";

/// Configuration for the HTTP move service.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    host: String,

    /// Port to bind to.
    #[serde(default = "default_port")]
    port: u16,

    /// Strategy for computer moves.
    #[serde(default)]
    opponent: OpponentKind,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[instrument]
fn default_port() -> u16 {
    3000
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            opponent: OpponentKind::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Applies overrides from the process environment.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, which maps a variable name to its value.
    #[instrument(skip(self, lookup))]
    pub fn apply_env_with(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(host) = lookup(HOST_VAR) {
            debug!(%host, "Host overridden from environment");
            self.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            self.port = port
                .parse()
                .map_err(|e| ConfigError::new(format!("Invalid {}={:?}: {}", PORT_VAR, port, e)))?;
            debug!(port = self.port, "Port overridden from environment");
        }
        if let Some(opponent) = lookup(OPPONENT_VAR) {
            self.opponent = opponent.parse().map_err(|e| {
                ConfigError::new(format!("Invalid {}={:?}: {}", OPPONENT_VAR, opponent, e))
            })?;
            debug!(opponent = %self.opponent, "Opponent overridden from environment");
        }
        Ok(self)
    }

    /// Overrides the host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Overrides the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Overrides the opponent strategy.
    pub fn with_opponent(mut self, opponent: OpponentKind) -> Self {
        self.opponent = opponent;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(*config.port(), 3000);
        assert_eq!(*config.opponent(), OpponentKind::Minimax);
    }

    #[test]
    fn test_env_overrides() {
        let config = ServerConfig::default()
            .apply_env_with(env(&[(PORT_VAR, "8080"), (OPPONENT_VAR, "first-empty")]))
            .unwrap();
        assert_eq!(*config.port(), 8080);
        assert_eq!(*config.opponent(), OpponentKind::FirstEmpty);
        assert_eq!(config.host(), "127.0.0.1");
    }

    #[test]
    fn test_bad_env_port_is_error() {
        let err = ServerConfig::default()
            .apply_env_with(env(&[(PORT_VAR, "eighty")]))
            .unwrap_err();
        assert!(err.message.contains(PORT_VAR));
    }
}
