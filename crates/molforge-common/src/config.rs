//! Service configuration.
//!
//! Loaded from a TOML file (`MOLFORGE_CONFIG` path override, `molforge.toml`
//! fallback) with every field individually defaultable, then adjusted from
//! `MOLFORGE_HOST` / `MOLFORGE_PORT` environment variables.

use serde::{Deserialize, Serialize};

use crate::error::{MolforgeError, Result};

/// Complete service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MolforgeConfig {
    /// Interface the HTTP server binds to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server binds to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Hard ceiling on candidates returned per generation request
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,

    /// Candidates produced when the request omits a count
    #[serde(default = "default_count")]
    pub default_candidates: usize,

    /// Fallback tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }
fn default_max_candidates() -> usize { 50 }
fn default_count() -> usize { 10 }
fn default_log_filter() -> String { "info".to_string() }

impl Default for MolforgeConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_candidates: default_max_candidates(),
            default_candidates: default_count(),
            log_filter: default_log_filter(),
        }
    }
}

// ── Loading ──────────────────────────────────────────────────────────────────

impl MolforgeConfig {
    /// Parse from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MolforgeError::Config(e.to_string()))
    }

    /// Load from a TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Resolve the active configuration.
    ///
    /// A missing file is not an error (defaults apply); a malformed one is.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var("MOLFORGE_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) if std::path::Path::new("molforge.toml").exists() => {
                Self::from_file("molforge.toml")?
            }
            Err(_) => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("MOLFORGE_HOST") {
            self.host = host;
        }
        if let Ok(port) = std::env::var("MOLFORGE_PORT") {
            if let Ok(port) = port.parse() {
                self.port = port;
            } else {
                tracing::warn!("MOLFORGE_PORT is not a valid port number, keeping {}", self.port);
            }
        }
    }

    /// Bind address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MolforgeConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.max_candidates, 50);
        assert_eq!(config.default_candidates, 10);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = MolforgeConfig::from_toml("port = 9100\n").unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.max_candidates, 50);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let result = MolforgeConfig::from_toml("port = \"not a number\"");
        assert!(matches!(result, Err(MolforgeError::Config(_))));
    }

    #[test]
    fn test_bind_addr() {
        let mut config = MolforgeConfig::default();
        config.host = "127.0.0.1".to_string();
        config.port = 9000;
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }
}
