//! Application configuration.
//!
//! Loaded from a TOML file (default `~/.stepviz/config.toml`) with every
//! field optional; missing file or missing fields fall back to defaults.
//! Unknown keys are ignored so old configs keep working.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::util::paths::config_path;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Random array generation settings.
    pub array_gen: ArrayGenConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Enable permissive CORS (allows any origin, needed when the front
    /// end runs on a different port).
    pub cors_permissive: bool,
}

/// Bounds for the random array generation endpoint.
#[derive(Debug, Clone)]
pub struct ArrayGenConfig {
    /// Size used when the request omits one or asks for an out-of-range one.
    pub default_size: usize,
    /// Largest size a request may ask for.
    pub max_size: usize,
    /// Upper value bound used when the request omits one or asks for an
    /// invalid one.
    pub default_max_value: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5001,
                cors_permissive: true,
            },
            array_gen: ArrayGenConfig {
                default_size: 15,
                max_size: 100,
                default_max_value: 100,
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    server: Option<TomlServerConfig>,
    array_gen: Option<TomlArrayGenConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct TomlServerConfig {
    host: Option<String>,
    port: Option<u16>,
    cors_permissive: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct TomlArrayGenConfig {
    default_size: Option<usize>,
    max_size: Option<usize>,
    default_max_value: Option<i64>,
}

impl Config {
    /// Load configuration from `path`, or from the default location when
    /// `path` is `None`. A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => config_path(),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let toml_config: TomlConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(Self::from_toml(toml_config))
    }

    fn from_toml(toml_config: TomlConfig) -> Self {
        let mut config = Self::default();

        if let Some(server) = toml_config.server {
            if let Some(host) = server.host {
                config.server.host = host;
            }
            if let Some(port) = server.port {
                config.server.port = port;
            }
            if let Some(cors) = server.cors_permissive {
                config.server.cors_permissive = cors;
            }
        }

        if let Some(array_gen) = toml_config.array_gen {
            if let Some(size) = array_gen.default_size {
                config.array_gen.default_size = size;
            }
            if let Some(max_size) = array_gen.max_size {
                config.array_gen.max_size = max_size;
            }
            if let Some(max_value) = array_gen.default_max_value {
                config.array_gen.default_max_value = max_value;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 5001);
        assert!(config.server.cors_permissive);
        assert_eq!(config.array_gen.default_size, 15);
    }

    #[test]
    fn test_partial_toml_overlays_defaults() {
        let toml_config: TomlConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [array_gen]
            default_max_value = 50
            "#,
        )
        .unwrap();
        let config = Config::from_toml(toml_config);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.array_gen.default_max_value, 50);
        assert_eq!(config.array_gen.max_size, 100);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let parsed: Result<TomlConfig, _> = toml::from_str(
            r#"
            future_section = true

            [server]
            host = "0.0.0.0"
            "#,
        );
        assert!(parsed.is_ok());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent/stepviz.toml"))).unwrap();
        assert_eq!(config.server.port, 5001);
    }
}
