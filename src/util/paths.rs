//! Well-known filesystem paths.

use std::path::PathBuf;

/// Base directory for stepviz files (`~/.stepviz`).
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".stepviz")
}

/// Default config file location (`~/.stepviz/config.toml`).
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}
