//! Shared state for the web server.

use std::sync::Arc;

use crate::config::Config;

/// Application state shared across handlers. The engine itself is
/// stateless; only the configuration is shared.
#[derive(Clone)]
pub struct WebAppState {
    config: Arc<Config>,
}

impl WebAppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
