mod settings;

pub use settings::{ArrayGenConfig, Config, ServerConfig};
