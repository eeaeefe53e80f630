// Configuration module entry point
// Manages application configuration and shared runtime state

mod state;
mod types;

use std::net::SocketAddr;
use std::path::PathBuf;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, ServerConfig, ServingConfig};

impl Config {
    /// Load configuration from the default `devserve.toml` file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("devserve")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; built-in defaults apply when it is absent.
    /// Environment variables with the `DEVSERVE` prefix override both.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("DEVSERVE").separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Resolve the serving root: the configured path, or the directory
    /// containing the executable when none is configured.
    pub fn resolve_root(&self) -> std::io::Result<PathBuf> {
        match &self.serving.root {
            Some(root) => Ok(PathBuf::from(root)),
            None => {
                let exe = std::env::current_exe()?;
                exe.parent().map(PathBuf::from).ok_or_else(|| {
                    std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "executable has no parent directory",
                    )
                })
            }
        }
    }
}
