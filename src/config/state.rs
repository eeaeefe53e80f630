// Application state module
// Holds the immutable per-process state shared across connections

use std::path::PathBuf;

use super::types::Config;

/// Application state
///
/// The serving root is canonicalized once at startup and never changes
/// for the lifetime of the process.
pub struct AppState {
    pub config: Config,
    pub root: PathBuf,
}

impl AppState {
    /// Create `AppState` with the serving root resolved and canonicalized.
    ///
    /// Fails when the root directory does not exist or is inaccessible.
    pub fn new(config: Config) -> std::io::Result<Self> {
        let root = config.resolve_root()?.canonicalize()?;
        if !root.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotADirectory,
                format!("serving root is not a directory: {}", root.display()),
            ));
        }
        Ok(Self { config, root })
    }
}
