// Server module entry point
// Binding, accept loop, per-connection serving, and signal handling

pub mod connection;
pub mod listener;
pub mod signal;

// Rust does not allow `loop` as a module name (keyword), use server_loop
#[path = "loop.rs"]
pub mod server_loop;

pub use listener::create_listener;
pub use server_loop::start_server_loop;
pub use signal::{start_signal_handler, SignalHandler};

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::config::{AppState, Config};

/// A bound static file server, ready to run.
///
/// Construction resolves the serving root and binds the listener, so
/// every startup failure (missing root, bad address, port in use)
/// surfaces here rather than mid-loop.
pub struct Server {
    listener: TcpListener,
    state: Arc<AppState>,
}

impl Server {
    /// Resolve the root, parse the address, and bind the listener
    pub fn bind(config: Config) -> std::io::Result<Self> {
        let addr = config
            .socket_addr()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
        let state = Arc::new(AppState::new(config)?);
        let listener = create_listener(addr)?;
        Ok(Self { listener, state })
    }

    /// Address the listener actually bound (resolves port 0)
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Canonicalized serving root
    #[must_use]
    pub fn root(&self) -> &std::path::Path {
        &self.state.root
    }

    /// Run the accept loop until `shutdown` is notified
    pub async fn run(self, shutdown: Arc<Notify>) -> std::io::Result<()> {
        start_server_loop(self.listener, self.state, shutdown).await
    }
}
