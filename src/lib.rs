//! devserve - development static file server
//!
//! Serves files over plain HTTP from a fixed serving root (by default
//! the directory containing the executable). Built on tokio and hyper.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

pub use config::Config;
pub use server::Server;
