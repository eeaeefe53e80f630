//! Logger module
//!
//! Lifecycle and access logging for the development server. Status
//! lines go to stdout, errors to stderr. Access lines use the Common
//! Log Format so standard log tooling can read them.

use chrono::Local;
use std::net::SocketAddr;
use std::path::Path;

/// Access log entry for one handled request
#[derive(Debug)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    pub time: chrono::DateTime<Local>,
    pub method: String,
    pub path: String,
    pub status: u16,
    pub body_bytes: usize,
}

impl AccessLogEntry {
    pub fn new(remote_addr: &SocketAddr, method: &str, path: &str) -> Self {
        Self {
            remote_addr: remote_addr.ip().to_string(),
            time: Local::now(),
            method: method.to_string(),
            path: path.to_string(),
            status: 200,
            body_bytes: 0,
        }
    }

    /// Common Log Format:
    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    pub fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/1.1\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.status,
            self.body_bytes,
        )
    }
}

/// Startup banner, printed before the accept loop starts
pub fn log_server_start(addr: &SocketAddr, root: &Path) {
    println!("Starting development server...");
    println!("Port: {}", addr.port());
    println!("Directory: {}", root.display());
    println!("URL: http://localhost:{}", addr.port());
    println!("-----------------------------------");
    println!("Server running at http://localhost:{}/", addr.port());
    println!("Press Ctrl+C to stop the server");
}

pub fn log_shutdown() {
    println!("\nServer stopped.");
}

/// Diagnostic for the port-in-use bind failure
pub fn log_port_in_use(port: u16) {
    eprintln!("Error: Port {port} is already in use.");
    eprintln!("Please close any other applications using this port and try again.");
}

pub fn log_startup_error(err: &dyn std::fmt::Display) {
    eprintln!("Error starting server: {err}");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_access(entry: &AccessLogEntry) {
    println!("{}", entry.format_common());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_format() {
        let addr: SocketAddr = "127.0.0.1:51000".parse().unwrap();
        let mut entry = AccessLogEntry::new(&addr, "GET", "/index.html");
        entry.status = 200;
        entry.body_bytes = 5;
        let line = entry.format_common();
        assert!(line.starts_with("127.0.0.1 - - ["));
        assert!(line.contains("\"GET /index.html HTTP/1.1\""));
        assert!(line.ends_with("200 5"));
    }
}
