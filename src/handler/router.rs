//! Request dispatch module
//!
//! Entry point for HTTP request processing: method validation,
//! context extraction, static file dispatch, and access logging.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let is_head = method == Method::HEAD;

    if let Some(resp) = check_http_method(&method) {
        log_access(&state, &peer_addr, method.as_str(), &path, &resp);
        return Ok(resp);
    }

    let ctx = RequestContext {
        path: &path,
        is_head,
        if_none_match: req
            .headers()
            .get("if-none-match")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
    };

    let response = static_files::serve(&ctx, &state).await;
    log_access(&state, &peer_addr, method.as_str(), &path, &response);
    Ok(response)
}

/// Reject methods other than GET/HEAD; answer OPTIONS directly
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Emit one access log line for a handled request, if enabled
fn log_access(
    state: &AppState,
    peer_addr: &SocketAddr,
    method: &str,
    path: &str,
    response: &Response<Full<Bytes>>,
) {
    if !state.config.logging.access_log {
        return;
    }
    let mut entry = logger::AccessLogEntry::new(peer_addr, method, path);
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    logger::log_access(&entry);
}
