//! Static file serving module
//!
//! Maps request paths to files under the serving root and builds the
//! responses: file bytes with inferred MIME type, index files or a
//! generated listing for directories, 404 for everything else.

use crate::config::AppState;
use crate::handler::listing;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Resolve the request path against the serving root and serve it
pub async fn serve(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let Some(resolved) = resolve_path(ctx.path, &state.root) else {
        return http::build_404_response();
    };

    if resolved.is_dir() {
        serve_dir(ctx, state, &resolved).await
    } else {
        serve_file(ctx, &resolved).await
    }
}

/// Map a request path to a canonical filesystem path under `root`
///
/// The path is percent-decoded first so encoded names (spaces,
/// non-ASCII) reach the file they name. Returns None when no file or
/// directory matches, when the decoded path is invalid, or when the
/// canonical path escapes the root (traversal attempt).
fn resolve_path(request_path: &str, root: &Path) -> Option<PathBuf> {
    let decoded = percent_decode(request_path)?;
    let relative = decoded.trim_start_matches('/');
    let candidate = root.join(relative);

    // Not found is the common case for a miss, nothing to log
    let canonical = candidate.canonicalize().ok()?;
    if !canonical.starts_with(root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            request_path,
            canonical.display()
        ));
        return None;
    }
    Some(canonical)
}

/// Decode `%XX` sequences in a request path
///
/// An encoded `/` or NUL would change which file the path names, so
/// both are rejected. Malformed sequences are kept literally, and the
/// decoded bytes must form valid UTF-8.
fn percent_decode(path: &str) -> Option<String> {
    let bytes = path.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hi = hex_value(bytes[i + 1]);
            let lo = hex_value(bytes[i + 2]);
            if let (Some(hi), Some(lo)) = (hi, lo) {
                let decoded = hi << 4 | lo;
                if decoded == 0 || decoded == b'/' {
                    return None;
                }
                out.push(decoded);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8(out).ok()
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Serve a directory: prefer a configured index file, fall back to a
/// generated listing of its direct children
async fn serve_dir(
    ctx: &RequestContext<'_>,
    state: &AppState,
    dir: &Path,
) -> Response<Full<Bytes>> {
    for index_file in &state.config.serving.index_files {
        let index_path = dir.join(index_file);
        if index_path.is_file() {
            return serve_file(ctx, &index_path).await;
        }
    }

    match listing::render_directory(ctx.path, dir).await {
        Ok(html) => http::response::build_html_response(html, ctx.is_head),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to list directory '{}': {}",
                dir.display(),
                e
            ));
            http::build_500_response()
        }
    }
}

/// Serve a regular file with ETag revalidation
async fn serve_file(ctx: &RequestContext<'_>, file_path: &Path) -> Response<Full<Bytes>> {
    let content = match fs::read(file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            return http::build_500_response();
        }
    };

    let etag = cache::generate_etag(&content);
    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    let content_type = mime::content_type_for(file_path);
    http::response::build_file_response(Bytes::from(content), content_type, &etag, ctx.is_head)
}
