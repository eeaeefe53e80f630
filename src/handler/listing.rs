//! Directory listing generation
//!
//! Renders an HTML page naming every direct child of a served
//! directory. Directories carry a trailing slash and entries are
//! sorted by name.

use std::path::Path;
use tokio::fs;

/// Render the listing page for `dir`, with links resolving against
/// `request_path` whether or not it carries a trailing slash.
pub async fn render_directory(request_path: &str, dir: &Path) -> std::io::Result<String> {
    let mut entries = Vec::new();
    let mut read_dir = fs::read_dir(dir).await?;
    while let Some(entry) = read_dir.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await?.is_dir() {
            name.push('/');
        }
        entries.push(name);
    }
    entries.sort();

    Ok(render_page(request_path, &entries))
}

/// Build the listing HTML from already-collected entry names
fn render_page(request_path: &str, entries: &[String]) -> String {
    let title = format!("Directory listing for {}", html_escape(request_path));
    let base = if request_path.ends_with('/') {
        request_path.to_string()
    } else {
        format!("{request_path}/")
    };

    let mut items = String::new();
    for name in entries {
        // href needs URL form, display text needs HTML form
        items.push_str(&format!(
            "<li><a href=\"{}{}\">{}</a></li>\n",
            html_escape(&base),
            percent_encode(name),
            html_escape(name)
        ));
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n<hr>\n<ul>\n{items}</ul>\n<hr>\n</body>\n</html>\n"
    )
}

/// Percent-encode an entry name for use in an href
///
/// The trailing slash marking a directory entry is kept as-is.
fn percent_encode(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for &byte in name.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Escape text for inclusion in HTML content and attribute values
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_page_lists_entries() {
        let entries = vec!["a.txt".to_string(), "sub/".to_string()];
        let html = render_page("/files", &entries);
        assert!(html.contains("Directory listing for /files"));
        assert!(html.contains("<a href=\"/files/a.txt\">a.txt</a>"));
        assert!(html.contains("<a href=\"/files/sub/\">sub/</a>"));
    }

    #[test]
    fn test_render_page_trailing_slash() {
        let html = render_page("/files/", &["a.txt".to_string()]);
        assert!(html.contains("href=\"/files/a.txt\""));
        assert!(!html.contains("//a.txt"));
    }

    #[test]
    fn test_render_page_encodes_hrefs() {
        let entries = vec!["my file.txt".to_string(), "café/".to_string()];
        let html = render_page("/", &entries);
        assert!(html.contains("<a href=\"/my%20file.txt\">my file.txt</a>"));
        assert!(html.contains("href=\"/caf%C3%A9/\""));
    }

    #[test]
    fn test_percent_encode() {
        assert_eq!(percent_encode("a b.txt"), "a%20b.txt");
        assert_eq!(percent_encode("sub/"), "sub/");
        assert_eq!(percent_encode("plain-name_1.txt"), "plain-name_1.txt");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[tokio::test]
    async fn test_render_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("hello.txt"), "hi").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let html = render_directory("/", dir.path()).await.unwrap();
        assert!(html.contains("hello.txt"));
        assert!(html.contains("nested/"));
    }
}
