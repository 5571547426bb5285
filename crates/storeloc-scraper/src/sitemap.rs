//! Sitemap reader: enumerates store page URLs from a local sitemap file.

use std::path::Path;

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use crate::error::ScraperError;

/// Namespace the store sitemap declares for its elements.
pub const SITEMAP_NAMESPACE: &str = "https://www.sitemaps.org/schemas/sitemap/0.9";
/// Canonical spelling of the sitemap protocol namespace.
const SITEMAP_NAMESPACE_HTTP: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

fn is_sitemap_namespace(ns: Namespace<'_>) -> bool {
    let ns = ns.as_ref();
    ns == SITEMAP_NAMESPACE.as_bytes() || ns == SITEMAP_NAMESPACE_HTTP.as_bytes()
}

fn is_loc(resolved: &ResolveResult<'_>, local_name: &[u8]) -> bool {
    local_name == b"loc" && matches!(resolved, ResolveResult::Bound(ns) if is_sitemap_namespace(*ns))
}

/// Read the sitemap at `path` and return its `<loc>` URLs in document order.
///
/// Never fails: unreadable files and malformed XML are logged and yield an
/// empty list, so callers treat "no URLs" as an ordinary outcome.
pub fn read_sitemap(path: &Path) -> Vec<String> {
    let parsed = std::fs::read_to_string(path)
        .map_err(|source| ScraperError::SitemapIo {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|xml| parse_sitemap(&xml));

    match parsed {
        Ok(urls) => urls,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "error parsing sitemap");
            Vec::new()
        }
    }
}

/// Collect the text of every namespaced `<loc>` element anywhere in `xml`.
///
/// Empty `<loc>` elements are skipped.
///
/// # Errors
///
/// Returns [`ScraperError::Xml`] for syntax errors and mismatched tags, and
/// [`ScraperError::MalformedSitemap`] when the document has no root element
/// or ends with unclosed elements. No partial result is returned.
pub fn parse_sitemap(xml: &str) -> Result<Vec<String>, ScraperError> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut urls = Vec::new();
    let mut depth = 0usize;
    let mut saw_root = false;
    let mut current: Option<String> = None;

    loop {
        match reader.read_resolved_event()? {
            (resolved, Event::Start(e)) => {
                depth += 1;
                saw_root = true;
                if current.is_none() && is_loc(&resolved, e.local_name().as_ref()) {
                    current = Some(String::new());
                }
            }
            (resolved, Event::End(e)) => {
                depth = depth.saturating_sub(1);
                if is_loc(&resolved, e.local_name().as_ref()) {
                    if let Some(text) = current.take() {
                        push_loc(&mut urls, text);
                    }
                }
            }
            (_, Event::Empty(_)) => saw_root = true,
            (_, Event::Text(e)) => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&e.unescape()?);
                }
            }
            (_, Event::CData(e)) => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            (_, Event::Eof) => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(ScraperError::MalformedSitemap {
            reason: "no root element".to_string(),
        });
    }
    if depth > 0 {
        return Err(ScraperError::MalformedSitemap {
            reason: format!("{depth} unclosed element(s) at end of document"),
        });
    }

    Ok(urls)
}

fn push_loc(urls: &mut Vec<String>, text: String) {
    let url = text.trim();
    if url.is_empty() {
        tracing::debug!("skipping empty <loc> entry");
        return;
    }
    urls.push(url.to_string());
}
