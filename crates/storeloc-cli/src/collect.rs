//! Store collection pipeline for the CLI.
//!
//! Reads the sitemap, fetches every listed store page one at a time,
//! extracts a record from each, then reports failures on the diagnostic
//! writer and prints the sorted records as JSON on the output writer.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use storeloc_core::AppConfig;
use storeloc_scraper::{
    extract_store, read_sitemap, sort_by_location_id, PageFetcher, ScraperError, StoreRecord,
};

#[derive(Debug, Clone)]
pub(crate) struct CollectOptions {
    pub(crate) sitemap_path: PathBuf,
    pub(crate) request_timeout_secs: u64,
    /// Fixed pause after each fetch attempt.
    pub(crate) inter_request_delay: Duration,
    pub(crate) user_agent: Option<String>,
    /// Per-store progress lines on the diagnostic writer.
    pub(crate) verbose: bool,
}

impl CollectOptions {
    pub(crate) fn from_config(config: &AppConfig, verbose: bool) -> Self {
        Self {
            sitemap_path: config.sitemap_path.clone(),
            request_timeout_secs: config.request_timeout_secs,
            inter_request_delay: Duration::from_millis(config.inter_request_delay_ms),
            user_agent: config.user_agent.clone(),
            verbose,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum CollectError {
    #[error("sitemap file '{}' not found", path.display())]
    SitemapMissing { path: PathBuf },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] ScraperError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize stores: {0}")]
    Json(#[from] serde_json::Error),
}

/// A sitemap entry that produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FailedPage {
    /// 1-based position in the sitemap.
    pub(crate) index: usize,
    pub(crate) url: String,
}

#[derive(Debug, Default)]
pub(crate) struct CollectOutcome {
    /// Sorted by `location_id`.
    pub(crate) stores: Vec<StoreRecord>,
    pub(crate) failures: Vec<FailedPage>,
}

/// Run the whole pipeline, writing JSON to `out` and progress to `diag`.
///
/// # Errors
///
/// Returns [`CollectError::SitemapMissing`] before any network activity
/// when the sitemap file does not exist. Per-page failures never surface
/// as errors; they are listed in the summary on `diag`.
pub(crate) async fn run_collect<W, D>(
    options: &CollectOptions,
    out: &mut W,
    diag: &mut D,
) -> Result<CollectOutcome, CollectError>
where
    W: Write,
    D: Write,
{
    if !options.sitemap_path.exists() {
        return Err(CollectError::SitemapMissing {
            path: options.sitemap_path.clone(),
        });
    }

    let urls = read_sitemap(&options.sitemap_path);
    if options.verbose {
        writeln!(diag, "Found {} stores in sitemap", urls.len())?;
    }

    let fetcher = PageFetcher::new(options.request_timeout_secs, options.user_agent.as_deref())?;
    let mut outcome = collect_stores(&fetcher, &urls, options, diag).await?;

    write_summary(diag, &outcome)?;

    sort_by_location_id(&mut outcome.stores);
    serde_json::to_writer_pretty(&mut *out, &outcome.stores)?;
    writeln!(out)?;
    out.flush()?;

    Ok(outcome)
}

async fn collect_stores<D: Write>(
    fetcher: &PageFetcher,
    urls: &[String],
    options: &CollectOptions,
    diag: &mut D,
) -> Result<CollectOutcome, CollectError> {
    let total = urls.len();
    let mut outcome = CollectOutcome::default();

    for (i, url) in urls.iter().enumerate() {
        let index = i + 1;
        if options.verbose {
            writeln!(diag, "Fetching: {url}")?;
        }

        match fetch_store(fetcher, url).await {
            Some(store) => {
                if options.verbose {
                    writeln!(diag, "  [{index}/{total}] {}", store.public_name)?;
                }
                outcome.stores.push(store);
            }
            None => {
                if options.verbose {
                    writeln!(diag, "  [{index}/{total}] Failed to extract")?;
                }
                outcome.failures.push(FailedPage {
                    index,
                    url: url.clone(),
                });
            }
        }

        tokio::time::sleep(options.inter_request_delay).await;
    }

    Ok(outcome)
}

async fn fetch_store(fetcher: &PageFetcher, url: &str) -> Option<StoreRecord> {
    let html = match fetcher.fetch(url).await {
        Ok(html) => html,
        Err(e) => {
            tracing::warn!(url, error = %e, "error fetching store page");
            return None;
        }
    };

    let store = extract_store(&html, url);
    if store.is_none() {
        tracing::warn!(url, "store page has no store heading; skipping");
    }
    store
}

fn write_summary<D: Write>(diag: &mut D, outcome: &CollectOutcome) -> std::io::Result<()> {
    writeln!(diag, "Extracted {} stores", outcome.stores.len())?;
    if !outcome.failures.is_empty() {
        writeln!(diag, "Failed to extract {} stores:", outcome.failures.len())?;
        for failure in &outcome.failures {
            writeln!(diag, "  [{}] {}", failure.index, failure.url)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
