use std::path::PathBuf;

/// Sitemap location used when neither `STORELOC_SITEMAP_PATH` nor
/// `--sitemap` is given. Relative to the working directory.
pub const DEFAULT_SITEMAP_PATH: &str = "target.com.au-stores-sitemap.xml.xml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub sitemap_path: PathBuf,
    pub log_level: String,
    /// Total per-request timeout, connect through body read.
    pub request_timeout_secs: u64,
    /// Fixed pause after every page fetch, successful or not.
    pub inter_request_delay_ms: u64,
    /// `None` sends the HTTP client's default headers only.
    pub user_agent: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sitemap_path: PathBuf::from(DEFAULT_SITEMAP_PATH),
            log_level: "warn".to_string(),
            request_timeout_secs: 10,
            inter_request_delay_ms: 100,
            user_agent: None,
        }
    }
}
