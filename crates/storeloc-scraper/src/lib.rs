pub mod error;
pub mod extract;
pub mod fetch;
pub mod sitemap;
pub mod text;
pub mod types;

pub use error::ScraperError;
pub use extract::{extract_store, location_id};
pub use fetch::PageFetcher;
pub use sitemap::{parse_sitemap, read_sitemap};
pub use text::clean_text;
pub use types::{sort_by_location_id, StoreRecord, TradingHourEntry};
