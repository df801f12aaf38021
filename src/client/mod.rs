//! Client Module
//!
//! Access to the remote random-data API and the two fetch operations built
//! on top of it.
//!
//! # Operations
//! - `Browser::fetch_all_categories` - Cached, staggered search across all categories
//! - `Browser::fetch_category_items` - Fresh, priced listing of one category
//! - `Browser::set_records_per_page` - Page size used by both

mod browser;
mod remote;

pub use browser::{Browser, DEFAULT_SEARCH_STAGGER};
pub use remote::{RemoteDataSource, DEFAULT_BASE_URL};
