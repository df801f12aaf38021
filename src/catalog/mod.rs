//! Catalog Module
//!
//! Categories, records, the category cache, the page-size setting and the
//! pagination arithmetic shared by every consumer.

mod cache;
mod category;
mod entry;
mod page_size;
mod pagination;
mod pricing;
mod record;
mod stats;


// Re-export public types
pub use cache::{CachePolicy, CategoryCache};
pub use category::Category;
pub use entry::CacheEntry;
pub use page_size::{
    is_valid_page_size, parse_page_size, PageSizeSetting, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use pagination::{Page, ITEMS_PER_SCREEN};
pub use pricing::{price_records, random_price};
pub use record::{filter_category_items, matches_query, PricedRecord, Record, SEARCH_FIELDS};
pub use stats::CacheStats;
