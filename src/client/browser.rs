//! Browser
//!
//! The aggregate search and category listing operations, bound to a remote
//! data source, a category cache and a page-size setting.

use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::catalog::{
    matches_query, price_records, CachePolicy, CacheStats, Category, CategoryCache,
    PageSizeSetting, PricedRecord, Record,
};
use crate::client::RemoteDataSource;
use crate::config::Config;
use crate::error::{BrowseError, Result};

/// Delay between search fetch initiations
pub const DEFAULT_SEARCH_STAGGER: Duration = Duration::from_millis(200);

// == Browser ==
/// Entry point for fetching records. Clones share cache and settings.
#[derive(Debug, Clone)]
pub struct Browser {
    source: RemoteDataSource,
    cache: Arc<RwLock<CategoryCache>>,
    page_size: PageSizeSetting,
    search_stagger: Duration,
}

impl Browser {
    pub fn new(source: RemoteDataSource, policy: CachePolicy) -> Self {
        Self {
            source,
            cache: Arc::new(RwLock::new(CategoryCache::new(policy))),
            page_size: PageSizeSetting::new(),
            search_stagger: DEFAULT_SEARCH_STAGGER,
        }
    }

    /// Builds a browser from configuration.
    pub fn from_config(config: &Config) -> Self {
        let source = RemoteDataSource::new(config.base_url.clone());
        let browser =
            Self::new(source, config.cache_policy()).with_search_stagger(config.search_stagger());
        browser.set_records_per_page(config.records_per_page);
        browser
    }

    pub fn with_search_stagger(mut self, stagger: Duration) -> Self {
        self.search_stagger = stagger;
        self
    }

    /// Shared cache handle, used by the cleanup task.
    pub fn cache(&self) -> Arc<RwLock<CategoryCache>> {
        Arc::clone(&self.cache)
    }

    pub fn page_size(&self) -> &PageSizeSetting {
        &self.page_size
    }

    // == Settings ==
    /// Sets the records requested per category. Invalid values reset to the
    /// default; the effective value is returned.
    pub fn set_records_per_page(&self, size: i64) -> u32 {
        let effective = self.page_size.set(size);
        info!(requested = size, effective, "records per page updated");
        effective
    }

    pub fn records_per_page(&self) -> u32 {
        self.page_size.get()
    }

    // == Aggregate Search ==
    /// Searches all four categories for `query`.
    ///
    /// Cached categories are reused; misses are fetched at the current page
    /// size and cached on success. Fetches start `search_stagger` apart. A
    /// category answering with a non-success status contributes nothing;
    /// transport and decode failures abort the search.
    pub async fn fetch_all_categories(&self, query: &str) -> Result<Vec<Record>> {
        let size = self.page_size.get();

        let fetches = Category::ALL.into_iter().enumerate().map(|(index, category)| {
            let delay = self.search_stagger * index as u32;
            async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                self.cached_or_fetch(category, size).await
            }
        });

        let per_category = try_join_all(fetches).await?;

        let results: Vec<Record> = per_category
            .into_iter()
            .flatten()
            .filter(|record| matches_query(record, query))
            .collect();

        info!(query, matches = results.len(), "search finished");
        Ok(results)
    }

    async fn cached_or_fetch(&self, category: Category, size: u32) -> Result<Vec<Record>> {
        if let Some(records) = self.cache.write().await.get(category) {
            debug!(%category, "cache hit");
            return Ok(records);
        }

        info!(%category, size, "fetching category");
        match self.source.fetch(category, size).await {
            Ok(records) => {
                self.cache.write().await.put(category, records.clone());
                Ok(records)
            }
            Err(BrowseError::UpstreamStatus { status, .. }) => {
                warn!(
                    url = %self.source.endpoint(category),
                    %status,
                    "failed to fetch category, continuing without it"
                );
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    // == Category Listing ==
    /// Fetches one category fresh, bypassing the cache, and prices every
    /// record.
    pub async fn fetch_category_items(&self, category: &str) -> Result<Vec<PricedRecord>> {
        let category: Category = category.parse()?;
        let size = self.page_size.get();

        info!(%category, size, "listing category");
        let records = self.source.fetch(category, size).await?;
        Ok(price_records(category, records))
    }

    // == Cache Control ==
    pub async fn invalidate(&self, category: Category) -> bool {
        self.cache.write().await.invalidate(category)
    }

    pub async fn clear_cache(&self) -> usize {
        self.cache.write().await.clear()
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }
}
