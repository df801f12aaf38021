//! Remote Data Source
//!
//! Thin reqwest client for `GET {base}{category}?size={n}`.

use reqwest::Client as ReqwestClient;
use tracing::debug;

use crate::catalog::{Category, Record};
use crate::error::{BrowseError, Result};

/// Public random-data API
pub const DEFAULT_BASE_URL: &str = "https://random-data-api.com/api/v2/";

#[derive(Debug, Clone)]
pub struct RemoteDataSource {
    http: ReqwestClient,
    base_url: String,
}

impl RemoteDataSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(ReqwestClient::new(), base_url)
    }

    pub fn with_client(http: ReqwestClient, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint for one category.
    pub fn endpoint(&self, category: Category) -> String {
        format!("{}{}", self.base_url, category.key())
    }

    /// Fetches `size` records of a category.
    ///
    /// A non-success status becomes [`BrowseError::UpstreamStatus`]; transport
    /// and decode failures keep their own variants.
    pub async fn fetch(&self, category: Category, size: u32) -> Result<Vec<Record>> {
        let url = self.endpoint(category);
        debug!(%url, size, "requesting records");

        let response = self
            .http
            .get(&url)
            .query(&[("size", size)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BrowseError::UpstreamStatus {
                category: category.key().to_string(),
                status,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| BrowseError::Decode {
            category: category.key().to_string(),
            source,
        })
    }
}

impl Default for RemoteDataSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let source = RemoteDataSource::new("http://localhost:9000/api/v2");
        assert_eq!(source.base_url(), "http://localhost:9000/api/v2/");
    }

    #[test]
    fn test_endpoint() {
        let source = RemoteDataSource::default();
        assert_eq!(
            source.endpoint(Category::Beers),
            "https://random-data-api.com/api/v2/beers"
        );
    }
}
