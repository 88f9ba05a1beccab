use crate::store::Category;
use std::future::Future;
use thiserror::Error;

/// Errors from the category fetch
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),
}

/// Source of category data for the listing view.
///
/// The view loads through this trait so tests can feed it canned results
/// without a running server.
pub trait CategoryFetcher {
    fn fetch_categories(&self) -> impl Future<Output = Result<Vec<Category>, FetchError>> + Send;
}

/// Fetches categories from the JSON API over HTTP.
pub struct HttpCategoryFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCategoryFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl CategoryFetcher for HttpCategoryFetcher {
    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        let url = format!("{}/api/categories", self.base_url.trim_end_matches('/'));

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}
