use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::domain::{Article, ArticleFilter, CategoryTaxonomy};
use crate::ApiUrl;

/// Client for the blog-scraper backend.
///
/// The backend exposes two endpoints: the category taxonomy and the
/// article search. Everything else (scraping, storage, ranking) lives
/// behind them.
#[derive(Debug, Clone)]
pub struct BlogApiClient {
    http: reqwest::Client,
    base_url: ApiUrl,
}

impl BlogApiClient {
    pub fn new(base_url: ApiUrl) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &ApiUrl {
        &self.base_url
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, BlogApiError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(BlogApiError::Status(status.as_u16()));
        }

        resp.json::<T>().await.map_err(|e| {
            BlogApiError::Parsing(format!("Failed to parse response as JSON: {}", e))
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, url: impl AsRef<str>) -> Result<T, BlogApiError> {
        let resp = self
            .http
            .get(url.as_ref())
            .send()
            .await
            .map_err(|e| BlogApiError::Response(e.to_string()))?;

        Self::decode(resp).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        url: impl AsRef<str>,
        body: &impl Serialize,
    ) -> Result<T, BlogApiError> {
        let resp = self
            .http
            .post(url.as_ref())
            .json(body)
            .send()
            .await
            .map_err(|e| BlogApiError::Response(e.to_string()))?;

        Self::decode(resp).await
    }

    /// Fetch the category → sub-category taxonomy. Key order is
    /// meaningful and preserved by [`CategoryTaxonomy`].
    #[tracing::instrument(skip(self))]
    pub async fn fetch_categories(&self) -> Result<CategoryTaxonomy, BlogApiError> {
        let url = self.base_url.append_path("/api/articles/categories");
        self.fetch(url).await
    }

    /// Search articles matching the given filter. The filter is sent
    /// verbatim as the request body; unset fields go out as empty
    /// strings per the backend contract.
    #[tracing::instrument(skip(self, filter))]
    pub async fn search_articles(
        &self,
        filter: &ArticleFilter,
    ) -> Result<Vec<Article>, BlogApiError> {
        let url = self.base_url.append_path("/api/articles/search");
        self.post(url, filter).await
    }
}

#[derive(Error, Debug)]
pub enum BlogApiError {
    #[error("Status: {0}")]
    Status(u16),
    #[error("ResponseError: {0}")]
    Response(String),
    #[error("ParsingError: {0}")]
    Parsing(String),
}
