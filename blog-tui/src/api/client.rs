use anyhow::{Context, Result};
use blogapi::domain::{Article, ArticleFilter, CategoryTaxonomy};
use blogapi::{ApiUrl, BlogApiClient};

use crate::api::dev_backend::DevBackend;

#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: BlogApiClient,
    dev_backend: Option<DevBackend>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim();
        anyhow::ensure!(!base_url.is_empty(), "API URL must not be empty");

        Ok(Self {
            inner: BlogApiClient::new(ApiUrl::new(base_url)),
            dev_backend: None,
        })
    }

    pub fn dev() -> Self {
        Self {
            inner: BlogApiClient::new(ApiUrl::new("http://localhost")),
            dev_backend: Some(DevBackend::new()),
        }
    }

    pub async fn categories(&self) -> Result<CategoryTaxonomy> {
        if let Some(dev) = &self.dev_backend {
            return Ok(dev.categories());
        }

        self.inner
            .fetch_categories()
            .await
            .context("GET /api/articles/categories failed")
    }

    pub async fn search(&self, filter: &ArticleFilter) -> Result<Vec<Article>> {
        if let Some(dev) = &self.dev_backend {
            return Ok(dev.search(filter));
        }

        self.inner
            .search_articles(filter)
            .await
            .context("POST /api/articles/search failed")
    }
}
