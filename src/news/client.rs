//! News search service client implementation.
//!
//! Issues `/search` and `/latest` requests and decodes their responses.

use crate::config::Config;
use crate::news::error::NewsError;
use crate::news::models::{Article, SearchResponse};
use crate::news::query::{Endpoint, SearchFilters};
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// HTTP client for the news search service.
#[derive(Debug, Clone)]
pub struct NewsClient {
    /// HTTP client for API requests
    client: Client,
    /// Base URL of the search service, without trailing slash
    base_url: String,
}

impl NewsClient {
    /// Create a new client from configuration.
    ///
    /// # Arguments
    /// * `config` - Application configuration
    ///
    /// # Returns
    /// * `Result<NewsClient>` - New client or error
    ///
    /// # Details
    /// Uses `base_url` and `request_timeout_secs` from the configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(anyhow::anyhow!(
                "News service base_url is required. Please set it in config.jsonc"
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Search articles matching a query and filters.
    ///
    /// # Arguments
    /// * `query` - Search text
    /// * `filters` - Filters; only non-empty ones are sent
    ///
    /// # Returns
    /// * `Result<Vec<Article>, NewsError>` - Hits in ranking order
    pub async fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Article>, NewsError> {
        self.fetch(&Endpoint::Search {
            query: query.to_string(),
            filters: filters.clone(),
        })
        .await
    }

    /// Fetch the most recent articles.
    pub async fn latest(&self) -> Result<Vec<Article>, NewsError> {
        self.fetch(&Endpoint::Latest).await
    }

    /// Issue a GET for `endpoint` and decode the article list.
    ///
    /// # Details
    /// Non-2xx statuses are errors. The body may be either a `results`
    /// wrapper or a bare array; any other shape is a decode error.
    pub async fn fetch(&self, endpoint: &Endpoint) -> Result<Vec<Article>, NewsError> {
        let url = format!("{}/{}", self.base_url, endpoint.path());
        let params = endpoint.params();
        debug!(%url, ?params, "issuing news request");

        let response = self.client.get(&url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NewsError::Status { status, body });
        }

        let body = response.text().await?;
        let decoded: SearchResponse = serde_json::from_str(&body)?;
        Ok(decoded.into_articles())
    }
}
