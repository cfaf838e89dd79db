//! News search service models.
//!
//! Contains the article record and the accepted response shapes of the
//! `/search` and `/latest` endpoints.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// A single news article returned by the search service.
///
/// Articles are immutable once received and are replaced wholesale with
/// every completed request.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Article {
    /// Article URL, also the stable key of a card
    pub url: String,
    /// Headline
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Short description or lead paragraph
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Source domain (e.g. "bbc.com")
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source: String,
    /// Publication date as sent by the service
    #[serde(
        rename = "date published",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub date_published: String,
    /// Lead image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Relevance score attached to search hits
    #[serde(default)]
    pub score: Option<f64>,
}

impl Article {
    /// Format the publication date as a readable string.
    ///
    /// # Returns
    /// * `String` - Formatted date (e.g., "Mon. 15.01.2024") or the raw value
    ///
    /// # Details
    /// Accepts RFC 3339 timestamps, `YYYY-MM-DD HH:MM:SS` and plain
    /// `YYYY-MM-DD`. Anything else is shown as received.
    pub fn format_date(&self) -> String {
        let raw = self.date_published.trim();
        if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
            return date.format("%a. %d.%m.%Y").to_string();
        }
        if let Ok(date) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return date.format("%a. %d.%m.%Y").to_string();
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return date.format("%a. %d.%m.%Y").to_string();
        }
        raw.to_string()
    }

    /// Image URL, if the service sent a non-empty one.
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Body of a `/search` or `/latest` response.
///
/// The service answers either with an object wrapping the hits or with a
/// bare array. Any other shape is a decode error.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    /// `{ "results": [...] }`
    Wrapped {
        /// Hits in ranking order
        results: Vec<Article>,
    },
    /// `[...]`
    Bare(Vec<Article>),
}

impl SearchResponse {
    /// Unwrap into the ordered list of articles.
    pub fn into_articles(self) -> Vec<Article> {
        match self {
            SearchResponse::Wrapped { results } => results,
            SearchResponse::Bare(articles) => articles,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
