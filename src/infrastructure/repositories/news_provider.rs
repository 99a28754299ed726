use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

/// A single article as returned by the news API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(rename = "pubDate", default, deserialize_with = "null_as_default")]
    pub pub_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_id: String,
}

/// Envelope returned by the news API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsApiResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "totalResults", default)]
    pub total_results: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<NewsResult>,
}

#[derive(Debug, thiserror::Error)]
pub enum NewsApiError {
    #[error("request failed: {0}")]
    Fetch(String),
    #[error("could not read response: {0}")]
    Read(String),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("non-success status {0:?}")]
    Status(String),
}

/// Source of news articles for a location.
///
/// Implementations issue one request per call: no retries, no pagination.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch the latest articles for `location` (passed upstream as the country filter).
    ///
    /// # Errors
    /// Returns [`NewsApiError`] on network failure, non-2xx or unreadable
    /// responses, malformed JSON, or a status other than `"success"`.
    async fn fetch_news(&self, api_key: &str, location: &str) -> Result<Vec<NewsResult>, NewsApiError>;
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
