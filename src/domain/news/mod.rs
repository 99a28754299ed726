pub mod error;
pub mod model;
pub mod service;

pub use error::NewsServiceError;
pub use model::{NewsArticle, StoredNews};
pub use service::{NewsService, NewsServiceApi};

use serde::{Deserialize, Serialize};

pub const FETCH_SUCCESS_MESSAGE: &str = "News fetched and stored successfully";

/// Request body for POST /news/fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchNewsRequest {
    pub location: String,
    /// Number of articles to keep. Absent means zero.
    #[serde(default)]
    pub top: u64,
}

/// Response body for POST /news/fetch
#[derive(Debug, Serialize, Deserialize)]
pub struct FetchNewsResponse {
    pub message: String,
    pub articles_saved: String,
}

impl FetchNewsResponse {
    pub fn saved(count: usize) -> Self {
        Self {
            message: FETCH_SUCCESS_MESSAGE.to_string(),
            articles_saved: count.to_string(),
        }
    }
}
