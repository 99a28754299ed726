use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::infrastructure::repositories::NewsResult;

/// Article ready to be stored for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub description: String,
    pub link: String,
    pub pub_date: String,
    pub source_id: String,
    pub category: Vec<String>,
    pub country: Vec<String>,
}

/// Row of the `news` table. List fields are stored comma-joined.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoredNews {
    pub id: i64,
    pub location: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub pub_date: String,
    pub source_id: String,
    pub category: String,
    pub country: String,
}

// image_url is not persisted
impl From<NewsResult> for NewsArticle {
    fn from(result: NewsResult) -> Self {
        Self {
            title: result.title,
            description: result.description,
            link: result.link,
            pub_date: result.pub_date,
            source_id: result.source_id,
            category: result.category,
            country: result.country,
        }
    }
}
