use super::error::NewsServiceError;
use crate::domain::news::{FetchNewsRequest, NewsArticle};
use crate::infrastructure::repositories::{NewsProvider, NewsRepository};
use async_trait::async_trait;
use std::sync::Arc;

pub struct NewsService {
    news_provider: Arc<dyn NewsProvider>,
    news_repo: Arc<NewsRepository>,
    api_key: String,
}

impl NewsService {
    pub fn new(
        news_provider: Arc<dyn NewsProvider>,
        news_repo: Arc<NewsRepository>,
        api_key: String,
    ) -> Self {
        Self {
            news_provider,
            news_repo,
            api_key,
        }
    }
}

#[async_trait]
pub trait NewsServiceApi: Send + Sync {
    /// Fetch the latest news for the requested location and store the top
    /// `request.top` articles. Returns the number of rows saved.
    async fn fetch_and_store(&self, request: FetchNewsRequest) -> Result<usize, NewsServiceError>;
}

#[async_trait]
impl NewsServiceApi for NewsService {
    async fn fetch_and_store(&self, request: FetchNewsRequest) -> Result<usize, NewsServiceError> {
        if self.api_key.trim().is_empty() {
            return Err(NewsServiceError::MissingApiKey);
        }

        let results = self
            .news_provider
            .fetch_news(&self.api_key, &request.location)
            .await?;

        let articles = select_top(results, request.top);

        tracing::info!(
            location = %request.location,
            requested = request.top,
            keeping = articles.len(),
            "Storing fetched news"
        );

        let saved = self
            .news_repo
            .save_articles(&request.location, &articles)
            .await?;

        Ok(saved)
    }
}

/// Keep the first `top` results, clamped to what the upstream returned.
fn select_top<T: Into<NewsArticle>>(results: Vec<T>, top: u64) -> Vec<NewsArticle> {
    let top = usize::try_from(top).unwrap_or(usize::MAX);
    results.into_iter().take(top).map(Into::into).collect()
}
