use crate::error::AppError;
use crate::infrastructure::repositories::NewsApiError;

#[derive(Debug, thiserror::Error)]
pub enum NewsServiceError {
    #[error("news API key is not configured")]
    MissingApiKey,
    #[error("upstream error: {0}")]
    Upstream(#[from] NewsApiError),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<AppError> for NewsServiceError {
    fn from(err: AppError) -> Self {
        NewsServiceError::Storage(err.to_string())
    }
}

impl From<NewsServiceError> for AppError {
    fn from(err: NewsServiceError) -> Self {
        match err {
            NewsServiceError::MissingApiKey => AppError::Config("NEWS_API_KEY is empty".to_string()),
            NewsServiceError::Upstream(api_err) => match api_err {
                NewsApiError::Fetch(msg) => AppError::UpstreamFetch(msg),
                NewsApiError::Read(msg) => AppError::UpstreamRead(msg),
                NewsApiError::Decode(msg) => AppError::UpstreamParse(msg),
                NewsApiError::Status(status) => AppError::UpstreamStatus(status),
            },
            NewsServiceError::Storage(msg) => AppError::Persistence(msg),
        }
    }
}
