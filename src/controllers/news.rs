use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

use crate::domain::news::{FetchNewsRequest, FetchNewsResponse};
use crate::{
    domain::news::{NewsService, NewsServiceApi},
    error::{AppError, AppResult},
};

pub struct NewsController {
    news_service: Arc<NewsService>,
}

impl NewsController {
    pub fn new(news_service: Arc<NewsService>) -> Self {
        Self { news_service }
    }

    /// POST /news/fetch - Fetch top news for a location and store them
    ///
    /// The body is decoded as JSON whatever Content-Type the client sent.
    pub async fn fetch_news(
        State(controller): State<Arc<NewsController>>,
        body: Bytes,
    ) -> AppResult<Json<FetchNewsResponse>> {
        let request: FetchNewsRequest =
            serde_json::from_slice(&body).map_err(|e| AppError::BadRequest(e.to_string()))?;

        let saved = controller.news_service.fetch_and_store(request).await?;

        Ok(Json(FetchNewsResponse::saved(saved)))
    }
}
