use axum::{middleware, routing::post, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::controllers::news::NewsController;
use crate::infrastructure::config::Config;

pub mod request_id;

pub use request_id::request_id_middleware;

/// Build the application router
pub fn create_router(news_controller: Arc<NewsController>) -> Router {
    Router::new()
        .route("/news/fetch", post(NewsController::fetch_news))
        .with_state(news_controller)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware)),
        )
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    news_controller: Arc<NewsController>,
) -> Result<(), std::io::Error> {
    let app = create_router(news_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
