use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use news_fetcher::controllers::news::NewsController;
use news_fetcher::domain::news::NewsService;
use news_fetcher::infrastructure::config::{Config, LogFormat};
use news_fetcher::infrastructure::db::{check_connection, create_pool, ensure_schema};
use news_fetcher::infrastructure::http::start_http_server;
use news_fetcher::infrastructure::repositories::{NewsDataProvider, NewsRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration; NEWS_API_KEY is required
    let config = Config::from_env().context("failed to load configuration")?;

    init_logging(&config);

    tracing::info!(
        "Starting News Fetcher on {}:{}",
        config.host,
        config.port
    );

    let pool = create_pool(&config.database_url, config.database_max_connections)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;
    tracing::info!("Database connection pool created");

    check_connection(&pool)
        .await
        .context("failed to ping database")?;

    ensure_schema(&pool)
        .await
        .context("failed to create news table")?;
    tracing::info!("Database initialized");

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    let news_repo = Arc::new(NewsRepository::new(pool.clone()));
    let news_provider = Arc::new(NewsDataProvider::new(
        config.news_api_base_url.clone(),
        config.news_language.clone(),
    ));
    let news_service = Arc::new(NewsService::new(
        news_provider,
        news_repo,
        config.news_api_key.clone(),
    ));
    let news_controller = Arc::new(NewsController::new(news_service));

    start_http_server(config, news_controller)
        .await
        .context("HTTP server failed")?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "news_fetcher=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
