use crate::infrastructure::db::DbPool;
use crate::{
    domain::news::{NewsArticle, StoredNews},
    error::{AppError, AppResult},
};
use std::sync::Arc;

const LIST_SEPARATOR: &str = ",";

const INSERT_NEWS: &str = r#"
    INSERT INTO news (location, title, description, link, pub_date, source_id, category, country)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
"#;

pub struct NewsRepository {
    pool: Arc<DbPool>,
}

impl NewsRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Insert a batch of articles for a location, one row per article.
    ///
    /// All inserts run on a single connection, so the statement is prepared
    /// once and reused for the whole batch. The batch is not transactional:
    /// rows inserted before a failure stay committed.
    pub async fn save_articles(&self, location: &str, articles: &[NewsArticle]) -> AppResult<usize> {
        if articles.is_empty() {
            return Ok(0);
        }

        let mut conn = self.pool.acquire().await?;

        for (index, article) in articles.iter().enumerate() {
            sqlx::query(INSERT_NEWS)
                .bind(location)
                .bind(&article.title)
                .bind(&article.description)
                .bind(&article.link)
                .bind(&article.pub_date)
                .bind(&article.source_id)
                .bind(article.category.join(LIST_SEPARATOR))
                .bind(article.country.join(LIST_SEPARATOR))
                .execute(&mut *conn)
                .await
                .map_err(|e| {
                    AppError::Persistence(format!(
                        "failed to insert article {} of {}: {}",
                        index + 1,
                        articles.len(),
                        e
                    ))
                })?;
        }

        tracing::info!(location = %location, count = articles.len(), "Articles saved to database");

        Ok(articles.len())
    }

    /// Get all stored rows for a location, oldest first
    pub async fn find_by_location(&self, location: &str) -> AppResult<Vec<StoredNews>> {
        let pool = self.pool.as_ref();
        let rows = sqlx::query_as::<_, StoredNews>(
            r#"
            SELECT id, location, title, description, link, pub_date, source_id, category, country
            FROM news
            WHERE location = ?
            ORDER BY id ASC
            "#,
        )
        .bind(location)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Count stored rows for a location
    pub async fn count_by_location(&self, location: &str) -> AppResult<i64> {
        let pool = self.pool.as_ref();
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM news WHERE location = ?")
            .bind(location)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
