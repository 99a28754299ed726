use super::news_provider::{NewsApiError, NewsApiResponse, NewsProvider, NewsResult};
use async_trait::async_trait;

const NEWS_PATH: &str = "/api/1/news";
const SUCCESS_STATUS: &str = "success";

/// newsdata.io client
pub struct NewsDataProvider {
    base_url: String,
    language: String,
    http_client: reqwest::Client,
}

impl NewsDataProvider {
    pub fn new(base_url: String, language: String) -> Self {
        Self {
            base_url,
            language,
            http_client: reqwest::Client::new(),
        }
    }

    /// Build the news endpoint URL for a location
    pub fn build_url(&self, api_key: &str, location: &str) -> String {
        format!(
            "{}{}?apikey={}&country={}&language={}",
            self.base_url,
            NEWS_PATH,
            urlencoding::encode(api_key),
            urlencoding::encode(location),
            urlencoding::encode(&self.language)
        )
    }
}

#[async_trait]
impl NewsProvider for NewsDataProvider {
    async fn fetch_news(&self, api_key: &str, location: &str) -> Result<Vec<NewsResult>, NewsApiError> {
        tracing::debug!(location = %location, "Fetching news from upstream");

        let response = self
            .http_client
            .get(self.build_url(api_key, location))
            .send()
            .await
            .map_err(|e| NewsApiError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsApiError::Read(format!("upstream responded with {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| NewsApiError::Read(e.to_string()))?;

        let envelope = parse_envelope(&body)?;

        tracing::debug!(
            location = %location,
            total_results = envelope.total_results,
            returned = envelope.results.len(),
            "Upstream news received"
        );

        Ok(envelope.results)
    }
}

/// Decode the envelope and reject any status other than `"success"`
fn parse_envelope(body: &[u8]) -> Result<NewsApiResponse, NewsApiError> {
    let envelope: NewsApiResponse =
        serde_json::from_slice(body).map_err(|e| NewsApiError::Decode(e.to_string()))?;

    if envelope.status != SUCCESS_STATUS {
        return Err(NewsApiError::Status(envelope.status));
    }

    Ok(envelope)
}
