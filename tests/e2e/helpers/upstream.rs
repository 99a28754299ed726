use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;

/// What the stub answers on `GET /api/1/news`
#[derive(Clone)]
pub struct StubReply {
    pub status: StatusCode,
    pub body: String,
}

impl StubReply {
    pub fn json(value: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: value.to_string(),
        }
    }
}

#[derive(Default)]
struct StubState {
    reply: Mutex<Option<StubReply>>,
    queries: Mutex<Vec<HashMap<String, String>>>,
}

/// In-process stand-in for the newsdata.io API
#[derive(Clone)]
pub struct UpstreamStub {
    pub base_url: String,
    state: Arc<StubState>,
}

impl UpstreamStub {
    pub async fn start() -> Self {
        let state = Arc::new(StubState::default());
        *state.reply.lock() = Some(StubReply::json(success_payload(0)));

        let app = Router::new()
            .route("/api/1/news", get(serve_news))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind upstream stub");
        let addr = listener.local_addr().expect("Failed to get stub addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn respond_with(&self, reply: StubReply) {
        *self.state.reply.lock() = Some(reply);
    }

    pub fn respond_with_articles(&self, count: usize) {
        self.respond_with(StubReply::json(success_payload(count)));
    }

    pub fn queries(&self) -> Vec<HashMap<String, String>> {
        self.state.queries.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.queries.lock().len()
    }
}

async fn serve_news(
    State(state): State<Arc<StubState>>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.queries.lock().push(query);

    let reply = state
        .reply
        .lock()
        .clone()
        .unwrap_or_else(|| StubReply::json(success_payload(0)));

    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
}

/// A successful envelope with `count` numbered articles
pub fn success_payload(count: usize) -> Value {
    let results: Vec<Value> = (0..count).map(article_json).collect();
    json!({
        "status": "success",
        "totalResults": count,
        "results": results,
    })
}

pub fn article_json(index: usize) -> Value {
    json!({
        "title": format!("Headline {}", index),
        "description": format!("Description {}", index),
        "link": format!("https://news.example.com/articles/{}", index),
        "pubDate": format!("2024-06-01 12:{:02}:00", index % 60),
        "image_url": format!("https://img.example.com/{}.jpg", index),
        "country": ["united states of america"],
        "category": ["top", "politics"],
        "source_id": "example_wire",
    })
}
