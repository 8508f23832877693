//! End-to-end tests of the HTTP surface with every upstream mocked.

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

use smartship::db::LocalRepository;
use smartship::error::{ServiceError, ServiceResult};
use smartship::http::{create_router, AppState};
use smartship::models::{FeatureVector, ModelVerdict};
use smartship::services::{GenerativeClient, NewsUpstream, PredictionClient};

// =============================================================================
// Mock upstreams
// =============================================================================

struct MockNews {
    calls: AtomicUsize,
    result: ServiceResult<Value>,
}

#[async_trait]
impl NewsUpstream for MockNews {
    async fn search(&self, _api_key: &str) -> ServiceResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

struct MockModel {
    calls: AtomicUsize,
    fail: bool,
}

#[async_trait]
impl PredictionClient for MockModel {
    async fn predict(&self, _features: &FeatureVector) -> ServiceResult<ModelVerdict> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ServiceError::ServiceUnavailable(
                "Server error. Please try again later.".to_string(),
            ));
        }
        Ok(ModelVerdict {
            prediction: "Delayed".to_string(),
            probability: 0.82,
            suggestion: "Book early".to_string(),
            note: None,
        })
    }
}

struct MockGenerative {
    calls: AtomicUsize,
    reply: String,
}

#[async_trait]
impl GenerativeClient for MockGenerative {
    async fn generate(&self, _prompt: &str) -> ServiceResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}

struct Harness {
    news: Arc<MockNews>,
    model: Arc<MockModel>,
    ai: Arc<MockGenerative>,
    router: Router,
}

struct Setup {
    news_key: Option<&'static str>,
    news_result: ServiceResult<Value>,
    model_fails: bool,
    ai_reply: &'static str,
}

impl Default for Setup {
    fn default() -> Self {
        Self {
            news_key: Some("test-key"),
            news_result: Ok(json!({"totalArticles": 1, "articles": [{"title": "Canal reopens"}]})),
            model_fails: false,
            ai_reply: "```json\n{\"queryType\":\"single_port\",\"name\":\"Port of Rotterdam\"}\n```",
        }
    }
}

fn harness(setup: Setup) -> Harness {
    let news = Arc::new(MockNews {
        calls: AtomicUsize::new(0),
        result: setup.news_result,
    });
    let model = Arc::new(MockModel {
        calls: AtomicUsize::new(0),
        fail: setup.model_fails,
    });
    let ai = Arc::new(MockGenerative {
        calls: AtomicUsize::new(0),
        reply: setup.ai_reply.to_string(),
    });

    let state = AppState::new(
        news.clone(),
        setup.news_key.map(str::to_string),
        model.clone(),
        ai.clone(),
        Arc::new(LocalRepository::new()),
    );

    Harness {
        news,
        model,
        ai,
        router: create_router(state),
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn as_user(mut request: Request<Body>, uid: &str, name: Option<&str>) -> Request<Body> {
    let headers = request.headers_mut();
    headers.insert("x-user-id", uid.parse().unwrap());
    if let Some(name) = name {
        headers.insert("x-user-name", name.parse().unwrap());
    }
    request
}

// =============================================================================
// Service info
// =============================================================================

#[tokio::test]
async fn test_banner_and_health() {
    let h = harness(Setup::default());

    let (status, body) = send(&h.router, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["endpoints"].as_array().unwrap().contains(&json!("/api/news")));

    let (status, body) = send(&h.router, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "smartship-api");
    assert!(chrono::DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_unknown_route() {
    let h = harness(Setup::default());

    let (status, body) = send(&h.router, get("/api/nothing-here")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Route not found"}));

    let (status, _) = send(&h.router, post_json("/nowhere", json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// News
// =============================================================================

#[tokio::test]
async fn test_news_is_relayed_unchanged() {
    let h = harness(Setup::default());
    let (status, body) = send(&h.router, get("/api/news")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["articles"][0]["title"], "Canal reopens");
    assert_eq!(h.news.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_news_without_key_never_calls_upstream() {
    let h = harness(Setup {
        news_key: None,
        ..Setup::default()
    });
    let (status, body) = send(&h.router, get("/api/news")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "GNEWS_API_KEY not configured"}));
    assert_eq!(h.news.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_news_upstream_failure() {
    let h = harness(Setup {
        news_result: Err(ServiceError::upstream_status(
            403,
            "Request failed with status code 403",
        )),
        ..Setup::default()
    });
    let (status, body) = send(&h.router, get("/api/news")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "Failed to fetch news", "message": "Request failed with status code 403"})
    );
}

// =============================================================================
// Reference tables
// =============================================================================

#[tokio::test]
async fn test_port_table_in_encoding_order() {
    let h = harness(Setup::default());
    let (status, body) = send(&h.router, get("/api/ports")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], 1);
    let ports = body["ports"].as_array().unwrap();
    assert_eq!(ports.len(), 13);
    assert_eq!(ports[0]["code"], 0);
    assert_eq!(ports[0]["name"], "Shanghai");
    assert_eq!(ports[12]["code"], 12);
    assert_eq!(ports[12]["name"], "Sydney");
}

#[tokio::test]
async fn test_cargo_types() {
    let h = harness(Setup::default());
    let (status, body) = send(&h.router, get("/api/cargo-types")).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["cargoTypes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Electronics", "Machinery", "Standard", "Perishable", "Fragile"]);
}

// =============================================================================
// Prediction
// =============================================================================

#[tokio::test]
async fn test_predict_round_trip() {
    let h = harness(Setup::default());
    let request = post_json(
        "/api/predict",
        json!({
            "origin": "Shanghai",
            "destination": "Singapore",
            "cargo_type": "Machinery",
            "cargo_weight": 2500,
            "shipping_date": "2999-06-15"
        }),
    );
    let (status, body) = send(&h.router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction"], "Delayed");
    assert_eq!(body["origin"], "Shanghai");
    assert_eq!(body["distance"], 3805.4);
    assert_eq!(body["eta"], 2.9);
    assert_eq!(body["originCoords"], json!([31.2198, 121.4869]));
    assert_eq!(h.model.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_predict_rejects_before_calling_model() {
    let h = harness(Setup::default());

    let same_port = json!({
        "origin": "Busan", "destination": "Busan", "shipping_date": "2999-01-01"
    });
    let (status, body) = send(&h.router, post_json("/api/predict", same_port)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Origin and destination ports cannot be the same.");

    let past = json!({
        "origin": "Busan", "destination": "Rotterdam", "shipping_date": "2001-01-01"
    });
    let (status, _) = send(&h.router, post_json("/api/predict", past)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let malformed = json!({"origin": "Busan"});
    let (status, body) = send(&h.router, post_json("/api/predict", malformed)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    assert_eq!(h.model.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_predict_model_down() {
    let h = harness(Setup {
        model_fails: true,
        ..Setup::default()
    });
    let request = post_json(
        "/api/predict",
        json!({"origin": "Hamburg", "destination": "Santos", "shipping_date": "2999-03-01"}),
    );
    let (status, body) = send(&h.router, request).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Server error. Please try again later.");
}

// =============================================================================
// Port intelligence
// =============================================================================

#[tokio::test]
async fn test_port_intelligence_structured() {
    let h = harness(Setup::default());
    let (status, body) = send(
        &h.router,
        post_json("/api/port-intelligence", json!({"query": "Port of Rotterdam"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"queryType": "single_port", "name": "Port of Rotterdam"}));
}

#[tokio::test]
async fn test_port_intelligence_unclear_query() {
    let h = harness(Setup {
        ai_reply: r#"{"error": "Please specify your port query more clearly"}"#,
        ..Setup::default()
    });
    let (status, body) = send(
        &h.router,
        post_json("/api/port-intelligence", json!({"query": "hmm"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Please specify your port query more clearly");
}

#[tokio::test]
async fn test_port_intelligence_prose_degrades() {
    let h = harness(Setup {
        ai_reply: "Rotterdam is a large port.",
        ..Setup::default()
    });
    let (status, body) = send(
        &h.router,
        post_json("/api/port-intelligence", json!({"query": "Rotterdam"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["queryType"], "general_info");
    assert_eq!(body["parseFailed"], true);
}

#[tokio::test]
async fn test_port_intelligence_blank_query() {
    let h = harness(Setup::default());
    let (status, _) = send(
        &h.router,
        post_json("/api/port-intelligence", json!({"query": "  "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(h.ai.calls.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Reviews
// =============================================================================

#[tokio::test]
async fn test_review_lifecycle() {
    let h = harness(Setup::default());

    let (status, _) = send(
        &h.router,
        post_json("/api/reviews", json!({"text": "anonymous?"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let request = as_user(
        post_json("/api/reviews", json!({"text": "Accurate delay forecasts"})),
        "u1",
        Some("Ada"),
    );
    let (status, created) = send(&h.router, request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["username"], "Ada");
    assert_eq!(created["email"], "No email");
    assert!(created["createdAt"].is_string());
    let id = created["id"].as_str().unwrap().to_string();

    let (status, list) = send(&h.router, get("/api/reviews")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let delete = |uid: &str, id: &str| {
        as_user(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/reviews/{}", id))
                .body(Body::empty())
                .unwrap(),
            uid,
            None,
        )
    };

    let (status, _) = send(&h.router, delete("u2", &id)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&h.router, delete("u1", &id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&h.router, delete("u1", &id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&h.router, delete("u1", "not-a-uuid")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
