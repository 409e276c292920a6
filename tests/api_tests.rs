use std::collections::HashSet;
use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use movie_recommender_api::{
    middleware::cors_layer, models::MovieRecord, routes::create_router, services::Dataset,
    state::AppState, Config,
};

const TITLES: [Option<&str>; 6] = [
    Some("Avatar"),
    Some("The Dark Knight"),
    Some("The Dark Knight Rises"),
    None,
    Some("Inception"),
    Some("Interstellar"),
];

fn fixture_dataset() -> Dataset {
    let records = TITLES
        .iter()
        .enumerate()
        .map(|(i, t)| MovieRecord::new(i, *t))
        .collect();

    let matrix = vec![
        vec![1.0, 0.2, 0.2, 0.9, 0.4, 0.6],
        vec![0.2, 1.0, 0.9, 0.0, 0.7, 0.5],
        vec![0.2, 0.9, 1.0, 0.0, 0.6, 0.5],
        vec![0.9, 0.0, 0.0, 1.0, 0.1, 0.1],
        vec![0.4, 0.7, 0.6, 0.1, 1.0, 0.8],
        vec![0.6, 0.5, 0.5, 0.1, 0.8, 1.0],
    ];

    Dataset::new(records, matrix).unwrap()
}

fn create_test_server() -> TestServer {
    let state = Arc::new(AppState::new(fixture_dataset(), &Config::default()));
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_root_message() {
    let server = create_test_server();
    let response = server.get("/").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Welcome to My Next Movie API");
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "healthy", "movies": 6 }));
}

#[tokio::test]
async fn test_recommend_known_title() {
    let server = create_test_server();
    let response = server.get("/recommend/the%20dark%20knight").await;
    response.assert_status_ok();
    response.assert_json(&json!({
        "your_movie": "The Dark Knight",
        "recommendations": ["The Dark Knight Rises", "Inception", "Interstellar", "Avatar", null]
    }));
}

#[tokio::test]
async fn test_recommend_with_k() {
    let server = create_test_server();
    let response = server
        .get("/recommend/Inception")
        .add_query_param("k", 2)
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["recommendations"], json!(["Interstellar", "The Dark Knight"]));
}

#[tokio::test]
async fn test_recommend_unknown_title() {
    let server = create_test_server();
    let response = server.get("/recommend/not-a-real-title-zzz").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["title"], "not-a-real-title-zzz");
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_search_empty_query_lists_catalog_order() {
    let server = create_test_server();
    let response = server.get("/movies/search").await;
    response.assert_status_ok();
    response.assert_json(&json!([
        "Avatar",
        "The Dark Knight",
        "The Dark Knight Rises",
        "Inception",
        "Interstellar"
    ]));
}

#[tokio::test]
async fn test_search_substring() {
    let server = create_test_server();
    let response = server
        .get("/movies/search")
        .add_query_param("q", "DARK")
        .await;
    response.assert_status_ok();
    response.assert_json(&json!(["The Dark Knight", "The Dark Knight Rises"]));

    let response = server
        .get("/movies/search")
        .add_query_param("q", "in")
        .add_query_param("limit", 1)
        .await;
    response.assert_json(&json!(["Inception"]));
}

#[tokio::test]
async fn test_browse_sample() {
    let server = create_test_server();
    let response = server
        .get("/movies/all")
        .add_query_param("limit", 3)
        .add_query_param("skip", 100)
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let data: Vec<String> = serde_json::from_value(body["data"].clone()).unwrap();
    let unique: HashSet<&String> = data.iter().collect();
    assert_eq!(data.len(), 3);
    assert_eq!(unique.len(), 3);
    assert_eq!(body["total"], 5);
    assert_eq!(body["has_more"], true);
}

#[tokio::test]
async fn test_browse_default_limit_returns_everything() {
    let server = create_test_server();
    let response = server.get("/movies/all").await;
    let body: Value = response.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["has_more"], false);
}

#[tokio::test]
async fn test_bad_query_param_rejected() {
    let server = create_test_server();
    let response = server
        .get("/movies/search")
        .add_query_param("limit", "many")
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_request_id_propagated() {
    let server = create_test_server();
    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("test-request-1"),
        )
        .await;
    assert_eq!(response.header("x-request-id"), "test-request-1");

    let response = server.get("/health").await;
    let generated = response.header("x-request-id");
    assert!(uuid::Uuid::parse_str(generated.to_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let config = Config::default();
    let state = Arc::new(AppState::new(fixture_dataset(), &config));
    let app = create_router(state).layer(cors_layer(&config.cors_origins));
    let server = TestServer::new(app).unwrap();

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://localhost:5173"),
        )
        .await;
    assert_eq!(
        response.header("access-control-allow-origin"),
        "http://localhost:5173"
    );
    assert_eq!(response.header("access-control-allow-credentials"), "true");

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://evil.example"),
        )
        .await;
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}
