#![allow(dead_code)]

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use tokio::sync::broadcast;
use tower::ServiceExt;

use kanban_board::api::{create_router, AppState};
use kanban_board::config::Config;

pub const BOUNDARY: &str = "kanban-test-boundary";

pub fn test_config() -> Config {
    Config {
        port: 3000,
        frontend_dir: "./no-frontend".to_string(),
        cors_origin: "http://localhost:5173".to_string(),
        ..Config::default()
    }
}

pub fn setup_app_with_config(config: Config) -> (Router, broadcast::Receiver<String>) {
    let (sse_tx, rx) = broadcast::channel(100);
    let layout = config.column_layout().expect("test layout should be valid");
    let state = AppState::new(&layout, sse_tx);
    (create_router(state, &config), rx)
}

pub fn setup_app() -> Router {
    setup_app_with_config(test_config()).0
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_str = String::from_utf8(body.to_vec()).unwrap();

    (status, headers, body_str)
}

pub async fn make_request(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, String) {
    let mut request = Request::builder().uri(uri).method(method);

    if body.is_some() {
        request = request.header("content-type", "application/json");
    }

    let request = request
        .body(Body::from(body.unwrap_or_default()))
        .unwrap();

    let (status, _, body) = send(app, request).await;
    (status, body)
}

pub async fn upload_board(app: Router, contents: &str) -> (StatusCode, String) {
    upload_bytes(app, contents.as_bytes()).await
}

pub async fn upload_bytes(app: Router, contents: &[u8]) -> (StatusCode, String) {
    let mut body = format!(
        "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"board.json\"\r\n\
         Content-Type: application/json\r\n\r\n",
        BOUNDARY
    )
    .into_bytes();
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    let request = Request::builder()
        .uri("/api/board/import")
        .method("POST")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap();

    let (status, _, body) = send(app, request).await;
    (status, body)
}

pub async fn get_board(app: Router) -> serde_json::Value {
    let (status, body) = make_request(app, "GET", "/api/board", None).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_str(&body).unwrap()
}

pub async fn create_task(app: Router, title: &str, description: &str) -> serde_json::Value {
    let body = serde_json::json!({ "title": title, "description": description }).to_string();
    let (status, body) = make_request(app, "POST", "/api/tasks", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_str(&body).unwrap()
}

/// Tasks of `column_id` in the board document, in order.
pub fn column_tasks<'a>(
    board: &'a serde_json::Value,
    column_id: &str,
) -> &'a Vec<serde_json::Value> {
    board["columns"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"] == column_id)
        .and_then(|c| c["tasks"].as_array())
        .unwrap()
}
