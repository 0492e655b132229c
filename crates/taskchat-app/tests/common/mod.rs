use axum::{http::StatusCode, routing::post, Json, Router};
use std::net::SocketAddr;
use std::time::Duration;

use taskchat_types::{QueryResponse, UserQuery};

/// Stand-in for the chat endpoint with one route per behaviour
pub fn mock_endpoint() -> Router {
    Router::new()
        .route(
            "/user_query",
            post(|Json(query): Json<UserQuery>| async move {
                Json(QueryResponse {
                    response: format!("echo: {}", query.message),
                })
            }),
        )
        .route(
            "/missing_field",
            post(|| async { Json(serde_json::json!({ "answer": "hi" })) }),
        )
        .route(
            "/server_error",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route(
            "/slow",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(QueryResponse {
                    response: "late".to_string(),
                })
            }),
        )
}

/// Serve the mock endpoint on an ephemeral port
pub async fn spawn_mock_endpoint() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, mock_endpoint()).await.unwrap();
    });
    addr
}

/// An address nothing listens on
pub async fn closed_port() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
