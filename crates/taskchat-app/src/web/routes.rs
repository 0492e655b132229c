use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;

const INDEX_TEMPLATE: &str = include_str!("../../web/index.html");

/// Application state shared across routes
#[derive(Clone)]
pub struct AppState {
    /// Chat page with the endpoint baked in
    pub index_html: Arc<String>,
}

impl AppState {
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Self {
        Self {
            index_html: Arc::new(render_index(endpoint, timeout)),
        }
    }
}

/// Create router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
}

/// Fill the page template with the endpoint the frontend should post to
pub fn render_index(endpoint: &str, timeout: Option<Duration>) -> String {
    let timeout_ms = timeout
        .map(|t| t.as_millis().to_string())
        .unwrap_or_default();

    INDEX_TEMPLATE
        .replace("{{ENDPOINT}}", &escape_attribute(endpoint))
        .replace("{{TIMEOUT_MS}}", &timeout_ms)
}

/// GET / - Serve the chat page
async fn serve_index(State(state): State<AppState>) -> Html<String> {
    Html(state.index_html.as_ref().clone())
}

/// GET /health - Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Error handling
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

fn escape_attribute(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
