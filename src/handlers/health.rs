use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

// GET /
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Choose Marketers Backend Running" }))
}

// GET /api/hello
pub async fn hello() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Hello from the backend API!" }))
}

// GET /test
#[derive(Serialize)]
pub struct TestResponse {
    backend: String,
    database: String,
    database_url: String,
    database_name: String,
    connection_status: String,
    collections: Vec<String>,
}

/// Database diagnostics. Always answers 200; anything that goes wrong is
/// reported inside the `database` field instead of failing the request.
pub async fn test_database(State(state): State<Arc<AppState>>) -> Json<TestResponse> {
    let mut database = "⚠️  Available but not initialized".to_string();
    let mut connection_status = "Not Connected";
    let mut collections = Vec::new();

    if let Some(store) = state.store.as_deref() {
        connection_status = "Connected";
        match store.collection_names() {
            Ok(names) => {
                collections = names.into_iter().take(10).collect();
                database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                database = format!("⚠️  Connected but Error: {}", clip(&format!("{e:#}"), 50));
            }
        }
    }

    Json(TestResponse {
        backend: "✅ Running".to_string(),
        database,
        database_url: set_marker(state.config.database_url.is_some()),
        database_name: set_marker(state.config.database_name.is_some()),
        connection_status: connection_status.to_string(),
        collections,
    })
}

fn set_marker(set: bool) -> String {
    if set {
        "✅ Set".to_string()
    } else {
        "❌ Not Set".to_string()
    }
}

fn clip(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}
