use axum::{
    extract::OriginalUri,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};

const SERVICE_NAME: &str = "MoodTunes API";

/// GET /
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "MoodTunes API Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "recommendations": "/api/recommendation?mood={mood}&limit={limit}",
            "availableMoods": "/api/recommendation/moods",
            "moodDetection": "POST /api/mood",
            "auth": "/api/auth/{register,login,me,logout}",
            "playlists": "/api/playlists",
            "profile": "/api/profile",
        }
    }))
}

/// GET /health and GET /api/health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "service": SERVICE_NAME,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Fallback for unknown paths under `/api`. Echoes the request target,
/// query string included.
pub async fn api_not_found(OriginalUri(uri): OriginalUri) -> Response {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "API endpoint not found",
            "path": path,
        })),
    )
        .into_response()
}

/// Fallback for every other unknown path.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found" })),
    )
        .into_response()
}
