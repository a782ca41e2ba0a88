use crate::api::extractors::JsonBody;
use crate::error::Result;
use crate::models::{DetectMoodRequest, DetectMoodResponse};
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;

pub fn mood_routes() -> Router<Arc<AppState>> {
    Router::new().route("/mood", post(detect_mood))
}

/// POST /api/mood
///
/// Classifies free text into a mood. A missing `text` field is treated the same
/// as an empty one.
async fn detect_mood(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<DetectMoodRequest>,
) -> Result<Json<DetectMoodResponse>> {
    let text = req.text.unwrap_or_default();
    let result = state.classifier.classify(&text)?;

    tracing::debug!(
        "Detected mood '{}' (score {}, confidence {:.2})",
        result.mood,
        result.raw_score,
        result.confidence
    );

    Ok(Json(result.into()))
}
