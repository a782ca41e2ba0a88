use crate::api::extractors::QueryParams;
use crate::error::{AppError, Result};
use crate::models::{MoodListResponse, RecommendationResponse};
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;
use std::num::IntErrorKind;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub mood: Option<String>,
    /// Kept as text so that `limit=` and out-of-range values get our own handling
    pub limit: Option<String>,
}

pub fn recommendation_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/recommendation", get(get_recommendations))
        .route("/recommendation/moods", get(list_moods))
}

/// GET /api/recommendation?mood={mood}&limit={limit}
async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    QueryParams(query): QueryParams<RecommendationQuery>,
) -> Result<Json<RecommendationResponse>> {
    let mood = query
        .mood
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::MoodRequired {
            valid_moods: state.catalog.available_moods(),
        })?;

    let limit = parse_limit(query.limit.as_deref())?;

    let response = state.catalog.recommend(mood, limit)?;
    tracing::debug!(
        "Recommending {} songs for mood '{}'",
        response.count,
        response.mood
    );

    Ok(Json(response))
}

/// GET /api/recommendation/moods
async fn list_moods(State(state): State<Arc<AppState>>) -> Json<MoodListResponse> {
    Json(MoodListResponse {
        success: true,
        moods: state.catalog.available_moods(),
    })
}

/// Empty means "not given"; integers too large for `i64` saturate since they are
/// clamped afterwards anyway.
fn parse_limit(raw: Option<&str>) -> Result<Option<i64>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    match raw.parse::<i64>() {
        Ok(limit) => Ok(Some(limit)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(Some(i64::MAX)),
            IntErrorKind::NegOverflow => Ok(Some(i64::MIN)),
            _ => Err(AppError::Validation(format!(
                "limit must be an integer, got '{}'",
                raw
            ))),
        },
    }
}
