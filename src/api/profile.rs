use crate::api::extractors::{JsonBody, QueryParams};
use crate::api::middleware::RequireAuth;
use crate::error::{AppError, Result};
use crate::models::{
    AddMoodRequest, AddPlaylistHistoryRequest, FavoritesResponse, HistoryClearedResponse,
    HistoryEntryResponse, HistoryQuery, HistoryResponse, MoodHistoryEntry, PlaylistHistoryEntry,
    ProfileResponse, UpdateFavoritesRequest,
};
use crate::services::profile_store::history_limit;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;
use validator::Validate;

pub fn profile_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_profile))
        .route("/favorites", put(update_favorites))
        .route(
            "/mood-history",
            get(mood_history).post(add_mood).delete(clear_mood_history),
        )
        .route(
            "/playlist-history",
            get(playlist_history)
                .post(add_playlist)
                .delete(clear_playlist_history),
        )
}

async fn get_profile(
    State(state): State<Arc<AppState>>,
    RequireAuth(claims): RequireAuth,
) -> Result<Json<ProfileResponse>> {
    let user = state.auth_service.get_user_by_id(claims.sub).await?;
    let profile = state.profiles.get(claims.sub).await;

    Ok(Json(ProfileResponse {
        user: user.into(),
        profile,
    }))
}

async fn update_favorites(
    State(state): State<Arc<AppState>>,
    RequireAuth(claims): RequireAuth,
    JsonBody(req): JsonBody<UpdateFavoritesRequest>,
) -> Result<Json<FavoritesResponse>> {
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let profile = state.profiles.update_favorites(claims.sub, req).await?;

    Ok(Json(FavoritesResponse {
        message: "Favorites updated successfully".to_string(),
        profile,
    }))
}

/// GET /api/profile/mood-history?limit={limit}
async fn mood_history(
    State(state): State<Arc<AppState>>,
    RequireAuth(claims): RequireAuth,
    QueryParams(query): QueryParams<HistoryQuery>,
) -> Json<HistoryResponse<MoodHistoryEntry>> {
    let limit = history_limit(query.limit.as_deref());
    let history = state.profiles.mood_history(claims.sub, limit).await;
    Json(HistoryResponse { history })
}

async fn add_mood(
    State(state): State<Arc<AppState>>,
    RequireAuth(claims): RequireAuth,
    JsonBody(req): JsonBody<AddMoodRequest>,
) -> Result<(StatusCode, Json<HistoryEntryResponse<MoodHistoryEntry>>)> {
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let entry = state.profiles.add_mood(claims.sub, &req.mood).await?;

    Ok((
        StatusCode::CREATED,
        Json(HistoryEntryResponse {
            message: "Mood added to history".to_string(),
            entry,
        }),
    ))
}

async fn clear_mood_history(
    State(state): State<Arc<AppState>>,
    RequireAuth(claims): RequireAuth,
) -> Json<HistoryClearedResponse> {
    let deleted_count = state.profiles.clear_mood_history(claims.sub).await;
    Json(HistoryClearedResponse {
        message: "Mood history cleared successfully".to_string(),
        deleted_count,
    })
}

/// GET /api/profile/playlist-history?limit={limit}
async fn playlist_history(
    State(state): State<Arc<AppState>>,
    RequireAuth(claims): RequireAuth,
    QueryParams(query): QueryParams<HistoryQuery>,
) -> Json<HistoryResponse<PlaylistHistoryEntry>> {
    let limit = history_limit(query.limit.as_deref());
    let history = state.profiles.playlist_history(claims.sub, limit).await;
    Json(HistoryResponse { history })
}

async fn add_playlist(
    State(state): State<Arc<AppState>>,
    RequireAuth(claims): RequireAuth,
    JsonBody(req): JsonBody<AddPlaylistHistoryRequest>,
) -> Result<(StatusCode, Json<HistoryEntryResponse<PlaylistHistoryEntry>>)> {
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let entry = state.profiles.add_playlist(claims.sub, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(HistoryEntryResponse {
            message: "Playlist added to history".to_string(),
            entry,
        }),
    ))
}

async fn clear_playlist_history(
    State(state): State<Arc<AppState>>,
    RequireAuth(claims): RequireAuth,
) -> Json<HistoryClearedResponse> {
    let deleted_count = state.profiles.clear_playlist_history(claims.sub).await;
    Json(HistoryClearedResponse {
        message: "Playlist history cleared successfully".to_string(),
        deleted_count,
    })
}
