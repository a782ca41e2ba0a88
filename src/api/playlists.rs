use crate::api::extractors::JsonBody;
use crate::api::middleware::RequireAuth;
use crate::error::{AppError, Result};
use crate::models::{
    CreatePlaylistRequest, PlaylistListResponse, PlaylistResponse, UpdatePlaylistRequest,
};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub fn playlist_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/playlists", get(list_playlists).post(create_playlist))
        .route(
            "/playlists/:id",
            get(get_playlist).put(update_playlist).delete(delete_playlist),
        )
}

async fn list_playlists(
    State(state): State<Arc<AppState>>,
    RequireAuth(claims): RequireAuth,
) -> Json<PlaylistListResponse> {
    let playlists = state.playlists.list(claims.sub).await;
    Json(PlaylistListResponse { playlists })
}

async fn create_playlist(
    State(state): State<Arc<AppState>>,
    RequireAuth(claims): RequireAuth,
    JsonBody(req): JsonBody<CreatePlaylistRequest>,
) -> Result<(StatusCode, Json<PlaylistResponse>)> {
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let playlist = state.playlists.create(claims.sub, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(PlaylistResponse {
            message: Some("Playlist created successfully".to_string()),
            playlist,
        }),
    ))
}

async fn get_playlist(
    State(state): State<Arc<AppState>>,
    RequireAuth(claims): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<PlaylistResponse>> {
    let playlist = state.playlists.get(claims.sub, parse_id(&id)?).await?;

    Ok(Json(PlaylistResponse {
        message: None,
        playlist,
    }))
}

async fn update_playlist(
    State(state): State<Arc<AppState>>,
    RequireAuth(claims): RequireAuth,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdatePlaylistRequest>,
) -> Result<Json<PlaylistResponse>> {
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let playlist = state
        .playlists
        .update(claims.sub, parse_id(&id)?, req)
        .await?;

    Ok(Json(PlaylistResponse {
        message: Some("Playlist updated successfully".to_string()),
        playlist,
    }))
}

async fn delete_playlist(
    State(state): State<Arc<AppState>>,
    RequireAuth(claims): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    state.playlists.delete(claims.sub, parse_id(&id)?).await?;

    Ok(Json(json!({ "message": "Playlist deleted successfully" })))
}

// A malformed id can never name an existing playlist.
fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("Playlist not found".to_string()))
}
