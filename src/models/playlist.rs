use crate::models::SongRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize)]
pub struct Playlist {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub tracks: Vec<SongRecord>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlaylistRequest {
    /// Length is checked after trimming, see `PlaylistStore`
    pub name: String,
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,
    #[validate(length(max = 500, message = "A playlist holds at most 500 tracks"))]
    pub tracks: Option<Vec<SongRecord>>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdatePlaylistRequest {
    pub name: Option<String>,
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,
    #[validate(length(max = 500, message = "A playlist holds at most 500 tracks"))]
    pub tracks: Option<Vec<SongRecord>>,
}

#[derive(Debug, Serialize)]
pub struct PlaylistListResponse {
    pub playlists: Vec<Playlist>,
}

#[derive(Debug, Serialize)]
pub struct PlaylistResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub playlist: Playlist,
}
