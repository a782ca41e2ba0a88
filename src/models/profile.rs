use crate::models::{Mood, UserInfo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub favorite_moods: Vec<Mood>,
    pub favorite_playlists: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new() -> Self {
        let now = Utc::now();
        Profile {
            favorite_moods: Vec::new(),
            favorite_playlists: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MoodHistoryEntry {
    pub id: u64,
    pub mood: Mood,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaylistHistoryEntry {
    pub id: u64,
    pub playlist_name: String,
    /// Stored as sent by the client
    pub playlist_data: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

/// Fields left out of the body keep their current value.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateFavoritesRequest {
    #[validate(length(max = 5, message = "At most 5 favorite moods can be set"))]
    pub favorite_moods: Option<Vec<String>>,
    #[validate(length(max = 100, message = "At most 100 favorite playlists can be set"))]
    pub favorite_playlists: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddMoodRequest {
    #[validate(length(min = 1, message = "Mood is required"))]
    pub mood: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddPlaylistHistoryRequest {
    #[validate(length(min = 1, message = "Playlist name is required"))]
    pub playlist_name: String,
    pub playlist_data: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserInfo,
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub message: String,
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse<T> {
    pub history: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct HistoryEntryResponse<T> {
    pub message: String,
    pub entry: T,
}

#[derive(Debug, Serialize)]
pub struct HistoryClearedResponse {
    pub message: String,
    pub deleted_count: usize,
}
