use crate::error::{AppError, Result};
use crate::models::{CreatePlaylistRequest, Playlist, UpdatePlaylistRequest};
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

pub const MAX_NAME_CHARS: usize = 255;

/// Per-user playlists kept in memory for the lifetime of the server.
#[derive(Debug, Default)]
pub struct PlaylistStore {
    playlists: RwLock<HashMap<Uuid, Vec<Playlist>>>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self, user_id: Uuid) -> Vec<Playlist> {
        self.playlists
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn get(&self, user_id: Uuid, playlist_id: Uuid) -> Result<Playlist> {
        self.playlists
            .read()
            .await
            .get(&user_id)
            .and_then(|list| list.iter().find(|p| p.id == playlist_id))
            .cloned()
            .ok_or_else(playlist_not_found)
    }

    pub async fn create(&self, user_id: Uuid, req: CreatePlaylistRequest) -> Result<Playlist> {
        let now = Utc::now();
        let playlist = Playlist {
            id: Uuid::new_v4(),
            name: clean_name(&req.name)?,
            description: req.description.map(|d| d.trim().to_string()).unwrap_or_default(),
            tracks: req.tracks.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        self.playlists
            .write()
            .await
            .entry(user_id)
            .or_default()
            .push(playlist.clone());

        tracing::debug!("User {} created playlist {}", user_id, playlist.id);
        Ok(playlist)
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        playlist_id: Uuid,
        req: UpdatePlaylistRequest,
    ) -> Result<Playlist> {
        let name = req.name.as_deref().map(clean_name).transpose()?;

        let mut playlists = self.playlists.write().await;
        let playlist = playlists
            .get_mut(&user_id)
            .and_then(|list| list.iter_mut().find(|p| p.id == playlist_id))
            .ok_or_else(playlist_not_found)?;

        if let Some(name) = name {
            playlist.name = name;
        }
        if let Some(description) = req.description {
            playlist.description = description.trim().to_string();
        }
        if let Some(tracks) = req.tracks {
            playlist.tracks = tracks;
        }
        playlist.updated_at = Utc::now();

        Ok(playlist.clone())
    }

    pub async fn delete(&self, user_id: Uuid, playlist_id: Uuid) -> Result<()> {
        let mut playlists = self.playlists.write().await;
        let list = playlists.get_mut(&user_id).ok_or_else(playlist_not_found)?;
        let index = list
            .iter()
            .position(|p| p.id == playlist_id)
            .ok_or_else(playlist_not_found)?;

        list.remove(index);
        Ok(())
    }
}

/// Trims `name` and checks that 1..=`MAX_NAME_CHARS` characters remain.
pub fn clean_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation(
            "Playlist name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(AppError::Validation(format!(
            "Playlist name must be at most {} characters",
            MAX_NAME_CHARS
        )));
    }
    Ok(name.to_string())
}

fn playlist_not_found() -> AppError {
    AppError::NotFound("Playlist not found".to_string())
}
