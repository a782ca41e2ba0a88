use crate::error::{AppError, Result};
use crate::models::{
    AddPlaylistHistoryRequest, Mood, MoodHistoryEntry, PlaylistHistoryEntry, Profile,
    UpdateFavoritesRequest,
};
use crate::services::playlist_store::clean_name;
use chrono::Utc;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

pub const DEFAULT_HISTORY_LIMIT: usize = 50;
/// Oldest entries are dropped once a user's history reaches this size.
pub const MAX_HISTORY_ENTRIES: usize = 500;

#[derive(Debug, Default)]
struct UserProfile {
    profile: Profile,
    // Newest first
    moods: VecDeque<MoodHistoryEntry>,
    playlists: VecDeque<PlaylistHistoryEntry>,
}

/// Favorites and listening history per user, kept in memory. A profile is
/// created the first time a user touches it.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: RwLock<HashMap<Uuid, UserProfile>>,
    next_entry_id: AtomicU64,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, user_id: Uuid) -> Profile {
        self.profiles
            .write()
            .await
            .entry(user_id)
            .or_default()
            .profile
            .clone()
    }

    pub async fn update_favorites(
        &self,
        user_id: Uuid,
        req: UpdateFavoritesRequest,
    ) -> Result<Profile> {
        let moods = req.favorite_moods.as_deref().map(parse_moods).transpose()?;
        let playlists = req.favorite_playlists.map(clean_playlist_names);

        let mut profiles = self.profiles.write().await;
        let profile = &mut profiles.entry(user_id).or_default().profile;

        if let Some(moods) = moods {
            profile.favorite_moods = moods;
        }
        if let Some(playlists) = playlists {
            profile.favorite_playlists = playlists;
        }
        profile.updated_at = Utc::now();

        Ok(profile.clone())
    }

    pub async fn mood_history(&self, user_id: Uuid, limit: usize) -> Vec<MoodHistoryEntry> {
        self.profiles
            .read()
            .await
            .get(&user_id)
            .map(|p| p.moods.iter().take(limit).cloned().collect())
            .unwrap_or_default()
    }

    pub async fn add_mood(&self, user_id: Uuid, mood: &str) -> Result<MoodHistoryEntry> {
        let mood = parse_mood(mood)?;
        let entry = MoodHistoryEntry {
            id: self.next_id(),
            mood,
            created_at: Utc::now(),
        };

        let mut profiles = self.profiles.write().await;
        push_capped(
            &mut profiles.entry(user_id).or_default().moods,
            entry.clone(),
        );

        tracing::debug!("User {} logged mood {}", user_id, mood);
        Ok(entry)
    }

    pub async fn clear_mood_history(&self, user_id: Uuid) -> usize {
        let mut profiles = self.profiles.write().await;
        profiles
            .get_mut(&user_id)
            .map(|p| p.moods.drain(..).count())
            .unwrap_or(0)
    }

    pub async fn playlist_history(&self, user_id: Uuid, limit: usize) -> Vec<PlaylistHistoryEntry> {
        self.profiles
            .read()
            .await
            .get(&user_id)
            .map(|p| p.playlists.iter().take(limit).cloned().collect())
            .unwrap_or_default()
    }

    pub async fn add_playlist(
        &self,
        user_id: Uuid,
        req: AddPlaylistHistoryRequest,
    ) -> Result<PlaylistHistoryEntry> {
        let entry = PlaylistHistoryEntry {
            id: self.next_id(),
            playlist_name: clean_name(&req.playlist_name)?,
            playlist_data: req.playlist_data,
            created_at: Utc::now(),
        };

        let mut profiles = self.profiles.write().await;
        push_capped(
            &mut profiles.entry(user_id).or_default().playlists,
            entry.clone(),
        );

        Ok(entry)
    }

    pub async fn clear_playlist_history(&self, user_id: Uuid) -> usize {
        let mut profiles = self.profiles.write().await;
        profiles
            .get_mut(&user_id)
            .map(|p| p.playlists.drain(..).count())
            .unwrap_or(0)
    }

    fn next_id(&self) -> u64 {
        self.next_entry_id.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Parses the `limit` query parameter. Missing, malformed and non-positive
/// values fall back to [`DEFAULT_HISTORY_LIMIT`].
pub fn history_limit(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
}

fn push_capped<T>(history: &mut VecDeque<T>, entry: T) {
    history.push_front(entry);
    history.truncate(MAX_HISTORY_ENTRIES);
}

fn parse_mood(raw: &str) -> Result<Mood> {
    Mood::parse(raw).ok_or_else(|| AppError::InvalidMood {
        mood: raw.trim().to_string(),
        valid_moods: Mood::valid_moods(),
    })
}

/// Parses every mood, dropping repeats but keeping the client's order.
fn parse_moods(raw: &[String]) -> Result<Vec<Mood>> {
    let mut moods = Vec::with_capacity(raw.len());
    for m in raw {
        let mood = parse_mood(m)?;
        if !moods.contains(&mood) {
            moods.push(mood);
        }
    }
    Ok(moods)
}

fn clean_playlist_names(raw: Vec<String>) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(raw.len());
    for name in raw {
        let name = name.trim();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}
