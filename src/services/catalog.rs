use crate::error::{AppError, Result};
use crate::models::{Mood, RecommendationResponse, SongRecord};
use anyhow::Context;
use std::collections::{BTreeMap, HashSet};

pub const DEFAULT_LIMIT: usize = 5;
pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 20;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Static, read-only mapping from mood to songs in authored order.
#[derive(Debug, Clone)]
pub struct MoodCatalog {
    entries: BTreeMap<Mood, Vec<SongRecord>>,
}

impl MoodCatalog {
    /// Loads the catalog from `path`, or the built-in sample catalog when unset.
    pub async fn load(path: Option<&str>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let raw = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read catalog file {}", path))?;
                let catalog = Self::from_json(&raw)
                    .with_context(|| format!("Failed to load catalog file {}", path))?;
                tracing::info!("Loaded catalog from {}", path);
                Ok(catalog)
            }
            None => Self::builtin(),
        }
    }

    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_json(BUILTIN_CATALOG).context("Built-in catalog is invalid")
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let entries: BTreeMap<Mood, Vec<SongRecord>> =
            serde_json::from_str(raw).context("Catalog is not valid JSON for the known moods")?;
        Self::from_entries(entries)
    }

    pub fn from_entries(entries: BTreeMap<Mood, Vec<SongRecord>>) -> anyhow::Result<Self> {
        let mut seen_ids = HashSet::new();

        for (mood, songs) in &entries {
            for song in songs {
                if !seen_ids.insert(song.id) {
                    anyhow::bail!("Duplicate song id {} in catalog (mood '{}')", song.id, mood);
                }
                if !song.has_valid_duration() {
                    anyhow::bail!(
                        "Song {} has duration '{}', expected M:SS",
                        song.id,
                        song.duration
                    );
                }
            }
        }

        for mood in Mood::ALL {
            if entries.get(&mood).map_or(true, Vec::is_empty) {
                tracing::error!(
                    "Catalog integrity error: mood '{}' has no songs, recommendations will be empty",
                    mood
                );
            }
        }

        tracing::debug!(
            "Catalog ready with {} songs across {} moods",
            seen_ids.len(),
            entries.len()
        );

        Ok(Self { entries })
    }

    pub fn available_moods(&self) -> Vec<String> {
        Mood::valid_moods()
    }

    /// Resolves `mood` (case-insensitive, trimmed) to at most `limit` songs.
    ///
    /// The mood is validated before the catalog is consulted. `limit` defaults
    /// to [`DEFAULT_LIMIT`] and is clamped to `[MIN_LIMIT, MAX_LIMIT]`.
    pub fn recommend(&self, mood: &str, limit: Option<i64>) -> Result<RecommendationResponse> {
        let parsed = Mood::parse(mood).ok_or_else(|| AppError::InvalidMood {
            mood: mood.to_string(),
            valid_moods: self.available_moods(),
        })?;

        let limit = clamp_limit(limit);

        let songs = match self.entries.get(&parsed) {
            Some(songs) => songs,
            None => {
                tracing::error!(
                    "Catalog integrity error: no songs authored for mood '{}'",
                    parsed
                );
                return Ok(RecommendationResponse {
                    success: true,
                    mood: parsed.to_string(),
                    count: 0,
                    recommendations: Vec::new(),
                });
            }
        };

        let recommendations: Vec<SongRecord> = songs.iter().take(limit).cloned().collect();

        Ok(RecommendationResponse {
            success: true,
            mood: parsed.to_string(),
            count: recommendations.len(),
            recommendations,
        })
    }
}

pub fn clamp_limit(limit: Option<i64>) -> usize {
    match limit {
        None => DEFAULT_LIMIT,
        Some(requested) => requested.clamp(MIN_LIMIT, MAX_LIMIT) as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MoodCatalog {
        MoodCatalog::builtin().unwrap()
    }

    fn numbered_songs(count: u32) -> Vec<SongRecord> {
        (1..=count)
            .map(|id| SongRecord {
                id,
                title: format!("Song {}", id),
                artist: "Artist".to_string(),
                duration: "3:00".to_string(),
                genre: None,
            })
            .collect()
    }

    #[test]
    fn test_builtin_catalog_covers_every_mood() {
        let catalog = catalog();
        for mood in Mood::ALL {
            let songs = catalog.recommend(mood.as_str(), Some(MAX_LIMIT)).unwrap();
            assert_eq!(songs.count, 5, "mood {}", mood);
        }
    }

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(None), 5);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(-7)), 1);
        assert_eq!(clamp_limit(Some(3)), 3);
        assert_eq!(clamp_limit(Some(21)), 20);
        assert_eq!(clamp_limit(Some(i64::MAX)), 20);
    }

    #[test]
    fn test_recommend_preserves_authored_order() {
        let response = catalog().recommend("happy", Some(3)).unwrap();

        assert_eq!(response.mood, "happy");
        assert_eq!(response.count, 3);
        let ids: Vec<u32> = response.recommendations.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(response.recommendations[0].title, "Happy");
        assert_eq!(response.recommendations[0].artist, "Pharrell Williams");
    }

    #[test]
    fn test_recommend_normalizes_mood() {
        let catalog = catalog();
        let upper = catalog.recommend("HAPPY ", Some(4)).unwrap();
        let lower = catalog.recommend("happy", Some(4)).unwrap();

        assert_eq!(upper.mood, "happy");
        assert_eq!(upper.recommendations, lower.recommendations);
    }

    #[test]
    fn test_recommend_limit_bounds() {
        let mut entries = BTreeMap::new();
        entries.insert(Mood::Happy, numbered_songs(30));
        let catalog = MoodCatalog::from_entries(entries).unwrap();

        assert_eq!(catalog.recommend("happy", Some(0)).unwrap().count, 1);
        assert_eq!(catalog.recommend("happy", Some(-5)).unwrap().count, 1);
        assert_eq!(catalog.recommend("happy", None).unwrap().count, 5);
        assert_eq!(catalog.recommend("happy", Some(21)).unwrap().count, 20);
        assert_eq!(catalog.recommend("happy", Some(999)).unwrap().count, 20);
    }

    #[test]
    fn test_invalid_mood_is_rejected_before_lookup() {
        let empty = MoodCatalog::from_entries(BTreeMap::new()).unwrap();

        match empty.recommend("nonexistent-mood", Some(3)) {
            Err(AppError::InvalidMood { mood, valid_moods }) => {
                assert_eq!(mood, "nonexistent-mood");
                assert_eq!(valid_moods, Mood::valid_moods());
            }
            other => panic!("expected InvalidMood, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_mood_entries_degrade_to_empty() {
        let empty = MoodCatalog::from_entries(BTreeMap::new()).unwrap();
        let response = empty.recommend("sad", None).unwrap();

        assert!(response.success);
        assert_eq!(response.count, 0);
        assert!(response.recommendations.is_empty());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut entries = BTreeMap::new();
        entries.insert(Mood::Happy, numbered_songs(2));
        entries.insert(Mood::Sad, numbered_songs(1));

        assert!(MoodCatalog::from_entries(entries).is_err());
    }

    #[test]
    fn test_unknown_mood_key_is_rejected() {
        let raw = r#"{ "calm": [ { "id": 1, "title": "T", "artist": "A", "duration": "1:00" } ] }"#;
        assert!(MoodCatalog::from_json(raw).is_err());
    }

    #[test]
    fn test_bad_duration_is_rejected() {
        let raw = r#"{ "happy": [ { "id": 1, "title": "T", "artist": "A", "duration": "100" } ] }"#;
        assert!(MoodCatalog::from_json(raw).is_err());
    }

    #[test]
    fn test_recommend_is_idempotent() {
        let catalog = catalog();
        let first = serde_json::to_string(&catalog.recommend("relaxed", Some(2)).unwrap()).unwrap();
        let second = serde_json::to_string(&catalog.recommend("relaxed", Some(2)).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
