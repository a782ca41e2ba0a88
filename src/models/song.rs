use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecord {
    pub id: u32,
    pub title: String,
    pub artist: String,
    /// Formatted as "M:SS"
    pub duration: String,
    #[serde(default)]
    pub genre: Option<String>,
}

impl SongRecord {
    /// Whether `duration` has the "M:SS" shape with seconds below 60.
    pub fn has_valid_duration(&self) -> bool {
        let Some((minutes, seconds)) = self.duration.split_once(':') else {
            return false;
        };

        let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());

        digits(minutes)
            && seconds.len() == 2
            && digits(seconds)
            && seconds.parse::<u32>().map(|s| s < 60).unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub success: bool,
    pub mood: String,
    pub count: usize,
    pub recommendations: Vec<SongRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoodListResponse {
    pub success: bool,
    pub moods: Vec<String>,
}
