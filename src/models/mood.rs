use serde::{Deserialize, Serialize};
use std::fmt;

/// Mood labels shared by the sentiment classifier and the song catalog.
///
/// Declaration order is the presentation order of `valid moods` lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Neutral,
    Angry,
    Relaxed,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Neutral,
        Mood::Angry,
        Mood::Relaxed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Neutral => "neutral",
            Mood::Angry => "angry",
            Mood::Relaxed => "relaxed",
        }
    }

    /// Case-insensitive lookup after trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Mood> {
        let normalized = raw.trim().to_lowercase();
        Self::ALL.into_iter().find(|m| m.as_str() == normalized)
    }

    pub fn valid_moods() -> Vec<String> {
        Self::ALL.iter().map(|m| m.as_str().to_string()).collect()
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
