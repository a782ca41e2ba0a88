use crate::models::Mood;
use serde::{Deserialize, Serialize};

/// Outcome of classifying a piece of free text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
    pub mood: Mood,
    pub confidence: f64,
    pub raw_score: i32,
    pub positive_words: Vec<String>,
    pub negative_words: Vec<String>,
    pub word_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct DetectMoodRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DetectMoodResponse {
    pub mood: Mood,
    pub confidence: f64,
    pub score: i32,
    pub analysis: SentimentAnalysis,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysis {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub word_count: usize,
}

impl From<SentimentResult> for DetectMoodResponse {
    fn from(result: SentimentResult) -> Self {
        DetectMoodResponse {
            mood: result.mood,
            confidence: result.confidence,
            score: result.raw_score,
            analysis: SentimentAnalysis {
                positive: result.positive_words,
                negative: result.negative_words,
                word_count: result.word_count,
            },
        }
    }
}
