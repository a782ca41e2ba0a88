use crate::error::{AppError, Result};
use crate::models::{Mood, SentimentResult};

/// Mood reported when positive and negative matches cancel out (or none occur).
pub const ZERO_SCORE_MOOD: Mood = Mood::Neutral;

/// A score of this magnitude or more yields full confidence.
pub const CONFIDENCE_NORMALIZER: f64 = 5.0;

const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "joy",
    "great",
    "awesome",
    "love",
    "excited",
    "amazing",
    "wonderful",
    "fantastic",
    "good",
    "glad",
    "cheerful",
    "delight",
    "smile",
    "grateful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "angry",
    "terrible",
    "awful",
    "hate",
    "disappointed",
    "frustrated",
    "bad",
    "horrible",
    "depressed",
    "upset",
    "lonely",
    "crying",
    "miserable",
    "worried",
];

/// Keyword-based sentiment scoring over two fixed word lists.
///
/// A token counts as a match when it *contains* a listed word ("joyful" matches
/// "joy"). Each token contributes at most one positive and one negative match.
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(POSITIVE_WORDS, NEGATIVE_WORDS)
    }
}

impl SentimentClassifier {
    pub fn new(positive: &[&str], negative: &[&str]) -> Self {
        let normalize = |words: &[&str]| {
            words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };

        Self {
            positive: normalize(positive),
            negative: normalize(negative),
        }
    }

    pub fn classify(&self, text: &str) -> Result<SentimentResult> {
        if text.trim().is_empty() {
            return Err(AppError::Validation(
                "Text input is required and must be a non-empty string".to_string(),
            ));
        }

        let tokens = tokenize(text);

        let mut positive_words = Vec::new();
        let mut negative_words = Vec::new();

        for token in &tokens {
            if self.positive.iter().any(|w| token.contains(w.as_str())) {
                positive_words.push(token.clone());
            }
            if self.negative.iter().any(|w| token.contains(w.as_str())) {
                negative_words.push(token.clone());
            }
        }

        let raw_score = positive_words.len() as i32 - negative_words.len() as i32;

        Ok(SentimentResult {
            mood: mood_for_score(raw_score),
            confidence: confidence_for_score(raw_score),
            raw_score,
            positive_words,
            negative_words,
            word_count: tokens.len(),
        })
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| {
            raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

fn mood_for_score(score: i32) -> Mood {
    match score {
        s if s > 0 => Mood::Happy,
        s if s < 0 => Mood::Sad,
        _ => ZERO_SCORE_MOOD,
    }
}

fn confidence_for_score(score: i32) -> f64 {
    (f64::from(score.abs()) / CONFIDENCE_NORMALIZER).min(1.0)
}
