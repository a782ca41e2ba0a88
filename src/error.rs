use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing required parameter: mood")]
    MoodRequired { valid_moods: Vec<String> },

    #[error("Invalid mood: {mood}. Valid moods are: {}", .valid_moods.join(", "))]
    InvalidMood {
        mood: String,
        valid_moods: Vec<String>,
    },

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Too many requests, please try again later")]
    RateLimited,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::MoodRequired { ref valid_moods }
            | AppError::InvalidMood { ref valid_moods, .. } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": self.to_string(),
                    "validMoods": valid_moods,
                }),
            ),
            AppError::InvalidCredentials | AppError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, json!({ "error": self.to_string() }))
            }
            AppError::Conflict(msg) => (StatusCode::CONFLICT, json!({ "error": msg })),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                json!({ "error": self.to_string() }),
            ),
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_mood_message_lists_alternatives() {
        let err = AppError::InvalidMood {
            mood: "grumpy".to_string(),
            valid_moods: vec!["happy".to_string(), "sad".to_string()],
        };
        assert_eq!(err.to_string(), "Invalid mood: grumpy. Valid moods are: happy, sad");
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (
                AppError::MoodRequired { valid_moods: vec![] },
                StatusCode::BAD_REQUEST,
            ),
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
            (AppError::Conflict("dup".into()), StatusCode::CONFLICT),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::RateLimited, StatusCode::TOO_MANY_REQUESTS),
            (
                AppError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
