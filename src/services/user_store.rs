use crate::error::{AppError, Result};
use crate::models::User;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory account storage, created at startup and owned by `AppState`.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let email = normalize_email(email);
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.users.read().await.iter().find(|u| u.id == id).cloned()
    }

    /// Inserts a new user; the uniqueness check and insert happen under one lock.
    pub async fn create(&self, email: &str, password_hash: String) -> Result<User> {
        let email = normalize_email(email);
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email == email) {
            return Err(AppError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        let user = User {
            id: Uuid::new_v4(),
            email,
            password_hash,
            created_at: Utc::now(),
        };
        users.push(user.clone());

        Ok(user)
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
