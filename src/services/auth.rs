use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{AuthResponse, CreateUserRequest, LoginRequest, User};
use crate::services::user_store::UserStore;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub exp: i64,
}

pub struct AuthService {
    users: Arc<UserStore>,
    jwt_secret: String,
    token_ttl: Duration,
}

impl AuthService {
    pub fn new(users: Arc<UserStore>, config: &Config) -> Self {
        Self {
            users,
            jwt_secret: config.jwt_secret.clone(),
            token_ttl: Duration::hours(config.token_ttl_hours),
        }
    }

    pub async fn register(&self, req: CreateUserRequest) -> Result<AuthResponse> {
        let password_hash = self.hash_password(&req.password)?;

        let user = self.users.create(&req.email, password_hash).await?;
        tracing::info!(
            "Registered user {} ({} accounts)",
            user.id,
            self.users.count().await
        );

        let token = self.generate_token(&user)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    pub async fn login(&self, req: LoginRequest) -> Result<AuthResponse> {
        let user = self
            .users
            .find_by_email(&req.email)
            .await
            .ok_or(AppError::InvalidCredentials)?;

        self.verify_password(&req.password, &user.password_hash)?;

        let token = self.generate_token(&user)?;

        Ok(AuthResponse {
            token,
            user: user.into(),
        })
    }

    pub async fn verify_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AppError::Unauthorized)?;

        Ok(token_data.claims)
    }

    pub async fn get_user_by_id(&self, user_id: Uuid) -> Result<User> {
        self.users
            .find_by_id(user_id)
            .await
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))
    }

    fn verify_password(&self, password: &str, password_hash: &str) -> Result<()> {
        let parsed_hash =
            PasswordHash::new(password_hash)
                .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::InvalidCredentials)
    }

    fn generate_token(&self, user: &User) -> Result<String> {
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            exp: (Utc::now() + self.token_ttl).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))
    }
}
