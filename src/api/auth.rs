use crate::api::extractors::JsonBody;
use crate::api::middleware::RequireAuth;
use crate::error::{AppError, Result};
use crate::models::{AuthResponse, CreateUserRequest, LoginRequest, UserInfo};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use validator::Validate;

pub fn auth_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
        .route("/logout", post(logout))
}

async fn register(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = state.auth_service.register(req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn login(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = state.auth_service.login(req).await?;
    Ok(Json(response))
}

async fn me(
    State(state): State<Arc<AppState>>,
    RequireAuth(claims): RequireAuth,
) -> Result<Json<UserInfo>> {
    let user = state.auth_service.get_user_by_id(claims.sub).await?;
    Ok(Json(user.into()))
}

/// Tokens are stateless, so logging out is the client discarding its token.
async fn logout() -> Json<Value> {
    Json(json!({ "message": "Logged out successfully" }))
}
