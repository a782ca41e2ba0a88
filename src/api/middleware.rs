use crate::error::{AppError, Result};
use crate::services::auth::Claims;
use crate::state::AppState;
use axum::{
    async_trait,
    extract::{ConnectInfo, FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

pub struct RequireAuth(pub Claims);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self> {
        let token = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AppError::Unauthorized)?;

        let claims = state.auth_service.verify_token(token).await?;

        Ok(RequireAuth(claims))
    }
}

/// Per-client request limiter for the `/api` tree.
///
/// Clients are keyed by peer IP; requests served without connection info
/// (in-process tests, unusual transports) share the unspecified-address bucket.
pub async fn rate_limit(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response> {
    let client_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    if state.rate_limiter.check_key(&client_ip).is_err() {
        tracing::warn!("Rate limit exceeded for {}", client_ip);
        return Err(AppError::RateLimited);
    }

    Ok(next.run(req).await)
}
