pub mod auth;
pub mod extractors;
pub mod health;
pub mod middleware;
pub mod mood;
pub mod playlists;
pub mod profile;
pub mod recommendation;


pub use auth::auth_routes;
pub use mood::mood_routes;
pub use playlists::playlist_routes;
pub use profile::profile_routes;
pub use recommendation::recommendation_routes;

use crate::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Builds the full HTTP surface. Transport layers (CORS, compression, tracing)
/// are added by `main`.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/health", get(health::health))
        .merge(recommendation_routes())
        .merge(mood_routes())
        .merge(playlist_routes())
        .nest("/auth", auth_routes())
        .nest("/profile", profile_routes())
        .fallback(health::api_not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::rate_limit,
        ));

    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health))
        .nest("/api", api)
        .fallback(health::not_found)
        .with_state(state)
}
