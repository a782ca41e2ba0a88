use crate::config::Config;
use crate::services::{
    AuthService, MoodCatalog, PlaylistStore, ProfileStore, SentimentClassifier, UserStore,
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::net::IpAddr;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub type ClientRateLimiter = DefaultKeyedRateLimiter<IpAddr>;

/// Everything request handlers share. Built once in `main`, dropped on shutdown.
pub struct AppState {
    pub catalog: Arc<MoodCatalog>,
    pub classifier: Arc<SentimentClassifier>,
    pub auth_service: Arc<AuthService>,
    pub playlists: Arc<PlaylistStore>,
    pub profiles: Arc<ProfileStore>,
    pub rate_limiter: Arc<ClientRateLimiter>,
}

impl AppState {
    pub fn new(config: &Config, catalog: MoodCatalog) -> Self {
        let users = Arc::new(UserStore::new());

        Self {
            catalog: Arc::new(catalog),
            classifier: Arc::new(SentimentClassifier::default()),
            auth_service: Arc::new(AuthService::new(users, config)),
            playlists: Arc::new(PlaylistStore::new()),
            profiles: Arc::new(ProfileStore::new()),
            rate_limiter: Arc::new(build_rate_limiter(config)),
        }
    }
}

/// `rate_limit_max_requests` per client, replenished evenly across the window.
fn build_rate_limiter(config: &Config) -> ClientRateLimiter {
    let burst = NonZeroU32::new(config.rate_limit_max_requests).unwrap_or(NonZeroU32::MIN);
    let window = Duration::from_secs(config.rate_limit_window_secs.max(1));
    let quota = Quota::with_period(window / burst.get())
        .unwrap_or_else(|| Quota::per_second(burst))
        .allow_burst(burst);

    RateLimiter::keyed(quota)
}

/// Periodically drops limiter entries for clients whose bucket has fully
/// refilled, so the per-IP map only holds recently active clients.
pub fn spawn_rate_limiter_cleanup(
    limiter: Arc<ClientRateLimiter>,
    every: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let before = limiter.len();
            limiter.retain_recent();
            limiter.shrink_to_fit();
            let after = limiter.len();
            if after < before {
                tracing::debug!("Rate limiter pruned {} idle clients", before - after);
            }
        }
    })
}
