pub mod auth;
pub mod catalog;
pub mod playlist_store;
pub mod profile_store;
pub mod sentiment;
pub mod user_store;

pub use auth::AuthService;
pub use catalog::MoodCatalog;
pub use playlist_store::PlaylistStore;
pub use profile_store::ProfileStore;
pub use sentiment::SentimentClassifier;
pub use user_store::UserStore;
