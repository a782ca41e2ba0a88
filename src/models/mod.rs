pub mod mood;
pub mod playlist;
pub mod profile;
pub mod sentiment;
pub mod song;
pub mod user;

pub use mood::Mood;
pub use playlist::{
    CreatePlaylistRequest, Playlist, PlaylistListResponse, PlaylistResponse, UpdatePlaylistRequest,
};
pub use profile::{
    AddMoodRequest, AddPlaylistHistoryRequest, FavoritesResponse, HistoryClearedResponse,
    HistoryEntryResponse, HistoryQuery, HistoryResponse, MoodHistoryEntry, PlaylistHistoryEntry,
    Profile, ProfileResponse, UpdateFavoritesRequest,
};
pub use sentiment::{DetectMoodRequest, DetectMoodResponse, SentimentResult};
pub use song::{MoodListResponse, RecommendationResponse, SongRecord};
pub use user::{AuthResponse, CreateUserRequest, LoginRequest, User, UserInfo};
