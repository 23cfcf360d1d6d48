//! Persistence gateway: one repository per entity. Every method takes an
//! explicit executor (pool or open transaction), and every statement that
//! touches a child table carries `user_id` in its WHERE clause so an
//! ownership check can never be forgotten per-route.

pub mod backlog;
pub mod favorite;
pub mod highlight;
pub mod now_playing;
pub mod platform;
pub mod prefs;
pub mod user;

pub use backlog::{BacklogEntry, BacklogRepository, ProgressStatus};
pub use favorite::{Favorite, FavoriteRepository};
pub use highlight::{Highlight, HighlightRepository};
pub use now_playing::{NowPlaying, NowPlayingRepository};
pub use platform::{Platform, PlatformRepository};
pub use prefs::{
    GenrePreference, GenrePreferenceRepository, Sentiment, TagPreference, TagPreferenceRepository,
};
pub use user::{User, UserRepository};
