pub mod backlog;
pub mod favorite;
pub mod highlight;
pub mod now_playing;
pub mod platform;
pub mod prefs;
pub mod user;
