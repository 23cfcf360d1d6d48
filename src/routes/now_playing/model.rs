use serde::Deserialize;

/// `notes` is required but may be an empty string, matching the established
/// client contract.
#[derive(Debug, Deserialize)]
pub struct CreateNowPlayingRequest {
    pub game_name: String,
    pub game_id: String,
    pub notes: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NowPlayingPatch {
    pub game_name: Option<String>,
    pub game_id: Option<String>,
    pub notes: Option<String>,
}
