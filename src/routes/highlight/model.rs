use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateHighlightRequest {
    pub game_name: String,
    pub game_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HighlightPatch {
    pub game_name: Option<String>,
    pub game_id: Option<String>,
}
