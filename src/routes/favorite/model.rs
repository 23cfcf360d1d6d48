use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateFavoriteRequest {
    pub game_name: String,
    pub game_id: String,
    pub game_image: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FavoritePatch {
    pub game_name: Option<String>,
    pub game_id: Option<String>,
    pub game_image: Option<String>,
}
