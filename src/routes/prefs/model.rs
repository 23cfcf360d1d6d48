use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTagPreferenceRequest {
    pub tag_name: String,
    pub tag_id: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateGenrePreferenceRequest {
    pub genre_name: String,
    pub genre_id: String,
}
