use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreatePlatformRequest {
    pub platform_name: String,
    pub platform_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlatformPatch {
    pub platform_name: Option<String>,
    pub platform_id: Option<String>,
}
