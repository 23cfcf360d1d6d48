use serde::{Deserialize, Serialize};

use crate::db::{BacklogEntry, Platform, ProgressStatus};
use crate::routes::platform::model::CreatePlatformRequest;

#[derive(Debug, Deserialize)]
pub struct CreateBacklogRequest {
    pub game_name: String,
    pub game_id: String,
    pub game_image: String,
    #[serde(default)]
    pub game_genre: Option<String>,
    #[serde(default)]
    pub progress_status: ProgressStatus,
    /// Platforms registered together with the entry; inserted in the same
    /// transaction, so a failure leaves neither behind.
    #[serde(default)]
    pub platforms: Vec<CreatePlatformRequest>,
}

/// Partial update: absent fields stay untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BacklogPatch {
    pub game_name: Option<String>,
    pub game_id: Option<String>,
    pub game_image: Option<String>,
    pub game_genre: Option<String>,
    pub progress_status: Option<ProgressStatus>,
}

#[derive(Debug, Serialize)]
pub struct CreateBacklogResponse {
    #[serde(flatten)]
    pub entry: BacklogEntry,
    pub platforms: Vec<Platform>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_defaults_to_all_absent() {
        let patch: BacklogPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.game_name.is_none());
        assert!(patch.progress_status.is_none());
    }

    #[test]
    fn create_request_requires_game_image() {
        let err = serde_json::from_str::<CreateBacklogRequest>(
            r#"{"game_name": "Foo", "game_id": "42"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("game_image"));
    }

    #[test]
    fn create_request_defaults_status_to_new() {
        let req: CreateBacklogRequest = serde_json::from_str(
            r#"{"game_name": "Foo", "game_id": "42", "game_image": "x.png"}"#,
        )
        .unwrap();
        assert_eq!(req.progress_status, ProgressStatus::New);
        assert!(req.platforms.is_empty());
    }
}
