use gamelog_backend::{AppState, config::Config, make_router};
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;

async fn spawn_app() -> String {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let config = Config {
        database_url: "sqlite::memory:".into(),
        jwt_secret: "integration-test-secret".into(),
        jwt_expiration_secs: 3600,
        server_host: "127.0.0.1".into(),
        server_port: 0,
    };
    let app = make_router(AppState { pool, config });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn register(
    client: &reqwest::Client,
    base: &str,
    email: &str,
    username: &str,
) -> (i64, String) {
    let resp = client
        .post(format!("{base}/register"))
        .json(&json!({"email": email, "username": username, "password": "pw"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    (
        body["user"]["id"].as_i64().unwrap(),
        body["token"].as_str().unwrap().to_string(),
    )
}

#[tokio::test]
async fn register_then_fetch_by_id_and_username() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let (id, token) = register(&client, &base, "a@b.com", "alice").await;

    let resp = client
        .get(format!("{base}/user/{id}"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], "a@b.com");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
    assert_eq!(body["backlog"], json!([]));

    let resp = client
        .get(format!("{base}/profile/alice"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"].as_i64().unwrap(), id);
}

#[tokio::test]
async fn register_rejects_duplicate_username() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    register(&client, &base, "a@b.com", "alice").await;

    let resp = client
        .post(format!("{base}/register"))
        .json(&json!({"email": "other@b.com", "username": "alice", "password": "pw"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status_code"], 400);
    assert!(body["message"].as_str().unwrap().contains("taken"));
}

#[tokio::test]
async fn login_succeeds_and_rejects_bad_credentials() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let (id, _) = register(&client, &base, "a@b.com", "alice").await;

    let resp = client
        .post(format!("{base}/login"))
        .json(&json!({"username": "alice", "password": "pw"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["user_id"].as_i64().unwrap(), id);
    assert!(body["token"].as_str().is_some());

    let resp = client
        .post(format!("{base}/login"))
        .json(&json!({"username": "alice", "password": "wrong"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    let resp = client
        .post(format!("{base}/login"))
        .json(&json!({"username": "nobody", "password": "pw"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn protected_routes_require_a_valid_token() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let (id, token) = register(&client, &base, "a@b.com", "alice").await;

    let resp = client.get(format!("{base}/users")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 401);

    let resp = client
        .get(format!("{base}/users"))
        .bearer_auth("not-a-token")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 401);

    let resp = client
        .get(format!("{base}/protected"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["user_id"].as_i64().unwrap(), id);
}

#[tokio::test]
async fn backlog_end_to_end() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let (id, token) = register(&client, &base, "a@b.com", "alice").await;

    let resp = client
        .post(format!("{base}/user/{id}/backlog"))
        .bearer_auth(&token)
        .json(&json!({"game_name": "Foo", "game_id": "42", "game_image": "x.png"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["user_id"].as_i64().unwrap(), id);
    assert_eq!(created["progress_status"], "NEW");
    let entry_id = created["id"].as_i64().unwrap();

    let resp = client
        .get(format!("{base}/user/{id}/backlog"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let rows: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["game_name"], "Foo");

    let resp = client
        .delete(format!("{base}/user/{id}/backlog/{entry_id}"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let resp = client
        .get(format!("{base}/user/{id}/backlog"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let rows: Vec<Value> = resp.json().await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn missing_required_field_is_400_and_persists_nothing() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let (id, token) = register(&client, &base, "a@b.com", "alice").await;

    let resp = client
        .post(format!("{base}/user/{id}/backlog"))
        .bearer_auth(&token)
        .json(&json!({"game_name": "Foo", "game_id": "42"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("game_image"));

    let resp = client
        .get(format!("{base}/user/{id}/backlog"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let rows: Vec<Value> = resp.json().await.unwrap();
    assert!(rows.is_empty());

    // the shared extractor behaves the same on every collection route
    let resp = client
        .post(format!("{base}/user/{id}/plat"))
        .bearer_auth(&token)
        .json(&json!({"platform_name": "Switch"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("platform_id"));

    let resp = client
        .get(format!("{base}/user/{id}/plat"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let rows: Vec<Value> = resp.json().await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn fetching_a_single_row_is_owner_scoped() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let (alice_id, alice_token) = register(&client, &base, "a@b.com", "alice").await;
    let (bob_id, bob_token) = register(&client, &base, "b@b.com", "bob").await;

    let resp = client
        .post(format!("{base}/user/{alice_id}/fav"))
        .bearer_auth(&alice_token)
        .json(&json!({"game_name": "Foo", "game_id": "42", "game_image": "x.png"}))
        .send()
        .await
        .unwrap();
    let created: Value = resp.json().await.unwrap();
    let favorite_id = created["id"].as_i64().unwrap();

    let resp = client
        .get(format!("{base}/user/{alice_id}/fav/{favorite_id}"))
        .bearer_auth(&alice_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["game_name"], "Foo");
    assert_eq!(body["user_id"].as_i64().unwrap(), alice_id);

    // alice's row id inside bob's own collection reads as absent
    let resp = client
        .get(format!("{base}/user/{bob_id}/fav/{favorite_id}"))
        .bearer_auth(&bob_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    let resp = client
        .get(format!("{base}/user/{alice_id}/fav/999"))
        .bearer_auth(&alice_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    let resp = client
        .get(format!("{base}/user/{alice_id}/backlog/1"))
        .bearer_auth(&alice_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn partial_update_leaves_absent_fields_untouched() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let (id, token) = register(&client, &base, "a@b.com", "alice").await;

    let resp = client
        .post(format!("{base}/user/{id}/nplay"))
        .bearer_auth(&token)
        .json(&json!({"game_name": "Foo", "game_id": "42", "notes": "first"}))
        .send()
        .await
        .unwrap();
    let created: Value = resp.json().await.unwrap();
    let playing_id = created["id"].as_i64().unwrap();

    let resp = client
        .put(format!("{base}/user/{id}/nplay/{playing_id}"))
        .bearer_auth(&token)
        .json(&json!({"notes": "halfway through"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["notes"], "halfway through");
    assert_eq!(updated["game_name"], "Foo");
    assert_eq!(updated["game_id"], "42");
}

#[tokio::test]
async fn backlog_status_transitions_and_rejects_unknown_status() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let (id, token) = register(&client, &base, "a@b.com", "alice").await;

    let resp = client
        .post(format!("{base}/user/{id}/backlog"))
        .bearer_auth(&token)
        .json(&json!({"game_name": "Foo", "game_id": "42", "game_image": "x.png"}))
        .send()
        .await
        .unwrap();
    let created: Value = resp.json().await.unwrap();
    let entry_id = created["id"].as_i64().unwrap();

    let resp = client
        .put(format!("{base}/user/{id}/backlog/{entry_id}"))
        .bearer_auth(&token)
        .json(&json!({"progress_status": "FINISHED"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["progress_status"], "FINISHED");
    assert_eq!(updated["game_name"], "Foo");

    let resp = client
        .put(format!("{base}/user/{id}/backlog/{entry_id}"))
        .bearer_auth(&token)
        .json(&json!({"progress_status": "DROPPED"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
}

#[tokio::test]
async fn delete_nonexistent_row_is_404() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let (id, token) = register(&client, &base, "a@b.com", "alice").await;

    let resp = client
        .delete(format!("{base}/user/{id}/fav/999"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status_code"], 404);
}

#[tokio::test]
async fn ownership_is_isolated_between_users() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let (alice_id, alice_token) = register(&client, &base, "a@b.com", "alice").await;
    let (bob_id, bob_token) = register(&client, &base, "b@b.com", "bob").await;

    let resp = client
        .post(format!("{base}/user/{alice_id}/fav"))
        .bearer_auth(&alice_token)
        .json(&json!({"game_name": "Foo", "game_id": "42", "game_image": "x.png"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    // bob addressing alice's collection cannot see or touch it
    let resp = client
        .get(format!("{base}/user/{alice_id}/fav"))
        .bearer_auth(&bob_token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    let resp = client
        .get(format!("{base}/user/{bob_id}/fav"))
        .bearer_auth(&bob_token)
        .send()
        .await
        .unwrap();
    let rows: Vec<Value> = resp.json().await.unwrap();
    assert!(rows.is_empty());

    // per-user uniqueness: both users may track the same game
    for (id, token) in [(alice_id, &alice_token), (bob_id, &bob_token)] {
        let resp = client
            .post(format!("{base}/user/{id}/backlog"))
            .bearer_auth(token)
            .json(&json!({"game_name": "Foo", "game_id": "42", "game_image": "x.png"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 200);
    }
}

#[tokio::test]
async fn backlog_create_with_platforms_is_atomic() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let (id, token) = register(&client, &base, "a@b.com", "alice").await;

    // a successful bundled create lands both the entry and its platforms
    let resp = client
        .post(format!("{base}/user/{id}/backlog"))
        .bearer_auth(&token)
        .json(&json!({
            "game_name": "Foo", "game_id": "42", "game_image": "x.png",
            "platforms": [
                {"platform_name": "Switch", "platform_id": "sw"},
                {"platform_name": "PC", "platform_id": "pc"}
            ]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["platforms"].as_array().unwrap().len(), 2);

    // a duplicate game rolls the whole request back, platforms included
    let resp = client
        .post(format!("{base}/user/{id}/backlog"))
        .bearer_auth(&token)
        .json(&json!({
            "game_name": "Foo", "game_id": "42", "game_image": "x.png",
            "platforms": [{"platform_name": "PS5", "platform_id": "ps5"}]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    let resp = client
        .get(format!("{base}/user/{id}/plat"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let platforms: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(platforms.len(), 2);
}

#[tokio::test]
async fn tag_and_genre_preference_lifecycle() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let (id, token) = register(&client, &base, "a@b.com", "alice").await;

    let resp = client
        .post(format!("{base}/user/{id}/like"))
        .bearer_auth(&token)
        .json(&json!({"tag_name": "roguelike", "tag_id": "17"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let liked: Value = resp.json().await.unwrap();
    let liked_id = liked["id"].as_i64().unwrap();
    assert_eq!(liked["tag_name"], "roguelike");

    let resp = client
        .post(format!("{base}/user/{id}/genredislikes"))
        .bearer_auth(&token)
        .json(&json!({"genre_name": "sports", "genre_id": "3"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    // likes and dislikes do not bleed into each other
    let resp = client
        .get(format!("{base}/user/{id}/dislike"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let rows: Vec<Value> = resp.json().await.unwrap();
    assert!(rows.is_empty());

    let resp = client
        .delete(format!("{base}/user/{id}/like/{liked_id}"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let remaining: Vec<Value> = resp.json().await.unwrap();
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn user_profile_embeds_owned_collections() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    let (id, token) = register(&client, &base, "a@b.com", "alice").await;

    client
        .post(format!("{base}/user/{id}/hl"))
        .bearer_auth(&token)
        .json(&json!({"game_name": "Foo", "game_id": "42"}))
        .send()
        .await
        .unwrap();
    client
        .post(format!("{base}/user/{id}/plat"))
        .bearer_auth(&token)
        .json(&json!({"platform_name": "PC", "platform_id": "pc"}))
        .send()
        .await
        .unwrap();

    let resp = client
        .get(format!("{base}/user/{id}"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["highlights"].as_array().unwrap().len(), 1);
    assert_eq!(body["platforms"].as_array().unwrap().len(), 1);
    assert_eq!(body["highlights"][0]["game_name"], "Foo");
    assert!(body["highlights"][0].get("password_hash").is_none());
}
