use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use tower::ServiceExt; // for `oneshot`

use herodle::{
    catalog::{list_characters, StaticCharacterCatalog},
    reward::{
        award_card, get_achievements, get_collection, DifficultyOracle,
        InMemoryCollectionRepository, RewardService,
    },
    shared::AppState,
};

use super::mocks::FixedDifficultyOracle;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// Builds the full application router exactly as main does, with the
/// difficulty oracle swapped for a test double.
pub fn build_app_with_oracle(oracle: Arc<dyn DifficultyOracle>) -> Router {
    let collection_repository = Arc::new(InMemoryCollectionRepository::new());
    let character_catalog = Arc::new(StaticCharacterCatalog::with_default_roster());

    let reward_service = Arc::new(RewardService::new(
        collection_repository,
        character_catalog.clone(),
        oracle,
    ));

    let app_state = AppState::new(reward_service, character_catalog);

    Router::new()
        .route("/api/reward/award", post(award_card))
        .route("/api/reward/collection", get(get_collection))
        .route("/api/reward/achievements", get(get_achievements))
        .route("/api/characters", get(list_characters))
        .with_state(app_state)
}

pub fn build_app() -> Router {
    build_app_with_oracle(Arc::new(FixedDifficultyOracle(50.0)))
}

/// POSTs an award payload and returns the status plus parsed body
pub async fn post_award(app: &Router, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/reward/award")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// GETs a path and returns the status plus parsed body
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// Award payload for a win with the given telemetry
pub fn won_payload(character_id: &str, guess_time: f64, clues: u32, wrong: u32) -> String {
    format!(
        r#"{{"characterId":"{}","guessTime":{},"cluesUsed":{},"wrongAttempts":{},"isWon":true}}"#,
        character_id, guess_time, clues, wrong
    )
}
