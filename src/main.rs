mod catalog;
mod reward;
mod shared;

use axum::{
    routing::{get, post},
    Router,
};
use catalog::StaticCharacterCatalog;
use reward::{InMemoryCollectionRepository, MlDifficultyOracle, RewardService};
use shared::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "herodle=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting herodle reward server");

    // Create shared application state with dependency injection
    let collection_repository = Arc::new(InMemoryCollectionRepository::new());
    let character_catalog = Arc::new(StaticCharacterCatalog::with_default_roster());

    let ml_service_url =
        std::env::var("ML_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let difficulty_oracle = Arc::new(MlDifficultyOracle::new(ml_service_url));

    let reward_service = Arc::new(RewardService::new(
        collection_repository,
        character_catalog.clone(),
        difficulty_oracle,
    ));

    let app_state = AppState::new(reward_service, character_catalog);

    // build our application
    let app = Router::new()
        .route("/", get(|| async { "herodle reward server" }))
        .route("/api/reward/award", post(reward::award_card))
        .route("/api/reward/collection", get(reward::get_collection))
        .route("/api/reward/achievements", get(reward::get_achievements))
        .route("/api/characters", get(catalog::list_characters))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();
    info!("Server running on http://localhost:{}", port);
    axum::serve(listener, app).await.unwrap();
}
