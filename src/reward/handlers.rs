use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::service::DEFAULT_USER_KEY;
use super::types::{AchievementsResponse, AwardRequest, AwardResponse, CollectionResponse};
use crate::shared::{AppError, AppState};

/// HTTP handler for awarding a card after a finished game
///
/// POST /api/reward/award
/// Returns the minted card, performance breakdown and newly unlocked
/// achievements
#[instrument(name = "award_card", skip(state, request))]
pub async fn award_card(
    State(state): State<AppState>,
    Json(request): Json<AwardRequest>,
) -> Result<Json<AwardResponse>, AppError> {
    let reward = state
        .reward_service
        .award_card(DEFAULT_USER_KEY, request)
        .await?;

    info!(
        card_id = %reward.card.id,
        rarity = %reward.card.rarity,
        "Reward issued"
    );

    Ok(Json(AwardResponse {
        success: true,
        reward,
    }))
}

/// HTTP handler for reading the current collection
///
/// GET /api/reward/collection
/// Returns cards newest-first plus aggregate counts
#[instrument(name = "get_collection", skip(state))]
pub async fn get_collection(
    State(state): State<AppState>,
) -> Result<Json<CollectionResponse>, AppError> {
    let collection = state.reward_service.get_collection(DEFAULT_USER_KEY).await?;

    info!(
        total_cards = collection.total_cards,
        unique_characters = collection.unique_characters,
        "Collection read"
    );

    Ok(Json(collection))
}

/// HTTP handler for the level-triggered achievements view
///
/// GET /api/reward/achievements
#[instrument(name = "get_achievements", skip(state))]
pub async fn get_achievements(
    State(state): State<AppState>,
) -> Result<Json<AchievementsResponse>, AppError> {
    let achievements = state
        .reward_service
        .get_achievements(DEFAULT_USER_KEY)
        .await?;

    Ok(Json(AchievementsResponse { achievements }))
}
