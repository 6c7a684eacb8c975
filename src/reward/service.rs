use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, RwLock};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::achievements::{evaluate, newly_unlocked};
use super::collection::CollectionSummary;
use super::drop_tables::{draw_rarity, draw_variant};
use super::errors::RewardError;
use super::models::{CardInstance, PerformanceBreakdown, PerformanceInput, RewardResult};
use super::performance::calculate_performance_score;
use super::repository::CollectionRepository;
use super::stats::StatAssigner;
use super::types::{AwardRequest, CollectionResponse};
use crate::catalog::CharacterCatalog;
use crate::reward::achievements::Achievement;
use crate::reward::oracle::DifficultyOracle;

/// Stand-in user key while the game has no accounts
pub const DEFAULT_USER_KEY: &str = "default-user";

/// Composes scoring, rarity/variant draws, stat assignment, minting,
/// collection bookkeeping and achievement detection into one award
/// transaction per game-win event.
pub struct RewardService {
    repository: Arc<dyn CollectionRepository>,
    catalog: Arc<dyn CharacterCatalog>,
    assigner: StatAssigner,
    user_locks: RwLock<HashMap<String, Arc<AsyncMutex<()>>>>,
    perfect_games: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl RewardService {
    pub fn new(
        repository: Arc<dyn CollectionRepository>,
        catalog: Arc<dyn CharacterCatalog>,
        oracle: Arc<dyn DifficultyOracle>,
    ) -> Self {
        Self {
            repository,
            catalog,
            assigner: StatAssigner::new(oracle),
            user_locks: RwLock::new(HashMap::new()),
            perfect_games: RwLock::new(HashMap::new()),
        }
    }

    /// Awards one card for a finished game.
    ///
    /// Validation and character lookup happen before any mutation. The
    /// read-count-then-append window (snapshot, serial number, stat
    /// assignment, mint, achievement diff) runs under a per-user lock so
    /// concurrent awards cannot produce duplicate serials or duplicate or
    /// missed achievement firings.
    #[instrument(skip(self, request))]
    pub async fn award_card(
        &self,
        user_key: &str,
        request: AwardRequest,
    ) -> Result<RewardResult, RewardError> {
        let (character_id, input) = validate_award_request(request)?;

        let character = self
            .catalog
            .get_by_id(&character_id)
            .await
            .ok_or_else(|| RewardError::NotFound(character_id.clone()))?;

        let score = calculate_performance_score(&input);

        // Both draws happen even for a loss; score 0 lands in the floor bucket
        let rarity = draw_rarity(score);
        let variant = draw_variant(rarity);

        debug!(score, %rarity, %variant, "Performance scored and tiers drawn");

        let lock = self.user_lock(user_key).await;
        let _guard = lock.lock().await;

        let prior_cards = self.repository.snapshot(user_key).await?;
        let before = evaluate(&prior_cards, self.perfect_game_at(user_key).await);

        let prior_of_character = prior_cards
            .iter()
            .filter(|card| card.character_id == character.id)
            .count() as u32;
        let is_first_time = prior_of_character == 0;
        let serial_number = prior_of_character + 1;

        let stats = self.assigner.assign(&character).await;

        let minted_at = Utc::now();
        let card = CardInstance {
            id: mint_card_id(&character.id, minted_at),
            character_id: character.id.clone(),
            character_name: character.name.clone(),
            rarity,
            variant,
            serial_number,
            max_supply: rarity.max_supply(),
            stats,
            image_url: character.image_url.clone(),
            character_image_url: character.character_image_url.clone(),
            created_at: minted_at,
        };

        self.repository.append(user_key, card.clone()).await?;

        if score == 100.0 {
            self.record_perfect_game(user_key, minted_at).await;
        }

        let after_cards = self.repository.snapshot(user_key).await?;
        let after = evaluate(&after_cards, self.perfect_game_at(user_key).await);
        let unlocked_achievements = newly_unlocked(&before, &after);

        info!(
            card_id = %card.id,
            character_id = %card.character_id,
            %rarity,
            %variant,
            serial_number,
            is_first_time,
            unlocked_count = unlocked_achievements.len(),
            "Card awarded"
        );

        Ok(RewardResult {
            card,
            is_first_time,
            performance: PerformanceBreakdown {
                guess_time_seconds: input.guess_time_seconds,
                clues_used: input.clues_used,
                wrong_attempts: input.wrong_attempts,
                score,
                bonus_multiplier: score / 100.0,
            },
            unlocked_achievements,
        })
    }

    /// Current collection, cards newest-first, with aggregates
    #[instrument(skip(self))]
    pub async fn get_collection(&self, user_key: &str) -> Result<CollectionResponse, RewardError> {
        let cards = self.repository.snapshot(user_key).await?;
        let summary = CollectionSummary::from_cards(&cards, self.catalog.total_count().await);

        let mut newest_first = cards;
        newest_first.reverse();

        Ok(CollectionResponse {
            cards: newest_first,
            total_cards: summary.total_cards,
            unique_characters: summary.unique_characters,
            rarity_count: summary.rarity_count,
            completion_percentage: summary.completion_percentage,
        })
    }

    /// Level-triggered achievement view, recomputed fresh from the collection
    #[instrument(skip(self))]
    pub async fn get_achievements(&self, user_key: &str) -> Result<Vec<Achievement>, RewardError> {
        let cards = self.repository.snapshot(user_key).await?;
        Ok(evaluate(&cards, self.perfect_game_at(user_key).await))
    }

    async fn user_lock(&self, user_key: &str) -> Arc<AsyncMutex<()>> {
        {
            let guard = self.user_locks.read().await;
            if let Some(lock) = guard.get(user_key) {
                return lock.clone();
            }
        }

        let mut guard = self.user_locks.write().await;
        guard
            .entry(user_key.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }

    async fn perfect_game_at(&self, user_key: &str) -> Option<DateTime<Utc>> {
        self.perfect_games.read().await.get(user_key).copied()
    }

    async fn record_perfect_game(&self, user_key: &str, at: DateTime<Utc>) {
        let mut guard = self.perfect_games.write().await;
        guard.entry(user_key.to_string()).or_insert(at);
    }
}

fn mint_card_id(character_id: &str, minted_at: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{}-{}-{}",
        character_id,
        minted_at.timestamp_millis(),
        &suffix[..8]
    )
}

fn validate_award_request(
    request: AwardRequest,
) -> Result<(String, PerformanceInput), RewardError> {
    let character_id = request
        .character_id
        .ok_or_else(|| RewardError::InvalidInput("Missing field: characterId".to_string()))?;
    let guess_time_seconds = request
        .guess_time
        .ok_or_else(|| RewardError::InvalidInput("Missing field: guessTime".to_string()))?;
    let clues_used = request
        .clues_used
        .ok_or_else(|| RewardError::InvalidInput("Missing field: cluesUsed".to_string()))?;
    let wrong_attempts = request
        .wrong_attempts
        .ok_or_else(|| RewardError::InvalidInput("Missing field: wrongAttempts".to_string()))?;
    let is_won = request
        .is_won
        .ok_or_else(|| RewardError::InvalidInput("Missing field: isWon".to_string()))?;

    if guess_time_seconds < 0.0 {
        return Err(RewardError::InvalidInput(
            "guessTime must be non-negative".to_string(),
        ));
    }

    Ok((
        character_id,
        PerformanceInput {
            guess_time_seconds,
            clues_used,
            wrong_attempts,
            is_won,
        },
    ))
}
