use serde::{Deserialize, Serialize};

use super::achievements::Achievement;
use super::collection::RarityBreakdown;
use super::models::{CardInstance, RewardResult};

/// Request payload for awarding a card after a finished game.
///
/// Every field is required; they are optional here so the service can reject
/// an absent field as invalid input instead of a deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardRequest {
    pub character_id: Option<String>,
    pub guess_time: Option<f64>,
    pub clues_used: Option<u32>,
    pub wrong_attempts: Option<u32>,
    pub is_won: Option<bool>,
}

/// Response for a successful award
#[derive(Debug, Serialize)]
pub struct AwardResponse {
    pub success: bool,
    pub reward: RewardResult,
}

/// Response for the collection endpoint, cards newest-first
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResponse {
    pub cards: Vec<CardInstance>,
    pub total_cards: u32,
    pub unique_characters: u32,
    pub rarity_count: RarityBreakdown,
    pub completion_percentage: f64,
}

/// Response for the achievements endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct AchievementsResponse {
    pub achievements: Vec<Achievement>,
}
