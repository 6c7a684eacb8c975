use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Rarity tier assigned to a card at mint time, never changed afterward
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
    ];

    /// Maximum-supply ceiling printed on cards of this tier
    pub fn max_supply(&self) -> u32 {
        match self {
            Rarity::Mythic => 100,
            Rarity::Legendary => 500,
            Rarity::Epic => 1_000,
            Rarity::Rare => 5_000,
            Rarity::Common => 10_000,
        }
    }
}

/// Cosmetic presentation tag layered on a card, independent of rarity
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    Standard,
    Shiny,
    Holographic,
    Animated,
}

/// Stat triple assigned to a card instance at mint time, each in [0,100]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStats {
    pub popularity: u32,
    pub difficulty: u32,
    pub power: u32,
}

/// A minted collectible card. Immutable once created; owned by the
/// collection store after the append.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInstance {
    pub id: String,
    pub character_id: String,
    pub character_name: String,
    pub rarity: Rarity,
    pub variant: Variant,
    /// 1-based ordinal among all cards minted for this character
    pub serial_number: u32,
    pub max_supply: u32,
    pub stats: CardStats,
    pub image_url: String,
    pub character_image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Raw play telemetry for one finished game
#[derive(Debug, Clone, Copy)]
pub struct PerformanceInput {
    pub guess_time_seconds: f64,
    pub clues_used: u32,
    pub wrong_attempts: u32,
    pub is_won: bool,
}

/// Performance echo embedded in the reward result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceBreakdown {
    pub guess_time_seconds: f64,
    pub clues_used: u32,
    pub wrong_attempts: u32,
    pub score: f64,
    pub bonus_multiplier: f64,
}

/// Everything produced by one award event. Ephemeral; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardResult {
    pub card: CardInstance,
    pub is_first_time: bool,
    pub performance: PerformanceBreakdown,
    pub unlocked_achievements: Vec<super::achievements::Achievement>,
}
