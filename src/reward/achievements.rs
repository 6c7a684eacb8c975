use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::models::{CardInstance, Rarity};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AchievementId {
    FirstCard,
    Collector,
    MasterCollector,
    LegendaryPull,
    MythicHunter,
    PerfectGame,
}

/// A milestone with recomputed progress and an unlock instant derived from
/// the collection (or, for perfect-game, recorded at award time).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: AchievementId,
    pub name: String,
    pub description: String,
    pub progress: u32,
    pub max_progress: u32,
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Achievement {
    pub fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some()
    }
}

fn achievement(
    id: AchievementId,
    name: &str,
    description: &str,
    progress: u32,
    max_progress: u32,
    unlocked_at: Option<DateTime<Utc>>,
) -> Achievement {
    Achievement {
        id,
        name: name.to_string(),
        description: description.to_string(),
        progress: progress.min(max_progress),
        max_progress,
        unlocked_at,
    }
}

/// Timestamp of the nth card overall (1-based), once the collection holds it
fn nth_card_unlock(cards: &[CardInstance], target: u32) -> Option<DateTime<Utc>> {
    cards.get(target as usize - 1).map(|card| card.created_at)
}

/// Timestamp of the first card of the given rarity
fn first_of_rarity(cards: &[CardInstance], rarity: Rarity) -> Option<DateTime<Utc>> {
    cards
        .iter()
        .find(|card| card.rarity == rarity)
        .map(|card| card.created_at)
}

/// Recomputes the fixed, ordered achievement list from an unlock-ordered
/// collection snapshot (level-triggered view).
///
/// `perfect_game_at` is the one externally recorded unlock: no score is
/// stored on a card, so the orchestrator detects it at award time.
pub fn evaluate(
    cards: &[CardInstance],
    perfect_game_at: Option<DateTime<Utc>>,
) -> Vec<Achievement> {
    let total = cards.len() as u32;
    let legendaries = cards
        .iter()
        .filter(|c| c.rarity == Rarity::Legendary)
        .count() as u32;
    let mythics = cards.iter().filter(|c| c.rarity == Rarity::Mythic).count() as u32;

    vec![
        achievement(
            AchievementId::FirstCard,
            "First Card",
            "Unlock your first character card",
            total,
            1,
            nth_card_unlock(cards, 1),
        ),
        achievement(
            AchievementId::Collector,
            "Collector",
            "Collect 10 character cards",
            total,
            10,
            nth_card_unlock(cards, 10),
        ),
        achievement(
            AchievementId::MasterCollector,
            "Master Collector",
            "Collect 50 character cards",
            total,
            50,
            nth_card_unlock(cards, 50),
        ),
        achievement(
            AchievementId::LegendaryPull,
            "Legendary Pull",
            "Unlock a legendary card",
            legendaries,
            1,
            first_of_rarity(cards, Rarity::Legendary),
        ),
        achievement(
            AchievementId::MythicHunter,
            "Mythic Hunter",
            "Unlock a mythic card",
            mythics,
            1,
            first_of_rarity(cards, Rarity::Mythic),
        ),
        achievement(
            AchievementId::PerfectGame,
            "Perfect Game",
            "Win with a flawless instant guess",
            u32::from(perfect_game_at.is_some()),
            1,
            perfect_game_at,
        ),
    ]
}

/// Edge-triggered diff: achievements unlocked in `after` that were still
/// locked in `before`. Reported only on the award event that crosses the
/// threshold.
pub fn newly_unlocked(before: &[Achievement], after: &[Achievement]) -> Vec<Achievement> {
    after
        .iter()
        .filter(|current| {
            current.is_unlocked()
                && !before
                    .iter()
                    .any(|prior| prior.id == current.id && prior.is_unlocked())
        })
        .cloned()
        .collect()
}
