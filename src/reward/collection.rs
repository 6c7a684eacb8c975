use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::models::{CardInstance, Rarity};

/// Per-rarity card counts. All five tiers are always present in the JSON
/// output, defaulting to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityBreakdown {
    pub common: u32,
    pub rare: u32,
    pub epic: u32,
    pub legendary: u32,
    pub mythic: u32,
}

impl RarityBreakdown {
    pub fn bump(&mut self, rarity: Rarity) {
        match rarity {
            Rarity::Common => self.common += 1,
            Rarity::Rare => self.rare += 1,
            Rarity::Epic => self.epic += 1,
            Rarity::Legendary => self.legendary += 1,
            Rarity::Mythic => self.mythic += 1,
        }
    }

    pub fn get(&self, rarity: Rarity) -> u32 {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Rare => self.rare,
            Rarity::Epic => self.epic,
            Rarity::Legendary => self.legendary,
            Rarity::Mythic => self.mythic,
        }
    }

    pub fn total(&self) -> u32 {
        self.common + self.rare + self.epic + self.legendary + self.mythic
    }
}

/// Aggregates derived from one collection snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub total_cards: u32,
    pub unique_characters: u32,
    pub rarity_count: RarityBreakdown,
    pub completion_percentage: f64,
}

impl CollectionSummary {
    /// Builds the summary from an unlock-ordered snapshot.
    /// `total_known_characters` comes from the character catalog.
    pub fn from_cards(cards: &[CardInstance], total_known_characters: usize) -> Self {
        let mut rarity_count = RarityBreakdown::default();
        let mut characters: HashSet<&str> = HashSet::new();

        for card in cards {
            rarity_count.bump(card.rarity);
            characters.insert(card.character_id.as_str());
        }

        let unique_characters = characters.len() as u32;
        let completion_percentage = if total_known_characters == 0 {
            0.0
        } else {
            f64::from(unique_characters) / total_known_characters as f64 * 100.0
        };

        Self {
            total_cards: cards.len() as u32,
            unique_characters,
            rarity_count,
            completion_percentage,
        }
    }
}
