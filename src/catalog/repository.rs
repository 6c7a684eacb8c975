use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, instrument};

use super::models::Character;

/// Trait for character catalog lookups
///
/// The catalog is read-only from the server's point of view. The trait is
/// async so a future implementation can be backed by a database or remote
/// service without changing any caller.
#[async_trait]
pub trait CharacterCatalog: Send + Sync {
    async fn get_by_id(&self, character_id: &str) -> Option<Character>;

    /// Case-insensitive lookup by display name, used for guess matching
    async fn find_by_name(&self, name: &str) -> Option<Character>;

    async fn list_all(&self) -> Vec<Character>;

    /// Number of known characters, used for collection completion percentage
    async fn total_count(&self) -> usize;
}

/// In-memory catalog seeded with a fixed roster at construction
pub struct StaticCharacterCatalog {
    by_id: HashMap<String, Character>,
    ordered_ids: Vec<String>,
}

impl StaticCharacterCatalog {
    pub fn new(characters: Vec<Character>) -> Self {
        let ordered_ids = characters.iter().map(|c| c.id.clone()).collect();
        let by_id = characters.into_iter().map(|c| (c.id.clone(), c)).collect();
        Self { by_id, ordered_ids }
    }

    /// Builds the catalog with the default game roster
    pub fn with_default_roster() -> Self {
        Self::new(default_roster())
    }
}

#[async_trait]
impl CharacterCatalog for StaticCharacterCatalog {
    #[instrument(skip(self))]
    async fn get_by_id(&self, character_id: &str) -> Option<Character> {
        let character = self.by_id.get(character_id).cloned();
        match &character {
            Some(c) => debug!(character_id = %character_id, name = %c.name, "Character found"),
            None => debug!(character_id = %character_id, "Character not found"),
        }
        character
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> Option<Character> {
        self.by_id
            .values()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
            .cloned()
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Vec<Character> {
        self.ordered_ids
            .iter()
            .filter_map(|id| self.by_id.get(id).cloned())
            .collect()
    }

    async fn total_count(&self) -> usize {
        self.by_id.len()
    }
}

fn card_image(id: &str) -> String {
    format!("/images/cards/{}.png", id)
}

fn portrait_image(id: &str) -> String {
    format!("/images/characters/{}.png", id)
}

fn character(id: &str, name: &str, universe: &str, powers: &[&str]) -> Character {
    Character::new(
        id,
        name,
        universe,
        powers,
        &card_image(id),
        &portrait_image(id),
    )
}

/// The shipped roster. Mirrors the character dataset the guessing game runs on.
pub fn default_roster() -> Vec<Character> {
    vec![
        character(
            "spider-man",
            "Spider-Man",
            "Marvel",
            &["wall-crawling", "spider-sense", "super-strength"],
        ),
        character(
            "iron-man",
            "Iron Man",
            "Marvel",
            &["powered armor", "flight", "genius intellect"],
        ),
        character(
            "captain-america",
            "Captain America",
            "Marvel",
            &["peak human condition", "vibranium shield"],
        ),
        character(
            "thor",
            "Thor",
            "Marvel",
            &["god of thunder", "mjolnir", "flight"],
        ),
        character(
            "hulk",
            "Hulk",
            "Marvel",
            &["limitless strength", "regeneration"],
        ),
        character(
            "black-widow",
            "Black Widow",
            "Marvel",
            &["master spy", "martial arts"],
        ),
        character(
            "doctor-strange",
            "Doctor Strange",
            "Marvel",
            &["sorcery", "astral projection", "time manipulation"],
        ),
        character(
            "wolverine",
            "Wolverine",
            "Marvel",
            &["adamantium claws", "healing factor"],
        ),
        character(
            "batman",
            "Batman",
            "DC",
            &["detective skills", "martial arts", "gadgets"],
        ),
        character(
            "superman",
            "Superman",
            "DC",
            &["flight", "super-strength", "heat vision"],
        ),
        character(
            "wonder-woman",
            "Wonder Woman",
            "DC",
            &["super-strength", "lasso of truth", "flight"],
        ),
        character(
            "flash",
            "The Flash",
            "DC",
            &["super-speed", "speed force"],
        ),
        character(
            "aquaman",
            "Aquaman",
            "DC",
            &["aquatic telepathy", "super-strength"],
        ),
        character("green-lantern", "Green Lantern", "DC", &["power ring"]),
        character("john-wick", "John Wick", "Thunder Road", &[]),
    ]
}
