// Library crate for the herodle reward server
// This file exposes the public API for integration tests

pub mod catalog;
pub mod reward;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use catalog::{Character, CharacterCatalog, StaticCharacterCatalog};
pub use reward::{
    Achievement, AchievementId, CardInstance, CollectionRepository, DifficultyOracle,
    InMemoryCollectionRepository, OracleError, Rarity, RewardResult, RewardService, Variant,
    DEFAULT_USER_KEY,
};
pub use shared::{AppError, AppState};
