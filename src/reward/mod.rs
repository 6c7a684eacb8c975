// Public API - what other modules can use
pub use achievements::{evaluate, newly_unlocked, Achievement, AchievementId};
pub use collection::{CollectionSummary, RarityBreakdown};
pub use errors::RewardError;
pub use handlers::{award_card, get_achievements, get_collection};
pub use models::{CardInstance, CardStats, Rarity, RewardResult, Variant};
pub use oracle::{DifficultyOracle, MlDifficultyOracle, OracleError};
pub use repository::{CollectionRepository, InMemoryCollectionRepository};
pub use service::{RewardService, DEFAULT_USER_KEY};

// Internal modules
pub mod achievements;
pub mod collection;
pub mod drop_tables;
mod errors;
mod handlers;
pub mod models;
pub mod oracle;
pub mod performance;
pub mod repository;
pub mod sampler;
pub mod service;
pub mod stats;
pub mod types;
