use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::errors::RewardError;
use super::models::CardInstance;

/// Trait for collection store operations
///
/// Append-only, keyed by an opaque user key so a persistent backend can be
/// swapped in later without touching the orchestrator. An unknown key is an
/// empty collection, never an error.
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Adds a card to the end of the user's sequence, creating it on first use
    async fn append(&self, user_key: &str, card: CardInstance) -> Result<(), RewardError>;

    /// Returns the user's cards in unlock order
    async fn snapshot(&self, user_key: &str) -> Result<Vec<CardInstance>, RewardError>;
}

/// In-memory implementation of CollectionRepository for a single process
#[derive(Debug, Default)]
pub struct InMemoryCollectionRepository {
    collections: Arc<RwLock<HashMap<String, Vec<CardInstance>>>>,
}

impl InMemoryCollectionRepository {
    pub fn new() -> Self {
        Self {
            collections: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl CollectionRepository for InMemoryCollectionRepository {
    #[instrument(skip(self, card))]
    async fn append(&self, user_key: &str, card: CardInstance) -> Result<(), RewardError> {
        debug!(
            user_key = %user_key,
            card_id = %card.id,
            character_id = %card.character_id,
            "Appending card to collection"
        );

        let mut collections = self.collections.write().await;
        collections
            .entry(user_key.to_string())
            .or_default()
            .push(card);

        Ok(())
    }

    #[instrument(skip(self))]
    async fn snapshot(&self, user_key: &str) -> Result<Vec<CardInstance>, RewardError> {
        let collections = self.collections.read().await;
        Ok(collections.get(user_key).cloned().unwrap_or_default())
    }
}
