use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use herodle::reward::oracle::{DifficultyOracle, OracleError};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Oracle that always answers with the same difficulty score
pub struct FixedDifficultyOracle(pub f64);

#[async_trait]
impl DifficultyOracle for FixedDifficultyOracle {
    async fn predict(&self, _character_name: &str) -> Result<f64, OracleError> {
        Ok(self.0)
    }
}

/// Oracle that always fails, exercising the random-difficulty fallback
pub struct FailingDifficultyOracle;

#[async_trait]
impl DifficultyOracle for FailingDifficultyOracle {
    async fn predict(&self, _character_name: &str) -> Result<f64, OracleError> {
        Err(OracleError::Status(503))
    }
}

/// Oracle that records which character names it was asked about
#[derive(Clone, Default)]
pub struct RecordingDifficultyOracle {
    asked: Arc<RwLock<Vec<String>>>,
    score: f64,
}

impl RecordingDifficultyOracle {
    pub fn new(score: f64) -> Self {
        Self {
            asked: Arc::new(RwLock::new(Vec::new())),
            score,
        }
    }

    pub async fn asked_names(&self) -> Vec<String> {
        self.asked.read().await.clone()
    }
}

#[async_trait]
impl DifficultyOracle for RecordingDifficultyOracle {
    async fn predict(&self, character_name: &str) -> Result<f64, OracleError> {
        self.asked.write().await.push(character_name.to_string());
        Ok(self.score)
    }
}
