use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Internal-only failure of the difficulty oracle. Never surfaced to the
/// award caller; the stat assigner masks every variant with a random
/// fallback.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("Oracle request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Oracle returned status {0}")]
    Status(u16),
}

/// Capability interface for the external difficulty estimator
#[async_trait]
pub trait DifficultyOracle: Send + Sync {
    /// Predicts how hard a character is to guess, as a 0-100 score
    async fn predict(&self, character_name: &str) -> Result<f64, OracleError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictRequest<'a> {
    character_name: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PredictResponse {
    difficulty_score: f64,
}

/// Oracle expiry counts as failure like any other; the fallback handles it
const PREDICT_TIMEOUT: Duration = Duration::from_secs(2);

/// HTTP client for the ML difficulty service
pub struct MlDifficultyOracle {
    client: reqwest::Client,
    base_url: String,
}

impl MlDifficultyOracle {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl DifficultyOracle for MlDifficultyOracle {
    #[instrument(skip(self))]
    async fn predict(&self, character_name: &str) -> Result<f64, OracleError> {
        let response = self
            .client
            .post(format!("{}/predict-difficulty", self.base_url))
            .timeout(PREDICT_TIMEOUT)
            .json(&PredictRequest { character_name })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::Status(status.as_u16()));
        }

        let prediction: PredictResponse = response.json().await?;
        debug!(
            character_name = %character_name,
            difficulty_score = prediction.difficulty_score,
            "Difficulty predicted"
        );

        Ok(prediction.difficulty_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prediction_payload() {
        let parsed: PredictResponse =
            serde_json::from_str(r#"{"difficultyScore": 62.5}"#).unwrap();
        assert_eq!(parsed.difficulty_score, 62.5);
    }

    #[test]
    fn serializes_request_payload() {
        let body = serde_json::to_string(&PredictRequest {
            character_name: "Spider-Man",
        })
        .unwrap();
        assert_eq!(body, r#"{"characterName":"Spider-Man"}"#);
    }

    #[tokio::test]
    async fn unreachable_oracle_yields_request_error() {
        // Nothing listens on this port; the connection is refused immediately
        let oracle = MlDifficultyOracle::new("http://127.0.0.1:1".to_string());

        let result = oracle.predict("Spider-Man").await;
        assert!(matches!(result, Err(OracleError::Request(_))));
    }
}
