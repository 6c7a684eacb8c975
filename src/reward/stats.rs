use rand::Rng;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::models::CardStats;
use super::oracle::DifficultyOracle;
use crate::catalog::Character;

/// Universes whose characters draw from the high popularity band
const POPULAR_UNIVERSES: [&str; 2] = ["Marvel", "DC"];

/// Produces the stat triple for a freshly minted card.
///
/// Difficulty comes from the injected oracle when it answers; any oracle
/// failure is logged and masked by a uniform random fallback, so callers
/// always get a complete stat set.
pub struct StatAssigner {
    oracle: Arc<dyn DifficultyOracle>,
}

impl StatAssigner {
    pub fn new(oracle: Arc<dyn DifficultyOracle>) -> Self {
        Self { oracle }
    }

    #[instrument(skip(self, character), fields(character_id = %character.id))]
    pub async fn assign(&self, character: &Character) -> CardStats {
        let popularity = if POPULAR_UNIVERSES.contains(&character.universe.as_str()) {
            rand::rng().random_range(70..100)
        } else {
            rand::rng().random_range(30..80)
        };

        let difficulty = match self.oracle.predict(&character.name).await {
            Ok(score) => score.round().clamp(0.0, 100.0) as u32,
            Err(err) => {
                warn!(
                    character_name = %character.name,
                    error = %err,
                    "Difficulty oracle unavailable, falling back to random difficulty"
                );
                rand::rng().random_range(0..100)
            }
        };

        let power = if character.powers.is_empty() {
            rand::rng().random_range(20..80)
        } else {
            rand::rng().random_range(60..90)
        };

        let stats = CardStats {
            popularity,
            difficulty,
            power,
        };
        debug!(?stats, "Stats assigned");
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reward::oracle::OracleError;
    use async_trait::async_trait;

    struct FixedOracle(f64);

    #[async_trait]
    impl DifficultyOracle for FixedOracle {
        async fn predict(&self, _character_name: &str) -> Result<f64, OracleError> {
            Ok(self.0)
        }
    }

    struct FailingOracle;

    #[async_trait]
    impl DifficultyOracle for FailingOracle {
        async fn predict(&self, _character_name: &str) -> Result<f64, OracleError> {
            Err(OracleError::Status(503))
        }
    }

    fn marvel_character() -> Character {
        Character::new(
            "spider-man",
            "Spider-Man",
            "Marvel",
            &["wall-crawling"],
            "/images/cards/spider-man.png",
            "/images/characters/spider-man.png",
        )
    }

    fn obscure_powerless_character() -> Character {
        Character::new(
            "john-wick",
            "John Wick",
            "Thunder Road",
            &[],
            "/images/cards/john-wick.png",
            "/images/characters/john-wick.png",
        )
    }

    #[tokio::test]
    async fn uses_rounded_oracle_difficulty_on_success() {
        let assigner = StatAssigner::new(Arc::new(FixedOracle(61.4)));
        let stats = assigner.assign(&marvel_character()).await;
        assert_eq!(stats.difficulty, 61);

        let assigner = StatAssigner::new(Arc::new(FixedOracle(61.5)));
        let stats = assigner.assign(&marvel_character()).await;
        assert_eq!(stats.difficulty, 62);
    }

    #[tokio::test]
    async fn falls_back_to_random_difficulty_on_oracle_failure() {
        let assigner = StatAssigner::new(Arc::new(FailingOracle));
        for _ in 0..50 {
            let stats = assigner.assign(&marvel_character()).await;
            assert!(stats.difficulty < 100);
        }
    }

    #[tokio::test]
    async fn popular_universe_draws_high_popularity() {
        let assigner = StatAssigner::new(Arc::new(FixedOracle(50.0)));
        for _ in 0..50 {
            let stats = assigner.assign(&marvel_character()).await;
            assert!((70..100).contains(&stats.popularity));
        }
    }

    #[tokio::test]
    async fn obscure_universe_draws_low_popularity() {
        let assigner = StatAssigner::new(Arc::new(FixedOracle(50.0)));
        for _ in 0..50 {
            let stats = assigner.assign(&obscure_powerless_character()).await;
            assert!((30..80).contains(&stats.popularity));
        }
    }

    #[tokio::test]
    async fn powered_characters_draw_high_power() {
        let assigner = StatAssigner::new(Arc::new(FixedOracle(50.0)));
        for _ in 0..50 {
            let stats = assigner.assign(&marvel_character()).await;
            assert!((60..90).contains(&stats.power));
        }
    }

    #[tokio::test]
    async fn powerless_characters_draw_low_power() {
        let assigner = StatAssigner::new(Arc::new(FixedOracle(50.0)));
        for _ in 0..50 {
            let stats = assigner.assign(&obscure_powerless_character()).await;
            assert!((20..80).contains(&stats.power));
        }
    }

    #[tokio::test]
    async fn out_of_range_oracle_scores_clamp() {
        let assigner = StatAssigner::new(Arc::new(FixedOracle(140.0)));
        let stats = assigner.assign(&marvel_character()).await;
        assert_eq!(stats.difficulty, 100);

        let assigner = StatAssigner::new(Arc::new(FixedOracle(-3.0)));
        let stats = assigner.assign(&marvel_character()).await;
        assert_eq!(stats.difficulty, 0);
    }
}
