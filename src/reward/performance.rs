use super::models::PerformanceInput;

/// Time penalty saturates once a guess takes this long
const TIME_PENALTY_CAP_SECONDS: f64 = 30.0;
const TIME_PENALTY_MAX_POINTS: f64 = 30.0;
const CLUE_PENALTY_POINTS: f64 = 10.0;
const WRONG_ATTEMPT_PENALTY_POINTS: f64 = 5.0;

/// Turns raw play telemetry into a performance score in [0, 100].
///
/// A loss scores exactly 0; a win starts at 100 and loses points for time
/// (linear up to 30s, capped at 30 points), clues (10 each) and wrong
/// attempts (5 each). Deterministic, no side effects.
pub fn calculate_performance_score(input: &PerformanceInput) -> f64 {
    if !input.is_won {
        return 0.0;
    }

    let time_penalty = input.guess_time_seconds.min(TIME_PENALTY_CAP_SECONDS)
        / TIME_PENALTY_CAP_SECONDS
        * TIME_PENALTY_MAX_POINTS;
    let clue_penalty = CLUE_PENALTY_POINTS * f64::from(input.clues_used);
    let wrong_penalty = WRONG_ATTEMPT_PENALTY_POINTS * f64::from(input.wrong_attempts);

    (100.0 - time_penalty - clue_penalty - wrong_penalty).clamp(0.0, 100.0)
}
