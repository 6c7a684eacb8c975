pub mod mocks;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use mocks::{FailingDifficultyOracle, FixedDifficultyOracle, RecordingDifficultyOracle};
#[allow(unused_imports)]
pub use setup::{build_app, build_app_with_oracle, get_json, post_award, won_payload};
