use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::catalog::CharacterCatalog;
use crate::reward::RewardService;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub reward_service: Arc<RewardService>,
    pub character_catalog: Arc<dyn CharacterCatalog>,
}

impl AppState {
    pub fn new(
        reward_service: Arc<RewardService>,
        character_catalog: Arc<dyn CharacterCatalog>,
    ) -> Self {
        Self {
            reward_service,
            character_catalog,
        }
    }
}

/// Externally visible failure kinds. Every response body keeps the
/// `{success: false, error}` shape; internal errors never leak details.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "success": false,
            "error": error_message
        }));

        (status, body).into_response()
    }
}
