use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::models::Character;
use crate::shared::{AppError, AppState};

/// HTTP handler for listing the character roster
///
/// GET /api/characters
/// Returns every known character; the front end filters guess-sensitive fields
#[instrument(name = "list_characters", skip(state))]
pub async fn list_characters(
    State(state): State<AppState>,
) -> Result<Json<Vec<Character>>, AppError> {
    let characters = state.character_catalog.list_all().await;

    info!(character_count = characters.len(), "Characters listed");

    Ok(Json(characters))
}
