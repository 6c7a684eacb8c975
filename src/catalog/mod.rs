// Public API - what other modules can use
pub use handlers::list_characters;
pub use models::Character;
pub use repository::{default_roster, CharacterCatalog, StaticCharacterCatalog};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
