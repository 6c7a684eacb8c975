use serde::{Deserialize, Serialize};

/// A guessable character from the daily game roster.
///
/// The reward layer reads `universe` and `powers` when assigning card stats;
/// the image urls are passed through onto minted cards for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: String,
    pub universe: String,
    pub powers: Vec<String>,
    pub image_url: String,
    pub character_image_url: String,
}

impl Character {
    pub fn new(
        id: &str,
        name: &str,
        universe: &str,
        powers: &[&str],
        image_url: &str,
        character_image_url: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            universe: universe.to_string(),
            powers: powers.iter().map(|p| p.to_string()).collect(),
            image_url: image_url.to_string(),
            character_image_url: character_image_url.to_string(),
        }
    }
}
