use crate::types::Profile;
use serde::{Deserialize, Serialize};

/// User whose profile a card shows unless told otherwise.
pub const DEFAULT_USERNAME: &str = "zCastleM";

/// Presentation settings supplied by whoever hosts the card
#[derive(Debug, Clone, PartialEq)]
pub struct CardConfig {
    pub title: String,
    pub description: String,
    pub background_color: String,
    pub text_color: String,
    /// Only read at mount; changing it later does not trigger a new fetch.
    pub username: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            title: "GitHub User Profile".to_string(),
            description: "Displaying data from the GitHub API".to_string(),
            background_color: "#f0f0f0".to_string(),
            text_color: "#333333".to_string(),
            username: DEFAULT_USERNAME.to_string(),
        }
    }
}

/// What a card currently shows.
///
/// A card starts in `Loading` and moves exactly once to `Loaded` or `Failed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DisplayState {
    Loading,
    Loaded { profile: Profile },
    Failed { message: String },
}

impl DisplayState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DisplayState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }
}
