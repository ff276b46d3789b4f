//! JSON world format
//!
//! A world is stored as nested objects keyed by decimal column, then decimal
//! row, with each tile holding optional `block`, `liquid` and `interactable`
//! indices:
//!
//! ```json
//! { "3": { "1": { "block": 2 }, "2": { "liquid": 0 } } }
//! ```

use crate::WorldGrid;

#[derive(Debug, Clone, PartialEq)]
pub enum WorldDataError {
    /// Input was not valid JSON or did not have the nested map shape
    Parse(String),
    /// The grid could not be encoded
    Serialize(String),
}

impl std::fmt::Display for WorldDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorldDataError::Parse(e) => write!(f, "Parse error: {}", e),
            WorldDataError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for WorldDataError {}

impl WorldGrid {
    /// Parse a world from its JSON representation
    pub fn from_json_str(json: &str) -> Result<Self, WorldDataError> {
        serde_json::from_str(json).map_err(|e| WorldDataError::Parse(e.to_string()))
    }

    /// Encode the world as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String, WorldDataError> {
        serde_json::to_string_pretty(self).map_err(|e| WorldDataError::Serialize(e.to_string()))
    }
}
