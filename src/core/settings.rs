use board_engine::constants::EMPTY_GLYPH;
use board_engine::Variant;
use serde::{Deserialize, Serialize};

/// User preferences persisted between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Game started without showing the menu
    pub default_variant: Option<Variant>,

    /// Glyph printed for empty cells
    pub empty_marker: char,

    /// Whether the status line carries the move number (chess variants only)
    pub show_move_number: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            default_variant: None,
            empty_marker: EMPTY_GLYPH,
            show_move_number: true,
        }
    }
}
