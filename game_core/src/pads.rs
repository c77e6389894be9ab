use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four pads the player can press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Red,
    Yellow,
    Blue,
}

/// Pads in board order (top-left, top-right, bottom-left, bottom-right)
pub const DEFAULT_COLOR_SET: [Color; 4] = [Color::Green, Color::Red, Color::Yellow, Color::Blue];

impl Color {
    /// Stable lowercase id, matches the pad's `data-color` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no pad
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pad color: {0:?}")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(Color::Green),
            "red" => Ok(Color::Red),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            other => Err(UnknownColor(other.to_string())),
        }
    }
}
