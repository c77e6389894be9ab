//! Values coming from the page (pad `data-color`, settings selects)

use game_core::{Color, Difficulty, Mode};

/// Pad color from a pad element's `data-color`
pub fn pad_color(value: &str) -> Option<Color> {
    value.parse().ok()
}

pub fn mode_from_select(value: &str) -> Option<Mode> {
    Mode::ALL.into_iter().find(|m| m.as_str() == value)
}

pub fn difficulty_from_select(value: &str) -> Option<Difficulty> {
    Difficulty::ALL.into_iter().find(|d| d.as_str() == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_color() {
        assert_eq!(pad_color("yellow"), Some(Color::Yellow));
        assert_eq!(pad_color(""), None);
    }

    #[test]
    fn test_select_values() {
        assert_eq!(mode_from_select("speed"), Some(Mode::Speed));
        assert_eq!(mode_from_select("frenzy"), None);
        assert_eq!(difficulty_from_select("hard"), Some(Difficulty::Hard));
        assert_eq!(difficulty_from_select("Hard"), None);
    }
}
