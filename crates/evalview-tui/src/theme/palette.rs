//! Color palette for the review screen.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

// --- Line diff ---
pub const DIFF_INSERT_BG: Color = Color::Rgb(18, 52, 32);
pub const DIFF_DELETE_BG: Color = Color::Rgb(64, 22, 28);
pub const DIFF_INSERT_EMPHASIS_BG: Color = Color::Rgb(30, 100, 55);
pub const DIFF_DELETE_EMPHASIS_BG: Color = Color::Rgb(120, 35, 45);
pub const DIFF_GUTTER: Color = Color::DarkGray;

// --- Markdown ---
pub const MD_HEADING: Color = Color::Cyan;
pub const MD_CODE: Color = Color::Yellow;
pub const MD_CODE_BG: Color = Color::Rgb(30, 30, 40);
pub const MD_BULLET: Color = Color::DarkGray;
pub const MD_LINK: Color = Color::Blue;

// --- JSON ---
pub const JSON_TEXT: Color = Color::Gray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_backgrounds_are_rgb() {
        for color in [
            DIFF_INSERT_BG,
            DIFF_DELETE_BG,
            DIFF_INSERT_EMPHASIS_BG,
            DIFF_DELETE_EMPHASIS_BG,
        ] {
            assert!(matches!(color, Color::Rgb(_, _, _)));
        }
    }
}
