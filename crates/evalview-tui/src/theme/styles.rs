//! Semantic style builders for the review screen.

use evalview_core::RowKind;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

/// Field label in `Label: value` rows
pub fn label() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_green() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn status_yellow() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn status_blue() -> Style {
    Style::default().fg(palette::STATUS_BLUE)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for the picker cursor and the active pane tab
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn link() -> Style {
    Style::default()
        .fg(palette::MD_LINK)
        .add_modifier(Modifier::UNDERLINED)
}

// --- Diff rows ---

/// Background of a side of a diff row
///
/// `left` is the ground truth column.
pub fn diff_line(kind: RowKind, left: bool) -> Style {
    match (kind, left) {
        (RowKind::Equal, _) => text_primary(),
        (RowKind::Deleted, true) | (RowKind::Changed, true) => {
            text_primary().bg(palette::DIFF_DELETE_BG)
        }
        (RowKind::Inserted, false) | (RowKind::Changed, false) => {
            text_primary().bg(palette::DIFF_INSERT_BG)
        }
        _ => text_muted(),
    }
}

/// Intraline emphasis for the changed part of a line
pub fn diff_emphasis(left: bool) -> Style {
    let bg = if left {
        palette::DIFF_DELETE_EMPHASIS_BG
    } else {
        palette::DIFF_INSERT_EMPHASIS_BG
    };
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

pub fn diff_gutter() -> Style {
    Style::default().fg(palette::DIFF_GUTTER)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glass_block_focus_changes_border() {
        // Block doesn't expose its border style, so compare debug output
        let focused = format!("{:?}", glass_block(true));
        let unfocused = format!("{:?}", glass_block(false));
        assert_ne!(focused, unfocused);
    }

    #[test]
    fn test_diff_line_colors_by_side() {
        assert_eq!(
            diff_line(RowKind::Deleted, true).bg,
            Some(palette::DIFF_DELETE_BG)
        );
        assert_eq!(
            diff_line(RowKind::Inserted, false).bg,
            Some(palette::DIFF_INSERT_BG)
        );
        assert_eq!(diff_line(RowKind::Changed, true).bg, Some(palette::DIFF_DELETE_BG));
        assert_eq!(diff_line(RowKind::Equal, true).bg, None);
        // The empty side of an insertion is muted, not highlighted
        assert_eq!(diff_line(RowKind::Inserted, true).bg, None);
    }
}
