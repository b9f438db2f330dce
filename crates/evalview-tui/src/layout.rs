//! Screen layout definitions for the TUI
//!
//! The screen is a selector header, the review body and a one-row footer.
//! The body is split further by [`review`] depending on what the current
//! case has to show.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + selector row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Run and test case selectors
    pub header: Rect,
    /// Review panels or notice
    pub body: Rect,
    /// Key hints and status line
    pub footer: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Areas of the review body for one case
#[derive(Debug, Clone, Copy)]
pub struct ReviewAreas {
    /// Run details and model info
    pub info: Rect,
    pub preview: Rect,
    pub json: Rect,
    /// Side-by-side markdown, when the case has both texts
    pub markdown: Option<Rect>,
    /// Full diff disclosure: one row collapsed, a panel expanded
    pub full_diff: Option<Rect>,
}

/// Split the review body
///
/// # Arguments
/// * `info_lines` - Content rows of the info block (borders excluded)
/// * `preview_width` - Preview thumbnail width in columns (borders excluded)
pub fn review(
    area: Rect,
    info_lines: u16,
    preview_width: u16,
    has_markdown: bool,
    full_diff_expanded: bool,
) -> ReviewAreas {
    let info_height = info_lines + 2;

    let (info, main, markdown, full_diff) = if !has_markdown {
        let chunks =
            Layout::vertical([Constraint::Length(info_height), Constraint::Fill(1)]).split(area);
        (chunks[0], chunks[1], None, None)
    } else if full_diff_expanded {
        let chunks = Layout::vertical([
            Constraint::Length(info_height),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Fill(1),
        ])
        .split(area);
        (chunks[0], chunks[1], Some(chunks[2]), Some(chunks[3]))
    } else {
        let chunks = Layout::vertical([
            Constraint::Length(info_height),
            Constraint::Percentage(50),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);
        (chunks[0], chunks[1], Some(chunks[2]), Some(chunks[3]))
    };

    // Preview never takes more than half the row
    let preview_cols = (preview_width + 2).min(main.width / 2);
    let columns =
        Layout::horizontal([Constraint::Length(preview_cols), Constraint::Fill(1)]).split(main);

    ReviewAreas {
        info,
        preview: columns[0],
        json: columns[1],
        markdown,
        full_diff,
    }
}
