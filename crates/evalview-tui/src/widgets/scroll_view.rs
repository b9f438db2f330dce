//! Scrolled rendering of pre-wrapped rows
//!
//! Shared by the scrollable panels: the scroll state learns the row count
//! and only the visible slice is drawn.

use evalview_app::ScrollState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget},
};

/// Draw the rows of `rows` visible at the current offset
pub fn render_rows(rows: &[Line<'static>], area: Rect, buf: &mut Buffer, state: &mut ScrollState) {
    let visible = area.height as usize;
    state.update_content_size(rows.len(), visible);

    let shown: Vec<Line> = rows
        .iter()
        .skip(state.offset)
        .take(visible)
        .cloned()
        .collect();
    Paragraph::new(shown).render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn numbered(n: usize) -> Vec<Line<'static>> {
        (0..n).map(|i| Line::from(format!("line {i}"))).collect()
    }

    #[test]
    fn test_reports_row_count() {
        let mut state = ScrollState::new();
        let rows = numbered(3);
        let area = Rect::new(0, 0, 5, 10);
        let mut term = TestTerminal::with_size(5, 10);
        term.draw_with(|f| render_rows(&rows, area, f.buffer_mut(), &mut state));

        assert_eq!(state.total_lines, 3);
        assert_eq!(state.visible_lines, 10);
    }

    #[test]
    fn test_draws_from_offset() {
        let mut state = ScrollState::new();
        let rows = numbered(20);
        let area = Rect::new(0, 0, 20, 5);
        let mut term = TestTerminal::with_size(20, 5);

        term.draw_with(|f| render_rows(&rows, area, f.buffer_mut(), &mut state));
        state.scroll_down(7);
        term.draw_with(|f| render_rows(&rows, area, f.buffer_mut(), &mut state));

        assert!(term.buffer_contains("line 7"));
        assert!(term.buffer_contains("line 11"));
        assert!(!term.buffer_contains("line 6 "));
        assert!(!term.buffer_contains("line 12"));
    }
}
