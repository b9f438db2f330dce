//! Footer with key hints and the transient status line

use evalview_app::state::{AppState, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.ui_mode {
            UiMode::RunPicker | UiMode::CasePicker => {
                &[("↑/↓", "move"), ("Enter", "select"), ("Esc", "cancel")]
            }
            UiMode::Review if self.state.detail.is_none() => &[("r", "run"), ("q", "quit")],
            UiMode::Review => &[
                ("r", "run"),
                ("c", "case"),
                ("1-5", "pane"),
                ("m", "markdown"),
                ("d", "full diff"),
                ("i", "details"),
                ("Tab", "focus"),
                ("o", "open"),
                ("q", "quit"),
            ],
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);

        if let Some(status) = &self.state.status_line {
            Paragraph::new(Line::styled(format!("{status} "), styles::status_yellow()))
                .alignment(Alignment::Right)
                .render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{default_review_state, TestTerminal};

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(160, 1);
        let area = term.area();
        term.render_widget(StatusBar::new(state), area);
        term
    }

    #[test]
    fn test_review_hints() {
        let term = render(&default_review_state());
        assert!(term.buffer_contains("r run"));
        assert!(term.buffer_contains("d full diff"));
        assert!(term.buffer_contains("q quit"));
    }

    #[test]
    fn test_picker_hints() {
        let mut state = default_review_state();
        state.ui_mode = UiMode::CasePicker;
        let term = render(&state);
        assert!(term.buffer_contains("Enter select"));
        assert!(!term.buffer_contains("full diff"));
    }

    #[test]
    fn test_status_line_shown() {
        let mut state = default_review_state();
        state.status_line = Some("Could not open browser".to_string());
        let term = render(&state);
        assert!(term.buffer_contains("Could not open browser"));
    }
}
