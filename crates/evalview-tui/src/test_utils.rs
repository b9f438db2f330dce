//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's TestBackend so widget and full-screen tests can assert
//! on rendered text without a real terminal.

use evalview_app::state::{AppState, RunEntry};
use evalview_catalog::test_utils::{test_entry, test_run};
use evalview_core::{reviewable_cases, ResultListing, RunDetail, TestCaseResult};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};
use ratatui::Frame;
use ratatui::Terminal;
use serde_json::Value;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 120;
pub const TEST_HEIGHT: u16 = 40;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (120x40)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    pub fn render_stateful_widget<W, S>(&mut self, widget: W, area: Rect, state: &mut S)
    where
        W: StatefulWidget<State = S>,
    {
        self.terminal
            .draw(|frame| frame.render_stateful_widget(widget, area, state))
            .expect("Failed to render stateful widget");
    }

    /// Draw a full frame, e.g. with `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere on one row
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert buffer to string representation, one line per row
fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, y)].symbol());
        }
        result.push('\n');
    }
    result
}

/// A run detail built from a raw listing entry
pub fn detail_from(entry: Value) -> RunDetail {
    RunDetail::from_run(
        &test_run("2024-12-03T14-05-22-123Z"),
        TestCaseResult::from_value(entry).expect("valid test entry"),
    )
}

/// An AppState with one run, one reviewable case and its detail loaded
pub fn review_state(entry: Value) -> AppState {
    let mut state = AppState::new();
    state.runs = vec![RunEntry {
        run: test_run("2024-12-03T14-05-22-123Z"),
        label: "2024-12-03 14:05:22".to_string(),
    }];
    state.selected_run = Some(0);
    state.cases = reviewable_cases(&ResultListing {
        results: vec![entry.clone()],
    });
    state.selected_case = Some(0);
    state.detail = Some(detail_from(entry));
    state.preview = Some(evalview_app::PreviewContent::Unavailable);
    state
}

/// [`review_state`] for a standard full entry
pub fn default_review_state() -> AppState {
    review_state(test_entry("invoice-001", 1))
}
