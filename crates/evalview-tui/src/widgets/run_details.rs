//! Run details disclosure
//!
//! Offered only when the run has a description or a creator; collapsed by
//! default and toggled with `i`.

use evalview_core::{title_case, RunDetail};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct RunDetailsSection<'a> {
    detail: &'a RunDetail,
    expanded: bool,
}

impl<'a> RunDetailsSection<'a> {
    pub fn new(detail: &'a RunDetail, expanded: bool) -> Self {
        Self { detail, expanded }
    }

    /// Rows this section needs; zero when the section is not offered
    pub fn height(&self) -> u16 {
        self.lines().len() as u16
    }

    fn lines(&self) -> Vec<Line<'a>> {
        if !self.detail.has_run_details() {
            return Vec::new();
        }

        let marker = if self.expanded { "▾" } else { "▸" };
        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{marker} Run Details "), styles::accent()),
            Span::styled("[i]", styles::keybinding()),
        ])];
        if !self.expanded {
            return lines;
        }

        let d = self.detail;
        lines.push(field("Status", title_case(&d.status)));
        if let Some(run_by) = d.run_by.as_deref().filter(|s| !s.is_empty()) {
            lines.push(field("Run By", run_by.to_string()));
        }
        lines.push(field("Created", d.created_at.clone()));
        if let Some(completed) = d.completed_at.as_deref().filter(|s| !s.is_empty()) {
            lines.push(field("Completed", completed.to_string()));
        }
        if let Some(description) = d.description.as_deref().filter(|s| !s.is_empty()) {
            lines.push(field("Description", description.to_string()));
        }
        lines
    }
}

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label}: "), styles::label()),
        Span::styled(value, styles::text_primary()),
    ])
}

impl Widget for RunDetailsSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}
