//! Diff stats bar
//!
//! Counters above the JSON panes. Accuracy is shown as stored.

use evalview_core::TestCaseResult;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct DiffStatsBar<'a> {
    result: &'a TestCaseResult,
}

impl<'a> DiffStatsBar<'a> {
    /// Rows the bar occupies
    pub const HEIGHT: u16 = 2;

    pub fn new(result: &'a TestCaseResult) -> Self {
        Self { result }
    }

    /// Diff counters on the first row, field count and accuracy on the second
    fn lines(&self) -> Vec<Line<'static>> {
        let stats = self.result.json_diff_stats.unwrap_or_default();
        vec![
            metric_line(vec![
                ("Additions", stats.additions.to_string(), styles::status_green()),
                ("Missing", stats.deletions.to_string(), styles::status_red()),
                (
                    "Modifications",
                    stats.modifications.to_string(),
                    styles::status_yellow(),
                ),
                ("Total Changes", stats.total.to_string(), styles::accent_bold()),
            ]),
            metric_line(vec![
                (
                    "Total Fields",
                    self.result.total_fields().to_string(),
                    styles::text_primary(),
                ),
                (
                    "Accuracy",
                    self.result.accuracy().to_string(),
                    styles::status_blue(),
                ),
            ]),
        ]
    }
}

fn metric_line(metrics: Vec<(&'static str, String, Style)>) -> Line<'static> {
    let mut spans = Vec::with_capacity(metrics.len() * 3);
    for (i, (label, value, style)) in metrics.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", styles::text_muted()));
        }
        spans.push(Span::styled(format!("{label}: "), styles::label()));
        spans.push(Span::styled(value, style));
    }
    Line::from(spans)
}

impl Widget for DiffStatsBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}
