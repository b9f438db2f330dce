//! JSON diff panel
//!
//! Shows the recorded error for a failed case, otherwise the diff stats,
//! a tab bar over the five JSON panes and the selected pane's content.
//! Every pane reads from the already fetched record.

use evalview_app::config::JsonPane;
use evalview_app::ScrollState;
use evalview_core::TestCaseResult;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use serde_json::Value;

use super::diff_stats::DiffStatsBar;
use super::scroll_view::render_rows;
use crate::line_cache::JsonRows;
use crate::text_wrap::{text_lines, wrap_lines};
use crate::theme::{palette, styles};

/// Content of one pane, or the notice shown when its field is missing
pub fn pane_content(result: &TestCaseResult, pane: JsonPane) -> Result<String, &'static str> {
    match pane {
        JsonPane::SummaryDiff => pretty_or(result.json_diff.as_ref(), "Summary diff not available"),
        JsonPane::FullDiff => pretty_or(result.full_json_diff.as_ref(), "Full diff not available"),
        JsonPane::GroundTruth => pretty_or(result.true_json.as_ref(), "Ground truth not available"),
        JsonPane::Predicted => {
            pretty_or(result.predicted_json.as_ref(), "Predicted JSON not available")
        }
        JsonPane::Schema => Ok(pretty(&result.schema_or_empty())),
    }
}

fn pretty_or(value: Option<&Value>, missing: &'static str) -> Result<String, &'static str> {
    value.map(pretty).ok_or(missing)
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Whether the panel has anything to show for this case
pub fn has_content(result: &TestCaseResult) -> bool {
    result.error_message().is_some() || result.has_any_diff()
}

pub struct JsonDiffPanel<'a> {
    result: &'a TestCaseResult,
    pane: JsonPane,
    focused: bool,
    cache: Option<(u64, &'a mut JsonRows)>,
}

impl<'a> JsonDiffPanel<'a> {
    pub fn new(result: &'a TestCaseResult, pane: JsonPane) -> Self {
        Self {
            result,
            pane,
            focused: false,
            cache: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Reuse rows built for the same record `revision`
    pub fn cached(mut self, revision: u64, cache: &'a mut JsonRows) -> Self {
        self.cache = Some((revision, cache));
        self
    }
}

fn tab_bar(selected: JsonPane) -> Line<'static> {
    let mut spans = Vec::new();
    for pane in JsonPane::ALL {
        let style = if pane == selected {
            styles::accent_bold().add_modifier(Modifier::REVERSED)
        } else {
            styles::text_secondary()
        };
        spans.push(Span::styled(
            format!(" [{}] {} ", pane.index() + 1, pane.label()),
            style,
        ));
    }
    Line::from(spans)
}

/// Scrollable body: the error alone for a failed case, else the pane's JSON
fn body_lines(result: &TestCaseResult, pane: JsonPane) -> Vec<Line<'static>> {
    if let Some(error) = result.error_message() {
        let mut lines = vec![
            Line::styled("Error Message", styles::status_red().add_modifier(Modifier::BOLD)),
            Line::default(),
        ];
        lines.extend(text_lines(error, styles::text_primary()));
        return lines;
    }

    match pane_content(result, pane) {
        Ok(json) => text_lines(&json, Style::default().fg(palette::JSON_TEXT)),
        Err(notice) => vec![Line::styled(notice, styles::text_muted())],
    }
}

impl StatefulWidget for JsonDiffPanel<'_> {
    type State = ScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ScrollState) {
        let Self {
            result,
            pane,
            focused,
            cache,
        } = self;

        if !has_content(result) {
            state.update_content_size(0, 0);
            return;
        }

        let block = styles::glass_block(focused).title(" JSON Diff ");
        let inner = block.inner(area);
        block.render(area, buf);

        let body_area = if result.error_message().is_some() {
            inner
        } else {
            let [stats_area, tabs_area, content_area] = Layout::vertical([
                Constraint::Length(DiffStatsBar::HEIGHT),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(inner);

            DiffStatsBar::new(result).render(stats_area, buf);
            Paragraph::new(tab_bar(pane)).render(tabs_area, buf);
            content_area
        };

        let mut scratch = JsonRows::default();
        let (revision, cache) = match cache {
            Some((revision, cache)) => (revision, cache),
            None => (0, &mut scratch),
        };
        let width = body_area.width;
        let rows = cache.get_or_build((revision, pane, width), || {
            wrap_lines(&body_lines(result, pane), width as usize)
        });
        render_rows(rows, body_area, buf, state);
    }
}
