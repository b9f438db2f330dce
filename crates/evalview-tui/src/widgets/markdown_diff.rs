//! Markdown comparison panels
//!
//! [`MarkdownPanel`] puts ground truth and prediction side by side in the
//! current view mode. [`FullDiffPanel`] is the disclosure underneath it
//! holding the line diff of the two raw texts.

use evalview_app::config::MarkdownView;
use evalview_app::ScrollState;
use evalview_core::{normalize_markdown, DiffLine, DiffRow, RowKind, SideBySideDiff};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::line_cache::{Columns, DiffTableRows, MarkdownRows};
use crate::markdown_render::render_markdown;
use crate::text_wrap::{text_lines, wrap_line, wrap_lines};
use crate::theme::styles;

/// Line number column: four digits and a space
const GUTTER_WIDTH: usize = 5;

/// Lines for one side of the comparison in the given mode
///
/// Raw shows the stored text untouched; only the rendered view is
/// normalized first.
pub fn markdown_lines(text: &str, view: MarkdownView) -> Vec<Line<'static>> {
    match view {
        MarkdownView::Raw => text_lines(text, styles::text_primary()),
        MarkdownView::Rendered => render_markdown(&normalize_markdown(text)),
    }
}

fn column_header(title: &'static str) -> Line<'static> {
    Line::styled(title, styles::label().add_modifier(Modifier::UNDERLINED))
}

/// Split an area into two columns with a one-cell divider
fn two_columns(area: Rect) -> (Rect, Rect, Rect) {
    let [left, divider, right] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    (left, divider, right)
}

fn draw_divider(area: Rect, buf: &mut Buffer) {
    for y in area.top()..area.bottom() {
        if let Some(cell) = buf.cell_mut((area.x, y)) {
            cell.set_symbol("│").set_style(styles::border_inactive());
        }
    }
}

fn visible(rows: &[Line<'static>], state: &ScrollState, height: usize) -> Vec<Line<'static>> {
    rows.iter().skip(state.offset).take(height).cloned().collect()
}

pub struct MarkdownPanel<'a> {
    truth: &'a str,
    predicted: &'a str,
    view: MarkdownView,
    focused: bool,
    cache: Option<(u64, &'a mut MarkdownRows)>,
}

impl<'a> MarkdownPanel<'a> {
    pub fn new(truth: &'a str, predicted: &'a str, view: MarkdownView) -> Self {
        Self {
            truth,
            predicted,
            view,
            focused: false,
            cache: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Reuse rows built for the same record `revision`
    pub fn cached(mut self, revision: u64, cache: &'a mut MarkdownRows) -> Self {
        self.cache = Some((revision, cache));
        self
    }
}

impl StatefulWidget for MarkdownPanel<'_> {
    type State = ScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ScrollState) {
        let Self {
            truth,
            predicted,
            view,
            focused,
            cache,
        } = self;

        let title = Line::from(vec![
            Span::styled(format!(" {} ", view.label()), styles::accent_bold()),
            Span::styled("[m] ", styles::keybinding()),
        ]);
        let block = styles::glass_block(focused).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let [header_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);
        let (left_header, _, right_header) = two_columns(header_area);
        Paragraph::new(column_header("Ground Truth")).render(left_header, buf);
        Paragraph::new(column_header("Predicted")).render(right_header, buf);

        let (left, divider, right) = two_columns(body_area);
        draw_divider(divider, buf);

        let mut scratch = MarkdownRows::default();
        let (revision, cache) = match cache {
            Some((revision, cache)) => (revision, cache),
            None => (0, &mut scratch),
        };
        let (left_rows, right_rows) =
            cache.get_or_build((revision, view, left.width, right.width), || {
                (
                    wrap_lines(&markdown_lines(truth, view), left.width as usize),
                    wrap_lines(&markdown_lines(predicted, view), right.width as usize),
                )
            });

        // Both columns share one scroll offset
        let height = body_area.height as usize;
        state.update_content_size(left_rows.len().max(right_rows.len()), height);

        Paragraph::new(visible(left_rows, state, height)).render(left, buf);
        Paragraph::new(visible(right_rows, state, height)).render(right, buf);
    }
}

pub struct FullDiffPanel<'a> {
    diff: Option<&'a SideBySideDiff>,
    expanded: bool,
    focused: bool,
    cache: Option<(u64, &'a mut DiffTableRows)>,
}

impl<'a> FullDiffPanel<'a> {
    pub fn new(diff: Option<&'a SideBySideDiff>, expanded: bool) -> Self {
        Self {
            diff,
            expanded,
            focused: false,
            cache: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Reuse the table laid out for the same record `revision`
    pub fn cached(mut self, revision: u64, cache: &'a mut DiffTableRows) -> Self {
        self.cache = Some((revision, cache));
        self
    }

    fn disclosure(&self) -> Line<'static> {
        let marker = if self.expanded { "▾" } else { "▸" };
        Line::from(vec![
            Span::styled(format!("{marker} View Full Diff "), styles::accent()),
            Span::styled("[d]", styles::keybinding()),
        ])
    }
}

/// Display rows for one side of a diff row, wrapped under a line-number gutter
fn side_rows(
    line: Option<&DiffLine>,
    kind: RowKind,
    left: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let base = styles::diff_line(kind, left);
    let content_width = width.saturating_sub(GUTTER_WIDTH).max(1);

    let (number, body) = match line {
        Some(l) => {
            let spans: Vec<Span<'static>> = l
                .segments
                .iter()
                .map(|s| {
                    let style = if s.emphasized {
                        styles::diff_emphasis(left)
                    } else {
                        base
                    };
                    Span::styled(s.text.clone(), style)
                })
                .collect();
            (format!("{:>4} ", l.number), Line::from(spans))
        }
        None => (" ".repeat(GUTTER_WIDTH), Line::default()),
    };

    wrap_line(&body, content_width)
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let gutter = if i == 0 {
                number.clone()
            } else {
                " ".repeat(GUTTER_WIDTH)
            };
            let mut spans = vec![Span::styled(gutter, styles::diff_gutter())];
            spans.extend(row.spans);
            Line::from(spans).style(base)
        })
        .collect()
}

/// Lay out every diff row as aligned left/right display rows
fn table_rows(rows: &[DiffRow], left_width: usize, right_width: usize) -> Columns {
    let mut left_out = Vec::new();
    let mut right_out = Vec::new();

    for row in rows {
        let mut left = side_rows(row.left.as_ref(), row.kind, true, left_width);
        let mut right = side_rows(row.right.as_ref(), row.kind, false, right_width);
        let height = left.len().max(right.len());
        left.resize(height, Line::default().style(styles::diff_line(row.kind, true)));
        right.resize(height, Line::default().style(styles::diff_line(row.kind, false)));
        left_out.extend(left);
        right_out.extend(right);
    }
    (left_out, right_out)
}

impl StatefulWidget for FullDiffPanel<'_> {
    type State = ScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ScrollState) {
        if !self.expanded {
            state.update_content_size(0, 0);
            Paragraph::new(self.disclosure()).render(area, buf);
            return;
        }

        let block = styles::glass_block(self.focused).title(self.disclosure());
        let inner = block.inner(area);
        block.render(area, buf);

        let diff = match self.diff {
            Some(diff) if !diff.is_identical() => diff,
            _ => {
                state.update_content_size(0, 0);
                Paragraph::new(Line::styled("No differences", styles::text_muted()))
                    .render(inner, buf);
                return;
            }
        };

        let [header_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);
        let (left_header, _, right_header) = two_columns(header_area);
        Paragraph::new(column_header("True Markdown")).render(left_header, buf);
        Paragraph::new(column_header("Predicted Markdown")).render(right_header, buf);

        let (left, divider, right) = two_columns(body_area);
        draw_divider(divider, buf);

        let mut scratch = DiffTableRows::default();
        let (revision, cache) = match self.cache {
            Some((revision, cache)) => (revision, cache),
            None => (0, &mut scratch),
        };
        let (left_rows, right_rows) = cache.get_or_build((revision, left.width, right.width), || {
            table_rows(&diff.rows, left.width as usize, right.width as usize)
        });
        let height = body_area.height as usize;
        state.update_content_size(left_rows.len(), height);

        Paragraph::new(visible(left_rows, state, height)).render(left, buf);
        Paragraph::new(visible(right_rows, state, height)).render(right, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render_markdown_panel(truth: &str, predicted: &str, view: MarkdownView) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, 12);
        let mut scroll = ScrollState::new();
        let area = term.area();
        term.render_stateful_widget(MarkdownPanel::new(truth, predicted, view), area, &mut scroll);
        term
    }

    #[test]
    fn test_raw_view_shows_stored_text() {
        let term = render_markdown_panel("# Invoice\\nTotal", "\"Quoted\"", MarkdownView::Raw);
        assert!(term.buffer_contains("Raw Markdown [m]"));
        assert!(term.buffer_contains("Ground Truth"));
        assert!(term.buffer_contains("# Invoice\\nTotal"));
        assert!(term.buffer_contains("\"Quoted\""));
    }

    #[test]
    fn test_rendered_view_normalizes() {
        let term =
            render_markdown_panel("# Invoice\\nTotal", "\"Quoted\"", MarkdownView::Rendered);
        assert!(term.buffer_contains("Rendered Markdown [m]"));
        assert!(!term.buffer_contains("# Invoice"));
        assert!(term.buffer_contains("Invoice"));
        assert!(term.buffer_contains("Quoted"));
        assert!(!term.buffer_contains("\"Quoted\""));
    }

    #[test]
    fn test_markdown_parsed_once_per_mode_and_width() {
        let mut cache = MarkdownRows::default();
        let mut scroll = ScrollState::new();
        let mut term = TestTerminal::with_size(80, 12);
        let area = term.area();
        let mut draw = |term: &mut TestTerminal, view, cache: &mut MarkdownRows| {
            term.render_stateful_widget(
                MarkdownPanel::new("# A", "# B", view).cached(3, cache),
                area,
                &mut scroll,
            );
        };

        draw(&mut term, MarkdownView::Rendered, &mut cache);
        draw(&mut term, MarkdownView::Rendered, &mut cache);
        assert_eq!(cache.builds(), 1);

        draw(&mut term, MarkdownView::Raw, &mut cache);
        assert_eq!(cache.builds(), 2);
        assert!(term.buffer_contains("# A"));
    }

    #[test]
    fn test_markdown_scroll_uses_longer_side() {
        let truth = (0..30).map(|i| format!("t{i}")).collect::<Vec<_>>().join("\n");
        let mut scroll = ScrollState::new();
        let mut term = TestTerminal::with_size(80, 12);
        let area = term.area();
        term.render_stateful_widget(
            MarkdownPanel::new(&truth, "short", MarkdownView::Raw),
            area,
            &mut scroll,
        );
        assert_eq!(scroll.total_lines, 30);
        // borders and column header leave 9 rows
        assert_eq!(scroll.visible_lines, 9);
    }

    #[test]
    fn test_collapsed_disclosure() {
        let mut term = TestTerminal::with_size(80, 1);
        let mut scroll = ScrollState::new();
        let area = term.area();
        term.render_stateful_widget(FullDiffPanel::new(None, false), area, &mut scroll);
        assert!(term.buffer_contains("▸ View Full Diff [d]"));
    }

    #[test]
    fn test_expanded_diff_table() {
        let diff = SideBySideDiff::compute("a\nsame\nb", "a\nsame\nc\nextra");
        let mut term = TestTerminal::with_size(80, 12);
        let mut scroll = ScrollState::new();
        let area = term.area();
        term.render_stateful_widget(FullDiffPanel::new(Some(&diff), true), area, &mut scroll);

        assert!(term.buffer_contains("▾ View Full Diff [d]"));
        assert!(term.buffer_contains("True Markdown"));
        assert!(term.buffer_contains("Predicted Markdown"));
        assert!(term.buffer_contains("   2 same"));
        assert!(term.buffer_contains("   4 extra"));
        assert_eq!(scroll.total_lines, diff.rows.len());
    }

    #[test]
    fn test_identical_texts() {
        let diff = SideBySideDiff::compute("same", "same");
        let mut term = TestTerminal::with_size(80, 6);
        let mut scroll = ScrollState::new();
        let area = term.area();
        term.render_stateful_widget(FullDiffPanel::new(Some(&diff), true), area, &mut scroll);
        assert!(term.buffer_contains("No differences"));
    }

    #[test]
    fn test_long_lines_wrap_under_gutter() {
        let rows = side_rows(
            Some(&DiffLine {
                number: 7,
                segments: vec![evalview_core::Segment {
                    text: "abcdefghij".to_string(),
                    emphasized: false,
                }],
            }),
            RowKind::Deleted,
            true,
            GUTTER_WIDTH + 4,
        );
        let text: Vec<String> = rows.iter().map(|l| l.to_string()).collect();
        assert_eq!(text, vec!["   7 abcd", "     efgh", "     ij"]);
    }
}
