//! Selector header
//!
//! Shows the selected run and test case with their positions and the keys
//! that open the pickers.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// One selector: current label plus `(index, total)`
#[derive(Debug, Clone, Copy)]
struct Selection<'a> {
    label: &'a str,
    index: usize,
    total: usize,
}

/// Header with the run and test case selectors
#[derive(Default)]
pub struct SelectorHeader<'a> {
    run: Option<Selection<'a>>,
    case: Option<Selection<'a>>,
    loading: bool,
}

impl<'a> SelectorHeader<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_run(mut self, label: &'a str, index: usize, total: usize) -> Self {
        self.run = Some(Selection {
            label,
            index,
            total,
        });
        self
    }

    pub fn with_case(mut self, label: &'a str, index: usize, total: usize) -> Self {
        self.case = Some(Selection {
            label,
            index,
            total,
        });
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    fn selector_spans(
        name: &'static str,
        key: &'static str,
        selection: Option<Selection<'a>>,
    ) -> Vec<Span<'a>> {
        let mut spans = vec![
            Span::styled(name, styles::label()),
            Span::styled(" [", styles::text_muted()),
            Span::styled(key, styles::keybinding()),
            Span::styled("]: ", styles::text_muted()),
        ];
        match selection {
            Some(sel) => {
                spans.push(Span::styled(sel.label, styles::text_primary()));
                spans.push(Span::styled(
                    format!(" ({}/{})", sel.index + 1, sel.total),
                    styles::text_muted(),
                ));
            }
            None => spans.push(Span::styled("none", styles::text_muted())),
        }
        spans
    }
}

impl Widget for SelectorHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(" evalview ", styles::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        spans.extend(Self::selector_spans("Run", "r", self.run));
        spans.push(Span::styled("  │  ", styles::text_muted()));
        spans.extend(Self::selector_spans("Test Case", "c", self.case));
        let line = Line::from(spans);
        buf.set_line(inner.x, inner.y, &line, inner.width);

        if self.loading {
            let indicator = Line::styled("Loading… ", styles::status_yellow());
            let width = indicator.width() as u16;
            if inner.width > line.width() as u16 + width {
                buf.set_line(inner.x + inner.width - width, inner.y, &indicator, width);
            }
        }
    }
}
