//! Selector popup for runs and test cases
//!
//! Entries are addressed by index; labels may repeat.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::modal_overlay::{centered_rect_percent, dim_background};
use crate::theme::styles;

pub struct Picker<'a> {
    title: &'a str,
    labels: Vec<&'a str>,
    /// Entry currently in use
    selected: Option<usize>,
    cursor: usize,
}

impl<'a> Picker<'a> {
    pub fn new(title: &'a str, labels: Vec<&'a str>) -> Self {
        Self {
            title,
            labels,
            selected: None,
            cursor: 0,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// First visible entry so the cursor stays on screen
    fn scroll_offset(&self, height: usize) -> usize {
        if height == 0 {
            return 0;
        }
        self.cursor.saturating_sub(height - 1)
    }
}

impl Widget for Picker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);
        let popup = centered_rect_percent(70, 60, area);
        Clear.render(popup, buf);

        let title = format!(" {} ", self.title);
        let block = styles::modal_block(&title).title_bottom(Line::from(vec![
            Span::styled(" ↑/↓ ", styles::keybinding()),
            Span::styled("move  ", styles::text_secondary()),
            Span::styled("Enter ", styles::keybinding()),
            Span::styled("select  ", styles::text_secondary()),
            Span::styled("Esc ", styles::keybinding()),
            Span::styled("cancel ", styles::text_secondary()),
        ]));
        let inner = block.inner(popup);
        block.render(popup, buf);

        if self.labels.is_empty() {
            Paragraph::new(Line::styled("Nothing to select", styles::text_muted()))
                .render(inner, buf);
            return;
        }

        let height = inner.height as usize;
        let offset = self.scroll_offset(height);
        let lines: Vec<Line> = self
            .labels
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(i, label)| {
                let marker = if Some(i) == self.selected { "▶ " } else { "  " };
                let style = if i == self.cursor {
                    styles::focused_selected()
                } else {
                    styles::text_primary()
                };
                Line::from(Span::styled(format!("{marker}{label}"), style)).style(style)
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}
