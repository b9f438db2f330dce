//! Notice box for screens with nothing to review

use evalview_app::Notice;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::modal_overlay::centered_rect;
use crate::theme::styles;

pub struct NoticeBox<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeBox<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Widget for NoticeBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.notice.text();
        let (title, style) = if self.notice.is_error() {
            (" Error ", styles::status_red())
        } else {
            (" Notice ", styles::status_yellow())
        };

        let text_width = text.width() as u16;
        let width = text_width.saturating_add(6).min(area.width);
        let lines = text_width.div_ceil(width.saturating_sub(4).max(1)).max(1);
        let rect = centered_rect(width, lines + 2, area);

        let block = styles::glass_block(false)
            .title(title)
            .border_style(style);
        Paragraph::new(Line::styled(text.to_string(), style))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(rect, buf);
    }
}
