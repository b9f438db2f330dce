//! File preview panel
//!
//! Decoded images are drawn two pixels per cell with the upper half block:
//! foreground is the top pixel, background the bottom one.

use evalview_app::{PreviewContent, PreviewImage};
use evalview_core::truncate_url;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

const UPPER_HALF_BLOCK: &str = "▀";

pub struct FilePreview<'a> {
    /// `None` while the case is still being fetched
    content: Option<&'a PreviewContent>,
}

impl<'a> FilePreview<'a> {
    pub fn new(content: Option<&'a PreviewContent>) -> Self {
        Self { content }
    }

    fn message_lines(&self) -> Vec<Line<'static>> {
        match self.content {
            None => vec![Line::styled("Loading…", styles::text_muted())],
            Some(PreviewContent::Unavailable) => {
                vec![Line::styled("No file preview available", styles::text_muted())]
            }
            Some(PreviewContent::Remote { url }) => vec![
                Line::styled(truncate_url(url).text, styles::link()),
                Line::default(),
                Line::from(vec![
                    Span::styled("Press ", styles::text_secondary()),
                    Span::styled("[o]", styles::keybinding()),
                    Span::styled(" to open in browser", styles::text_secondary()),
                ]),
            ],
            Some(PreviewContent::Failed { error }) => vec![Line::styled(
                format!("Preview unavailable: {error}"),
                styles::status_yellow(),
            )],
            Some(PreviewContent::Image { .. }) => Vec::new(),
        }
    }
}

impl Widget for FilePreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" File Preview ");
        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(PreviewContent::Image { caption, image }) = self.content {
            let [caption_area, image_area] =
                Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);
            Paragraph::new(Line::styled(caption.clone(), styles::text_secondary()))
                .render(caption_area, buf);
            draw_image(image, image_area, buf);
            return;
        }

        Paragraph::new(self.message_lines())
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

fn rgb(pixel: [u8; 3]) -> Color {
    Color::Rgb(pixel[0], pixel[1], pixel[2])
}

/// Draw as much of the image as fits, anchored top-left
fn draw_image(image: &PreviewImage, area: Rect, buf: &mut Buffer) {
    let cols = (image.width).min(area.width as u32);
    let rows = image.rows().min(area.height as u32);

    for row in 0..rows {
        for col in 0..cols {
            let Some(top) = image.pixel(col, row * 2) else {
                continue;
            };
            let mut style = Style::default().fg(rgb(top));
            if let Some(bottom) = image.pixel(col, row * 2 + 1) {
                style = style.bg(rgb(bottom));
            }
            if let Some(cell) = buf.cell_mut((area.x + col as u16, area.y + row as u16)) {
                cell.set_symbol(UPPER_HALF_BLOCK).set_style(style);
            }
        }
    }
}
