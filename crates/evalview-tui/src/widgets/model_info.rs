//! Model info row and file URL

use evalview_core::{truncate_url, yes_no, TestCaseResult};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct ModelInfo<'a> {
    result: &'a TestCaseResult,
}

impl<'a> ModelInfo<'a> {
    pub fn new(result: &'a TestCaseResult) -> Self {
        Self { result }
    }

    pub fn height(&self) -> u16 {
        if self.result.file_reference().is_some() {
            2
        } else {
            1
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let r = self.result;
        let mut lines = vec![Line::from(vec![
            Span::styled("OCR Model: ", styles::label()),
            Span::styled(r.ocr_model.as_deref().unwrap_or("N/A"), styles::text_primary()),
            Span::raw("   "),
            Span::styled("Extraction Model: ", styles::label()),
            Span::styled(
                r.extraction_model.as_deref().unwrap_or("N/A"),
                styles::text_primary(),
            ),
            Span::raw("   "),
            Span::styled("Direct Image Extraction: ", styles::label()),
            Span::styled(yes_no(r.direct_image_extraction), styles::text_primary()),
        ])];

        if let Some(url) = r.file_reference() {
            let shown = truncate_url(url);
            lines.push(Line::from(vec![
                Span::styled("File URL: ", styles::label()),
                Span::styled(shown.text, styles::link()),
            ]));
        }
        lines
    }
}

impl Widget for ModelInfo<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{detail_from, TestTerminal};
    use evalview_catalog::test_utils::test_entry;

    #[test]
    fn test_model_row() {
        let detail = detail_from(test_entry("a", 1));
        let mut term = TestTerminal::new();
        term.render_widget(ModelInfo::new(&detail.result), Rect::new(0, 0, 120, 2));

        assert!(term.buffer_contains("OCR Model: gpt-4o"));
        assert!(term.buffer_contains("Extraction Model: claude-3-5-sonnet"));
        assert!(term.buffer_contains("Direct Image Extraction: No"));
        assert!(term.buffer_contains("File URL: https://files.example.com/a.png"));
    }

    #[test]
    fn test_long_url_is_shortened() {
        let mut entry = test_entry("a", 1);
        let url = format!("https://files.example.com/{}", "x".repeat(150));
        entry["fileUrl"] = serde_json::Value::String(url.clone());
        let detail = detail_from(entry);

        let mut term = TestTerminal::new();
        term.render_widget(ModelInfo::new(&detail.result), Rect::new(0, 0, 120, 2));

        let expected = truncate_url(&url).text;
        assert!(term.buffer_contains(&expected));
        assert!(!term.buffer_contains(&url));
    }

    #[test]
    fn test_missing_models_show_na() {
        let mut entry = test_entry("a", 1);
        entry["ocrModel"] = serde_json::Value::Null;
        entry["fileUrl"] = serde_json::Value::Null;
        let detail = detail_from(entry);
        let info = ModelInfo::new(&detail.result);
        assert_eq!(info.height(), 1);

        let mut term = TestTerminal::new();
        term.render_widget(info, Rect::new(0, 0, 120, 2));
        assert!(term.buffer_contains("OCR Model: N/A"));
    }
}
