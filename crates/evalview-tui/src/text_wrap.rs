//! Hard wrapping of styled lines
//!
//! Panels scroll by wrapped row, so wrapping happens before rendering and
//! the row count is exact.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Tab stops every eight columns, as terminals place them
const TAB_STOP: usize = 8;

/// Break a line into rows of at most `width` display columns
///
/// Span styles are kept across breaks. Tabs advance to the next tab stop of
/// the row. An empty line yields one empty row.
pub fn wrap_line(line: &Line<'_>, width: usize) -> Vec<Line<'static>> {
    let mut rows = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for span in &line.spans {
        let mut text = String::new();
        for ch in span.content.chars() {
            let ch_width = if ch == '\t' {
                TAB_STOP - used % TAB_STOP
            } else {
                ch.width().unwrap_or(0)
            };
            if width > 0 && used > 0 && used + ch_width > width {
                if !text.is_empty() {
                    current.push(Span::styled(std::mem::take(&mut text), span.style));
                }
                rows.push(Line::from(std::mem::take(&mut current)).style(line.style));
                used = 0;
            }
            if ch == '\t' {
                let fill = TAB_STOP - used % TAB_STOP;
                let fill = if width > 0 { fill.min(width - used) } else { fill };
                text.push_str(&" ".repeat(fill));
                used += fill;
            } else {
                text.push(ch);
                used += ch_width;
            }
        }
        if !text.is_empty() {
            current.push(Span::styled(text, span.style));
        }
    }

    rows.push(Line::from(current).style(line.style));
    rows
}

pub fn wrap_lines<'a>(
    lines: impl IntoIterator<Item = &'a Line<'a>>,
    width: usize,
) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

/// Plain text to lines, splitting on newlines
///
/// `\r\n` counts as one line break, as it does on a terminal.
pub fn text_lines(text: &str, style: ratatui::style::Style) -> Vec<Line<'static>> {
    text.split('\n')
        .map(|l| Line::styled(l.trim_end_matches('\r').to_string(), style))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Style, Stylize};

    fn plain(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_short_line_is_unchanged() {
        let rows = wrap_line(&Line::from("hello"), 10);
        assert_eq!(plain(&rows), vec!["hello"]);
    }

    #[test]
    fn test_long_line_breaks_at_width() {
        let rows = wrap_line(&Line::from("abcdefghij"), 4);
        assert_eq!(plain(&rows), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_styles_survive_breaks() {
        let line = Line::from(vec![Span::raw("ab"), "cdef".red()]);
        let rows = wrap_line(&line, 3);
        assert_eq!(plain(&rows), vec!["abc", "def"]);
        assert_eq!(rows[0].spans[1].style, Style::default().red());
        assert_eq!(rows[1].spans[0].style, Style::default().red());
    }

    #[test]
    fn test_wide_chars_count_double() {
        let rows = wrap_line(&Line::from("日本語"), 4);
        assert_eq!(plain(&rows), vec!["日本", "語"]);
    }

    #[test]
    fn test_empty_line_yields_one_row() {
        assert_eq!(wrap_line(&Line::default(), 5).len(), 1);
    }

    #[test]
    fn test_tabs_expand_to_tab_stops() {
        let rows = wrap_line(&Line::from("a\tb\tc"), 40);
        let gap = " ".repeat(7);
        assert_eq!(plain(&rows), vec![format!("a{gap}b{gap}c")]);
    }

    #[test]
    fn test_tab_wraps_with_the_row() {
        let rows = wrap_line(&Line::from("abcdefghi\tx"), 10);
        assert_eq!(plain(&rows), vec!["abcdefghi".to_string(), format!("{}x", " ".repeat(8))]);
    }

    #[test]
    fn test_text_lines_split() {
        let lines = text_lines("a\nb\r\n", Style::default());
        assert_eq!(plain(&lines), vec!["a", "b", ""]);
    }
}
