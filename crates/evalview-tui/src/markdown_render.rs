//! Markdown to styled terminal lines
//!
//! Walks pulldown-cmark events and builds ratatui [`Line`]s: headings,
//! emphasis, lists, code, tables and links are styled; embedded HTML is
//! passed through as plain text.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

/// Render markdown source into styled lines
pub fn render_markdown(source: &str) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut renderer = Renderer::default();
    for event in Parser::new_ext(source, options) {
        match event {
            Event::Start(tag) => renderer.handle_start(tag),
            Event::End(tag) => renderer.handle_end(tag),
            Event::Text(text) => renderer.add_text(&text),
            Event::Code(code) => renderer.add_inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => renderer.add_text(&html),
            Event::SoftBreak => renderer.soft_break(),
            Event::HardBreak => renderer.flush_line(true),
            Event::Rule => renderer.add_rule(),
            Event::TaskListMarker(done) => {
                renderer.push_span(if done { "[x] " } else { "[ ] " }, styles::text_muted())
            }
            _ => {}
        }
    }
    renderer.finish()
}

#[derive(Debug, Default)]
struct InlineState {
    emphasis: u8,
    strong: u8,
    strikethrough: u8,
    link: u8,
}

#[derive(Debug, Default)]
struct TableState {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    current_row: Vec<String>,
    current_cell: String,
    in_cell: bool,
}

#[derive(Debug, Default)]
struct Renderer {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    inline: InlineState,
    heading: Option<HeadingLevel>,
    in_code_block: bool,
    /// `Some(next_number)` for ordered lists
    list_stack: Vec<Option<u64>>,
    table: Option<TableState>,
}

impl Renderer {
    fn flush_line(&mut self, force: bool) {
        if self.current.is_empty() && !force {
            return;
        }
        let spans = std::mem::take(&mut self.current);
        self.lines.push(Line::from(spans));
    }

    fn blank_line(&mut self) {
        match self.lines.last() {
            Some(line) if line.width() > 0 => self.lines.push(Line::default()),
            _ => {}
        }
    }

    fn push_span(&mut self, text: &str, style: Style) {
        if !text.is_empty() {
            self.current.push(Span::styled(text.to_string(), style));
        }
    }

    fn text_style(&self) -> Style {
        let mut style = match self.heading {
            Some(HeadingLevel::H1) => styles::accent_bold()
                .fg(palette::MD_HEADING)
                .add_modifier(Modifier::UNDERLINED),
            Some(_) => styles::accent_bold().fg(palette::MD_HEADING),
            None => styles::text_primary(),
        };
        if self.inline.emphasis > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.inline.strong > 0 {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.inline.strikethrough > 0 {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        if self.inline.link > 0 {
            style = style.patch(styles::link());
        }
        style
    }

    fn code_style() -> Style {
        Style::default().fg(palette::MD_CODE).bg(palette::MD_CODE_BG)
    }

    fn handle_start(&mut self, tag: Tag<'_>) {
        if let Some(table) = self.table.as_mut() {
            match tag {
                Tag::TableCell => {
                    table.in_cell = true;
                    table.current_cell.clear();
                    return;
                }
                Tag::TableHead | Tag::TableRow => {
                    table.current_row.clear();
                    return;
                }
                _ => {}
            }
        }

        match tag {
            Tag::Heading { level, .. } => {
                self.flush_line(false);
                self.heading = Some(level);
            }
            Tag::CodeBlock(_) => {
                self.flush_line(false);
                self.in_code_block = true;
            }
            Tag::List(start) => {
                self.flush_line(false);
                self.list_stack.push(start);
            }
            Tag::Item => {
                self.flush_line(false);
                let indent = "  ".repeat(self.list_stack.len().saturating_sub(1));
                let bullet = match self.list_stack.last_mut() {
                    Some(Some(next)) => {
                        let bullet = format!("{next}. ");
                        *next += 1;
                        bullet
                    }
                    _ => "- ".to_string(),
                };
                self.push_span(
                    &format!("{indent}{bullet}"),
                    Style::default().fg(palette::MD_BULLET),
                );
            }
            Tag::Emphasis => self.inline.emphasis = self.inline.emphasis.saturating_add(1),
            Tag::Strong => self.inline.strong = self.inline.strong.saturating_add(1),
            Tag::Strikethrough => {
                self.inline.strikethrough = self.inline.strikethrough.saturating_add(1)
            }
            Tag::Link { .. } => self.inline.link = self.inline.link.saturating_add(1),
            Tag::Image { .. } => self.push_span("[image: ", styles::text_muted()),
            Tag::Table(_) => {
                self.flush_line(false);
                self.table = Some(TableState::default());
            }
            _ => {}
        }
    }

    fn handle_end(&mut self, tag: TagEnd) {
        if let Some(table) = self.table.as_mut() {
            match tag {
                TagEnd::TableCell => {
                    let cell = std::mem::take(&mut table.current_cell);
                    table.current_row.push(cell.trim().to_string());
                    table.in_cell = false;
                    return;
                }
                TagEnd::TableHead => {
                    table.headers = std::mem::take(&mut table.current_row);
                    return;
                }
                TagEnd::TableRow => {
                    let row = std::mem::take(&mut table.current_row);
                    table.rows.push(row);
                    return;
                }
                TagEnd::Table => {
                    if let Some(table) = self.table.take() {
                        self.render_table(&table);
                    }
                    self.blank_line();
                    return;
                }
                _ => {}
            }
        }

        match tag {
            TagEnd::Paragraph => {
                self.flush_line(false);
                if self.list_stack.is_empty() {
                    self.blank_line();
                }
            }
            TagEnd::Heading(_) => {
                self.flush_line(false);
                self.heading = None;
                self.blank_line();
            }
            TagEnd::CodeBlock => {
                self.flush_line(false);
                self.in_code_block = false;
                self.blank_line();
            }
            TagEnd::List(_) => {
                self.flush_line(false);
                self.list_stack.pop();
                if self.list_stack.is_empty() {
                    self.blank_line();
                }
            }
            TagEnd::Item => self.flush_line(false),
            TagEnd::Emphasis => self.inline.emphasis = self.inline.emphasis.saturating_sub(1),
            TagEnd::Strong => self.inline.strong = self.inline.strong.saturating_sub(1),
            TagEnd::Strikethrough => {
                self.inline.strikethrough = self.inline.strikethrough.saturating_sub(1)
            }
            TagEnd::Link => self.inline.link = self.inline.link.saturating_sub(1),
            TagEnd::Image => self.push_span("]", styles::text_muted()),
            _ => {}
        }
    }

    fn add_text(&mut self, text: &str) {
        if let Some(table) = self.table.as_mut() {
            if table.in_cell {
                table.current_cell.push_str(text);
            }
            return;
        }

        let style = if self.in_code_block {
            Self::code_style()
        } else {
            self.text_style()
        };

        // Code and HTML blocks arrive with embedded newlines
        for (idx, piece) in text.split('\n').enumerate() {
            if idx > 0 {
                self.flush_line(true);
            }
            self.push_span(piece, style);
        }
    }

    fn add_inline_code(&mut self, code: &str) {
        if let Some(table) = self.table.as_mut() {
            if table.in_cell {
                table.current_cell.push_str(code);
            }
            return;
        }
        self.push_span(code, Self::code_style());
    }

    fn soft_break(&mut self) {
        self.push_span(" ", self.text_style());
    }

    fn add_rule(&mut self) {
        self.flush_line(false);
        self.push_span(&"─".repeat(40), styles::text_muted());
        self.flush_line(false);
        self.blank_line();
    }

    fn render_table(&mut self, table: &TableState) {
        let columns = table
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(table.headers.len()))
            .max()
            .unwrap_or(0);
        if columns == 0 {
            return;
        }

        let mut widths = vec![0usize; columns];
        for row in std::iter::once(&table.headers).chain(table.rows.iter()) {
            for (idx, cell) in row.iter().enumerate() {
                widths[idx] = widths[idx].max(cell.width());
            }
        }

        let header_style = styles::text_primary().add_modifier(Modifier::BOLD);
        if !table.headers.is_empty() {
            self.lines
                .push(table_row(&table.headers, &widths, header_style));
            let separator = widths
                .iter()
                .map(|w| "-".repeat(*w + 2))
                .collect::<Vec<_>>()
                .join("|");
            self.lines.push(Line::styled(
                format!("|{separator}|"),
                styles::text_muted(),
            ));
        }
        for row in &table.rows {
            self.lines
                .push(table_row(row, &widths, styles::text_primary()));
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_line(false);
        while self.lines.last().is_some_and(|line| line.width() == 0) {
            self.lines.pop();
        }
        self.lines
    }
}

fn table_row(cells: &[String], widths: &[usize], style: Style) -> Line<'static> {
    let mut text = String::from("|");
    for (idx, width) in widths.iter().enumerate() {
        let cell = cells.get(idx).map(String::as_str).unwrap_or("");
        let pad = width.saturating_sub(cell.width());
        text.push(' ');
        text.push_str(cell);
        text.push_str(&" ".repeat(pad));
        text.push_str(" |");
    }
    Line::styled(text, style)
}
