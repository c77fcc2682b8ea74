use comfy_table::{ContentArrangement, Table};
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use unicode_width::UnicodeWidthStr;

use super::style::{Style, StyledLine, StyledSpan};
use super::wrap::{WrapOptions, wrap_styled_spans};

/// Renders Markdown text into styled, width-wrapped lines.
///
/// Parses with pulldown-cmark (GFM tables enabled), converts events to
/// styled spans, and wraps at the given width. HTML events are skipped so
/// widget bodies are never interpreted.
pub fn render_markdown(text: &str, width: usize) -> Vec<StyledLine> {
    if text.is_empty() {
        return vec![StyledLine::empty()];
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(text, options);

    let mut writer = MarkdownWriter::new(width);
    for event in parser {
        writer.process(event);
    }
    writer.finish()
}

/// Plain-text table accumulator rendered through comfy-table.
#[derive(Debug, Default)]
struct TableCollector {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    current_row: Vec<String>,
    current_cell: String,
}

impl TableCollector {
    fn push_text(&mut self, text: &str) {
        self.current_cell.push_str(text);
    }

    fn finish_cell(&mut self) {
        let cell = std::mem::take(&mut self.current_cell);
        self.current_row.push(cell);
    }

    fn finish_row(&mut self, is_header: bool) {
        let row = std::mem::take(&mut self.current_row);
        if is_header {
            self.header = row;
        } else {
            self.rows.push(row);
        }
    }

    fn render(&self, max_width: usize) -> Vec<String> {
        let mut table = Table::new();
        table.set_width(max_width as u16);
        table.set_content_arrangement(ContentArrangement::Dynamic);

        if !self.header.is_empty() {
            table.set_header(&self.header);
        }
        for row in &self.rows {
            table.add_row(row);
        }

        table.to_string().lines().map(String::from).collect()
    }
}

/// List nesting state: `ordered` is the starting number, `item` counts up.
struct ListLevel {
    ordered: Option<u64>,
    item: u64,
}

struct MarkdownWriter {
    width: usize,
    lines: Vec<StyledLine>,
    /// Spans of the block currently being collected.
    spans: Vec<StyledSpan>,
    /// Style stack for nested inline styles.
    styles: Vec<Style>,
    in_code_block: bool,
    code_lang: Option<String>,
    lists: Vec<ListLevel>,
    table: Option<TableCollector>,
    in_table_head: bool,
}

impl MarkdownWriter {
    fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
            spans: Vec::new(),
            styles: vec![Style::Body],
            in_code_block: false,
            code_lang: None,
            lists: Vec::new(),
            table: None,
            in_table_head: false,
        }
    }

    fn style(&self) -> Style {
        self.styles.last().copied().unwrap_or(Style::Body)
    }

    fn push_style(&mut self, style: Style) {
        self.styles.push(style);
    }

    fn pop_style(&mut self) {
        if self.styles.len() > 1 {
            self.styles.pop();
        }
    }

    fn process(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.hard_break(),
            Event::Rule => {
                self.flush_paragraph();
                self.lines.push(StyledLine {
                    spans: vec![StyledSpan::new(
                        "─".repeat(self.width.min(40)),
                        Style::Plain,
                    )],
                });
            }
            // HTML, footnotes, math: not displayed.
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag) {
        match tag {
            Tag::Heading { level, .. } => {
                let style = match level {
                    HeadingLevel::H1 => Style::H1,
                    HeadingLevel::H2 => Style::H2,
                    _ => Style::H3,
                };
                self.push_style(style);
            }
            Tag::CodeBlock(kind) => {
                self.flush_paragraph();
                self.in_code_block = true;
                self.code_lang = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                    _ => None,
                };
                self.push_style(Style::CodeBlock);
            }
            Tag::List(start) => {
                self.flush_paragraph();
                self.lists.push(ListLevel {
                    ordered: start,
                    item: start.unwrap_or(1),
                });
            }
            Tag::Item => self.flush_paragraph(),
            Tag::BlockQuote(_) => {
                self.flush_paragraph();
                self.push_style(Style::BlockQuote);
            }
            Tag::Emphasis => self.push_style(Style::Emphasis),
            Tag::Strong => self.push_style(Style::Strong),
            Tag::Link { .. } => self.push_style(Style::Link),
            Tag::Table(_) => {
                self.flush_paragraph();
                self.table = Some(TableCollector::default());
            }
            Tag::TableHead => self.in_table_head = true,
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                self.flush_paragraph();
                // Blank line between paragraphs, but not inside list items.
                if self.lists.is_empty() {
                    self.lines.push(StyledLine::empty());
                }
            }
            TagEnd::Heading(_) => {
                self.flush_paragraph();
                self.pop_style();
                self.lines.push(StyledLine::empty());
            }
            TagEnd::CodeBlock => {
                self.flush_code_block();
                self.in_code_block = false;
                self.pop_style();
                self.lines.push(StyledLine::empty());
            }
            TagEnd::List(_) => {
                self.lists.pop();
                if self.lists.is_empty() {
                    self.lines.push(StyledLine::empty());
                }
            }
            TagEnd::Item => {
                self.flush_list_item();
                if let Some(list) = self.lists.last_mut() {
                    list.item += 1;
                }
            }
            TagEnd::BlockQuote(_) => {
                self.flush_paragraph();
                self.pop_style();
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Link => self.pop_style(),
            TagEnd::Table => {
                self.flush_table();
                self.lines.push(StyledLine::empty());
            }
            TagEnd::TableHead => {
                if let Some(table) = self.table.as_mut() {
                    table.finish_row(true);
                }
                self.in_table_head = false;
            }
            TagEnd::TableRow => {
                if !self.in_table_head
                    && let Some(table) = self.table.as_mut()
                {
                    table.finish_row(false);
                }
            }
            TagEnd::TableCell => {
                if let Some(table) = self.table.as_mut() {
                    table.finish_cell();
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(table) = self.table.as_mut() {
            table.push_text(&text.replace('\n', " "));
            return;
        }
        let style = self.style();
        self.spans.push(StyledSpan::new(text, style));
    }

    fn inline_code(&mut self, code: &str) {
        if let Some(table) = self.table.as_mut() {
            table.push_text(&format!("`{}`", code.replace('\n', " ")));
            return;
        }
        self.spans.push(StyledSpan::new(code, Style::CodeInline));
    }

    fn soft_break(&mut self) {
        if let Some(table) = self.table.as_mut() {
            table.push_text(" ");
            return;
        }
        let style = self.style();
        self.spans.push(StyledSpan::new(" ", style));
    }

    fn hard_break(&mut self) {
        if let Some(table) = self.table.as_mut() {
            table.push_text(" ");
            return;
        }
        let style = self.style();
        self.spans.push(StyledSpan::new("\n", style));
    }

    fn flush_paragraph(&mut self) {
        if self.spans.is_empty() {
            return;
        }
        let spans = std::mem::take(&mut self.spans);
        let wrapped = wrap_styled_spans(&spans, &WrapOptions::new(self.width));
        self.lines.extend(wrapped);
    }

    /// Code blocks render verbatim between subtle fence lines, indented
    /// for visual separation, never wrapped.
    fn flush_code_block(&mut self) {
        if self.spans.is_empty() {
            return;
        }
        let spans = std::mem::take(&mut self.spans);
        let full_text: String = spans.iter().map(|s| s.text.as_str()).collect();

        let fence = match self.code_lang.take() {
            Some(lang) => format!("```{lang}"),
            None => "```".to_string(),
        };
        self.lines.push(StyledLine {
            spans: vec![StyledSpan::new(fence, Style::CodeFence)],
        });

        for line in full_text.trim_end_matches('\n').split('\n') {
            self.lines.push(StyledLine {
                spans: vec![
                    StyledSpan::new("  ", Style::Plain),
                    StyledSpan::new(line, Style::CodeBlock),
                ],
            });
        }

        self.lines.push(StyledLine {
            spans: vec![StyledSpan::new("```", Style::CodeFence)],
        });
    }

    fn flush_list_item(&mut self) {
        if self.spans.is_empty() {
            return;
        }
        let spans = std::mem::take(&mut self.spans);

        let (marker, marker_style) = match self.lists.last() {
            Some(list) if list.ordered.is_some() => {
                (format!("{}. ", list.item), Style::ListNumber)
            }
            _ => ("• ".to_string(), Style::ListBullet),
        };

        let indent = "  ".repeat(self.lists.len().saturating_sub(1));
        let marker_width = marker.width();

        let opts = WrapOptions {
            width: self.width,
            first_prefix: vec![
                StyledSpan::new(indent.clone(), Style::Plain),
                StyledSpan::new(marker, marker_style),
            ],
            rest_prefix: vec![StyledSpan::new(
                format!("{}{}", indent, " ".repeat(marker_width)),
                Style::Plain,
            )],
        };
        let wrapped = wrap_styled_spans(&spans, &opts);
        self.lines.extend(wrapped);
    }

    fn flush_table(&mut self) {
        let Some(table) = self.table.take() else {
            return;
        };
        for line in table.render(self.width) {
            self.lines.push(StyledLine {
                spans: vec![StyledSpan::new(line, Style::Plain)],
            });
        }
    }

    fn finish(mut self) -> Vec<StyledLine> {
        if !self.spans.is_empty() {
            if self.in_code_block {
                self.flush_code_block();
            } else {
                self.flush_paragraph();
            }
        }

        while self.lines.last().is_some_and(|l| l.spans.is_empty()) {
            self.lines.pop();
        }
        if self.lines.is_empty() {
            self.lines.push(StyledLine::empty());
        }
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_style(lines: &[StyledLine], style: Style) -> bool {
        lines.iter().any(|l| l.spans.iter().any(|s| s.style == style))
    }

    fn combined_text(lines: &[StyledLine]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_plain_text_uses_body_style() {
        let lines = render_markdown("Just plain text without any markdown", 80);
        assert!(!lines.is_empty());
        assert!(has_style(&lines, Style::Body));
    }

    #[test]
    fn test_heading_levels_map_to_styles() {
        let lines = render_markdown("# H1\n\n## H2\n\n### H3\n\n#### H4", 80);
        assert!(has_style(&lines, Style::H1));
        assert!(has_style(&lines, Style::H2));
        assert!(has_style(&lines, Style::H3));
    }

    #[test]
    fn test_emphasis_and_strong() {
        let lines = render_markdown("**bold** and *italic*", 80);
        assert!(has_style(&lines, Style::Strong));
        assert!(has_style(&lines, Style::Emphasis));
    }

    #[test]
    fn test_inline_code_keeps_surrounding_spaces() {
        let lines = render_markdown("word `code` word", 80);
        assert!(has_style(&lines, Style::CodeInline));
        let combined = combined_text(&lines);
        assert!(combined.contains("word ") && combined.contains(" word"));
    }

    #[test]
    fn test_unordered_list_gets_bullets() {
        let lines = render_markdown("- item 1\n- item 2", 80);
        assert!(has_style(&lines, Style::ListBullet));
    }

    #[test]
    fn test_ordered_list_numbers_count_up() {
        let lines = render_markdown("1. first\n2. second\n3. third", 80);
        assert!(has_style(&lines, Style::ListNumber));
        let combined = combined_text(&lines);
        assert!(combined.contains("1. "));
        assert!(combined.contains("3. "));
    }

    #[test]
    fn test_code_block_preserves_indentation() {
        let md = "```\nfn main() {\n    println!(\"hi\");\n}\n```";
        let lines = render_markdown(md, 20);
        assert!(has_style(&lines, Style::CodeBlock));
        assert!(has_style(&lines, Style::CodeFence));
        assert!(combined_text(&lines).contains("    println!"));
    }

    #[test]
    fn test_table_renders_cells() {
        let md = "| A | B |\n|---|---|\n| 1 | 2 |";
        let lines = render_markdown(md, 80);
        assert!(lines.len() >= 3);
        let combined = combined_text(&lines);
        for cell in ["A", "B", "1", "2"] {
            assert!(combined.contains(cell), "missing cell {cell}: {combined}");
        }
    }

    #[test]
    fn test_html_is_not_rendered() {
        let lines = render_markdown("<script>alert(1)</script>", 80);
        let combined = combined_text(&lines);
        assert!(!combined.contains("alert"));
        assert!(!combined.contains("script"));
    }

    #[test]
    fn test_inline_html_tags_are_stripped() {
        let lines = render_markdown("before <b>inner</b> after", 80);
        let combined = combined_text(&lines);
        assert!(combined.contains("inner"));
        assert!(!combined.contains("<b>"));
    }

    #[test]
    fn test_empty_input_yields_one_empty_line() {
        let lines = render_markdown("", 80);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].spans.is_empty());
    }

    #[test]
    fn test_default_widget_bodies_render() {
        use mdeck_core::layout::TextSize;
        for &size in TextSize::all() {
            let lines = render_markdown(size.default_content(), 40);
            assert!(!lines.is_empty());
            assert!(has_style(&lines, Style::H1));
        }
    }
}
