//! Board rendering: rows of widget cards on a fixed 3-column grid.

use mdeck_core::layout::{ColorTag, Document, Row, Widget};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::truncate_with_ellipsis;
use crate::markdown::{self, StyledLine};
use crate::state::TuiState;

/// Columns in the widget grid.
pub const GRID_COLUMNS: u32 = 3;

/// Card overhead around the Markdown body: two border lines plus the
/// size/span badge line.
const CARD_CHROME_HEIGHT: u16 = 3;

/// Horizontal offsets and widths for a row's widgets.
///
/// Each widget takes `span` of the 3 grid columns. Rows carrying more
/// than 3 columns worth of widgets share the width proportionally instead
/// of wrapping.
pub fn widget_widths(row: &Row, width: u16) -> Vec<(u16, u16)> {
    let denom = row
        .widgets
        .iter()
        .map(|w| w.span.columns())
        .sum::<u32>()
        .max(GRID_COLUMNS);

    let mut out = Vec::with_capacity(row.widgets.len());
    let mut cum = 0u32;
    for widget in &row.widgets {
        let x0 = (u32::from(width) * cum / denom) as u16;
        cum += widget.span.columns();
        let x1 = (u32::from(width) * cum / denom) as u16;
        out.push((x0, x1.saturating_sub(x0)));
    }
    out
}

fn widget_height(widget: &Widget, width: u16, cap: u16) -> u16 {
    let inner = width.saturating_sub(2) as usize;
    let body = markdown::render_markdown(widget.resolved_content(), inner);
    (body.len() as u16).min(cap) + CARD_CHROME_HEIGHT
}

/// Height of every row at the given board width (used by render and by
/// the scroll sync).
pub fn row_heights(document: &Document, width: u16, cap: u16) -> Vec<u16> {
    document
        .rows
        .iter()
        .map(|row| {
            widget_widths(row, width)
                .iter()
                .zip(&row.widgets)
                .map(|(&(_, w), widget)| widget_height(widget, w, cap))
                .max()
                .unwrap_or(CARD_CHROME_HEIGHT)
        })
        .collect()
}

/// Renders the widget grid from the current scroll row down.
pub fn render_board(tui: &TuiState, frame: &mut Frame, area: Rect) {
    let heights = row_heights(&tui.document, area.width, tui.config.max_widget_height);
    let focus = tui.board.focus_position(&tui.document);

    let mut y = area.y;
    for (ri, row) in tui
        .document
        .rows
        .iter()
        .enumerate()
        .skip(tui.board.scroll_row)
    {
        if y >= area.bottom() {
            break;
        }
        let height = heights[ri].min(area.bottom() - y);
        let row_area = Rect::new(area.x, y, area.width, height);
        render_row(frame, row_area, row, focus.filter(|&(r, _)| r == ri));
        y += height;
    }
}

fn render_row(frame: &mut Frame, area: Rect, row: &Row, focus: Option<(usize, usize)>) {
    for (wi, (&(x, width), widget)) in widget_widths(row, area.width)
        .iter()
        .zip(&row.widgets)
        .enumerate()
    {
        if width == 0 {
            continue;
        }
        let rect = Rect::new(area.x + x, area.y, width, area.height);
        let focused = focus.is_some_and(|(_, i)| i == wi);
        render_widget_card(frame, rect, widget, focused);
    }
}

fn render_widget_card(frame: &mut Frame, rect: Rect, widget: &Widget, focused: bool) {
    let color = tag_color(widget.color);
    let border_style = if focused {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color).add_modifier(Modifier::DIM)
    };

    let marker = if focused { "▸ " } else { "" };
    let title = truncate_with_ellipsis(
        &format!(" {marker}{} ", widget.title),
        rect.width.saturating_sub(2) as usize,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    // Badge line: text size and span at a glance.
    let badge = format!(
        "{} · {} col",
        widget.text_size.label(),
        widget.span.columns()
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            badge,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    let body_area = Rect::new(
        inner.x,
        inner.y + 1,
        inner.width,
        inner.height.saturating_sub(1),
    );
    if body_area.height == 0 {
        return;
    }

    let body = markdown::render_markdown(widget.resolved_content(), body_area.width as usize);
    let visible = body_area.height as usize;
    let truncated = body.len() > visible;
    let mut lines: Vec<Line<'static>> = body
        .iter()
        .take(visible)
        .map(to_terminal_line)
        .collect();
    if truncated && let Some(last) = lines.last_mut() {
        *last = Line::from(Span::styled("…", Style::default().fg(Color::DarkGray)));
    }

    frame.render_widget(Paragraph::new(lines), body_area);
}

/// Maps a palette tag to a terminal color.
pub fn tag_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Blue => Color::Blue,
        ColorTag::Green => Color::Green,
        ColorTag::Yellow => Color::Yellow,
        ColorTag::Red => Color::Red,
        ColorTag::Purple => Color::Magenta,
        ColorTag::Pink => Color::LightMagenta,
        ColorTag::Indigo => Color::LightBlue,
        ColorTag::Orange => Color::LightRed,
    }
}

fn to_terminal_line(line: &StyledLine) -> Line<'static> {
    let spans = line
        .spans
        .iter()
        .map(|s| Span::styled(s.text.clone(), terminal_style(s.style)))
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn terminal_style(style: markdown::Style) -> Style {
    use markdown::Style as Md;
    match style {
        Md::Plain | Md::Body => Style::default(),
        Md::Emphasis => Style::default().add_modifier(Modifier::ITALIC),
        Md::Strong => Style::default().add_modifier(Modifier::BOLD),
        Md::CodeInline | Md::CodeBlock => Style::default().fg(Color::Cyan),
        Md::CodeFence => Style::default().fg(Color::DarkGray),
        Md::H1 => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        Md::H2 => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Md::H3 => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Md::Link => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
        Md::BlockQuote => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::ITALIC),
        Md::ListBullet | Md::ListNumber => Style::default().fg(Color::Yellow),
    }
}

#[cfg(test)]
mod tests {
    use mdeck_core::layout::{ColumnSpan, Document};

    use super::*;

    #[test]
    fn test_widget_widths_follow_spans() {
        let doc = Document::seed();
        // Row 0 is a 1-col widget next to a 2-col widget.
        let widths = widget_widths(&doc.rows[0], 90);
        assert_eq!(widths.len(), 2);
        assert_eq!(widths[0], (0, 30));
        assert_eq!(widths[1], (30, 60));
    }

    #[test]
    fn test_widget_widths_cover_full_width_when_grid_is_full() {
        let doc = Document::seed();
        let widths = widget_widths(&doc.rows[1], 90);
        let total: u16 = widths.iter().map(|&(_, w)| w).sum();
        assert_eq!(total, 90);
    }

    #[test]
    fn test_overfull_rows_share_width_proportionally() {
        let mut doc = Document::seed();
        // Grow row 0 to 2 + 2 = 4 columns of span.
        let id = doc.rows[0].widgets[0].id.clone();
        doc = doc.set_column_span(&id, ColumnSpan::Two);

        let widths = widget_widths(&doc.rows[0], 80);
        let total: u16 = widths.iter().map(|&(_, w)| w).sum();
        assert_eq!(total, 80);
        assert_eq!(widths[0].1, 40);
    }

    #[test]
    fn test_row_heights_are_capped() {
        let doc = Document::seed();
        let heights = row_heights(&doc, 120, 5);
        // Body capped at 5 lines plus card chrome.
        assert!(heights.iter().all(|&h| h <= 5 + CARD_CHROME_HEIGHT));
        assert_eq!(heights.len(), doc.rows.len());
    }

    #[test]
    fn test_every_palette_tag_has_a_terminal_color() {
        let colors: Vec<Color> = ColorTag::ALL.iter().map(|&t| tag_color(t)).collect();
        assert_eq!(colors.len(), 8);
    }
}
