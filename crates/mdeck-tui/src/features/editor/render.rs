//! Editor rendering: a centered modal panel with a title line and a raw
//! Markdown body editor.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{EditField, EditSession};
use crate::board;
use crate::common::TextBuffer;
use crate::overlays::render_utils::{InputHint, OverlayConfig, render_overlay, render_separator};
use crate::state::TuiState;

/// Renders the edit panel over the board if a session is open.
pub fn render_editor(tui: &TuiState, frame: &mut Frame, area: Rect) {
    let Some(session) = tui.editor.session.as_ref() else {
        return;
    };

    let color = tui
        .document
        .widget(&session.widget_id)
        .map_or(Color::Cyan, |w| board::tag_color(w.color));

    let width = (area.width * 3 / 4).max(40);
    let height = (area.height * 4 / 5).max(10);
    let hints = [
        InputHint::new("Tab", "switch field"),
        InputHint::new("Ctrl+S", "save"),
        InputHint::new("Esc", "cancel"),
    ];
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: "Edit Widget",
            border_color: color,
            width,
            height,
            hints: &hints,
        },
    );
    let body = layout.body;
    if body.height < 3 {
        return;
    }

    // Row 0: title input. Row 1: separator. Rest: content body.
    render_title_line(frame, body, session);
    render_separator(frame, body, 1);
    render_content(frame, body, session);
}

fn render_title_line(frame: &mut Frame, body: Rect, session: &EditSession) {
    let active = session.field == EditField::Title;
    let prompt_style = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title_text = session.title.text();
    let mut spans = vec![Span::styled("Title: ", prompt_style)];
    if active {
        let (_, col) = session.title.cursor();
        spans.extend(spans_with_cursor(&title_text, col));
    } else {
        spans.push(Span::raw(title_text));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect::new(body.x, body.y, body.width, 1),
    );
}

fn render_content(frame: &mut Frame, body: Rect, session: &EditSession) {
    let content_area = Rect::new(
        body.x,
        body.y + 2,
        body.width,
        body.height.saturating_sub(2),
    );
    if content_area.height == 0 {
        return;
    }

    let active = session.field == EditField::Content;
    let visible = content_area.height as usize;
    let scroll = content_scroll(&session.content, visible);

    let (cursor_row, cursor_col) = session.content.cursor();
    let lines: Vec<Line<'static>> = session
        .content
        .lines()
        .iter()
        .enumerate()
        .skip(scroll)
        .take(visible)
        .map(|(row, line)| {
            if active && row == cursor_row {
                Line::from(spans_with_cursor(line, cursor_col))
            } else {
                Line::from(Span::raw(line.clone()))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), content_area);
}

/// First visible line of the content body, keeping the cursor on screen.
fn content_scroll(buffer: &TextBuffer, visible: usize) -> usize {
    let (cursor_row, _) = buffer.cursor();
    cursor_row.saturating_sub(visible.saturating_sub(1))
}

/// Splits a line at the cursor, rendering the char under the cursor
/// reversed (or a block at end of line).
fn spans_with_cursor(line: &str, cursor_col: usize) -> Vec<Span<'static>> {
    let byte = line
        .char_indices()
        .nth(cursor_col)
        .map_or(line.len(), |(idx, _)| idx);
    let (before, rest) = line.split_at(byte);

    let mut spans = vec![Span::raw(before.to_string())];
    if rest.is_empty() {
        spans.push(Span::styled("█", Style::default().fg(Color::Gray)));
    } else {
        let mut chars = rest.chars();
        let under = chars.next().map(String::from).unwrap_or_default();
        spans.push(Span::styled(
            under,
            Style::default().add_modifier(Modifier::REVERSED),
        ));
        spans.push(Span::raw(chars.as_str().to_string()));
    }
    spans
}
