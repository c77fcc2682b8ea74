//! Status line: contextual key hints plus document stats.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::AppState;

/// Renders the one-line status bar below the board.
pub fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let hints: &[(&str, &str)] = if app.overlay.is_some() {
        &[("↑↓", "navigate"), ("Enter", "select"), ("Esc", "cancel")]
    } else if app.tui.editor.session.is_some() {
        &[
            ("Tab", "switch field"),
            ("Ctrl+S", "save"),
            ("Esc", "cancel"),
        ]
    } else {
        &[
            ("←→↑↓", "focus"),
            ("Enter", "edit"),
            ("s", "size"),
            ("c", "columns"),
            ("Alt+←→", "add widget"),
            ("Alt+↑↓", "add row"),
            ("q", "quit"),
        ]
    };

    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(format!(" {action}")));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Left),
        area,
    );

    // Document stats on the right.
    let stats = format!(
        "{} rows · {} widgets ",
        app.tui.document.rows.len(),
        app.tui.document.widget_count()
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            stats,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Right),
        area,
    );
}
