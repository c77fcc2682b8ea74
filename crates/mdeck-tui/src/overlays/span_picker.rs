//! Column span picker: one to three grid columns for the focused widget.

use crossterm::event::{KeyCode, KeyEvent};
use mdeck_core::layout::ColumnSpan;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};

use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use super::{OverlayAction, OverlayUpdate};

#[derive(Debug, Clone)]
pub struct SpanPickerState {
    pub selected: usize,
}

impl SpanPickerState {
    /// Opens the picker with the widget's current span highlighted.
    pub fn open(current: ColumnSpan) -> Self {
        let selected = ColumnSpan::all()
            .iter()
            .position(|&s| s == current)
            .unwrap_or(0);
        Self { selected }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
                OverlayUpdate::stay()
            }
            KeyCode::Down => {
                if self.selected < ColumnSpan::all().len() - 1 {
                    self.selected += 1;
                }
                OverlayUpdate::stay()
            }
            KeyCode::Enter => {
                let Some(&span) = ColumnSpan::all().get(self.selected) else {
                    return OverlayUpdate::close();
                };
                OverlayUpdate::close().with_action(OverlayAction::ApplyColumnSpan(span))
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let spans = ColumnSpan::all();

        let hints = [
            InputHint::new("↑↓", "navigate"),
            InputHint::new("Enter", "select"),
            InputHint::new("Esc", "cancel"),
        ];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Column Span",
                border_color: Color::Magenta,
                width: 36,
                height: spans.len() as u16 + 4,
                hints: &hints,
            },
        );

        let items: Vec<ListItem> = spans
            .iter()
            .map(|&span| {
                let bar_width = span.columns() as usize;
                let bar = "█".repeat(bar_width * 3);
                let name = format!("{:<12}", span.display_name());
                ListItem::new(Line::from(vec![
                    Span::styled(
                        name,
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(bar, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Color::Magenta)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        frame.render_stateful_widget(list, layout.body, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::overlays::OverlayTransition;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_opens_on_current_span() {
        let picker = SpanPickerState::open(ColumnSpan::Three);
        assert_eq!(picker.selected, 2);
    }

    #[test]
    fn test_enter_applies_selection() {
        let mut picker = SpanPickerState::open(ColumnSpan::One);
        picker.handle_key(key(KeyCode::Down));
        let update = picker.handle_key(key(KeyCode::Enter));

        assert_eq!(update.transition, OverlayTransition::Close);
        assert_eq!(
            update.action,
            Some(OverlayAction::ApplyColumnSpan(ColumnSpan::Two))
        );
    }
}
