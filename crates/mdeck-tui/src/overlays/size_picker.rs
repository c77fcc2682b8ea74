//! Text size picker: five options, applied to the focused widget on Enter.

use crossterm::event::{KeyCode, KeyEvent};
use mdeck_core::layout::TextSize;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};

use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use super::{OverlayAction, OverlayUpdate};

#[derive(Debug, Clone)]
pub struct SizePickerState {
    pub selected: usize,
}

impl SizePickerState {
    /// Opens the picker with the widget's current size highlighted.
    pub fn open(current: TextSize) -> Self {
        let selected = TextSize::all()
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
                if self.selected < TextSize::all().len() - 1 {
                    self.selected += 1;
                }
                OverlayUpdate::stay()
            }
            KeyCode::Enter => {
                let Some(&size) = TextSize::all().get(self.selected) else {
                    return OverlayUpdate::close();
                };
                OverlayUpdate::close().with_action(OverlayAction::ApplyTextSize(size))
            }
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let sizes = TextSize::all();

        let hints = [
            InputHint::new("↑↓", "navigate"),
            InputHint::new("Enter", "select"),
            InputHint::new("Esc", "cancel"),
        ];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Text Size",
                border_color: Color::Cyan,
                width: 36,
                height: sizes.len() as u16 + 4,
                hints: &hints,
            },
        );

        let items: Vec<ListItem> = sizes
            .iter()
            .map(|&size| {
                let name = format!("{:<12}", size.display_name());
                let label_width = layout.body.width.saturating_sub(2 + 12) as usize;
                let label = format!("{:>label_width$}", size.label());
                ListItem::new(Line::from(vec![
                    Span::styled(
                        name,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(label, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Color::Cyan)
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
    fn test_opens_on_current_size() {
        let picker = SizePickerState::open(TextSize::Lg);
        assert_eq!(picker.selected, 3);
    }

    #[test]
    fn test_navigation_clamps_at_edges() {
        let mut picker = SizePickerState::open(TextSize::Xs);
        picker.handle_key(key(KeyCode::Up));
        assert_eq!(picker.selected, 0);

        let mut picker = SizePickerState::open(TextSize::Xl);
        picker.handle_key(key(KeyCode::Down));
        assert_eq!(picker.selected, TextSize::all().len() - 1);
    }

    #[test]
    fn test_enter_applies_selection_and_closes() {
        let mut picker = SizePickerState::open(TextSize::Xs);
        picker.handle_key(key(KeyCode::Down));
        let update = picker.handle_key(key(KeyCode::Enter));

        assert_eq!(update.transition, OverlayTransition::Close);
        assert_eq!(
            update.action,
            Some(OverlayAction::ApplyTextSize(TextSize::Sm))
        );
    }

    #[test]
    fn test_esc_closes_without_action() {
        let mut picker = SizePickerState::open(TextSize::Md);
        let update = picker.handle_key(key(KeyCode::Esc));
        assert_eq!(update.transition, OverlayTransition::Close);
        assert!(update.action.is_none());
    }
}
