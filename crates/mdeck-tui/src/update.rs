//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! Key routing: the active overlay first, then an open edit session, then
//! the board. Document changes always go through the pure layout
//! operations; the reducer replaces the snapshot with their result.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::editor::EditSession;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::overlays::{Overlay, OverlayAction, OverlayTransition};
use crate::state::{AppState, TuiState};
use crate::{board, editor};

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::Frame { width, height } => {
            board::sync_scroll(&mut app.tui, width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            editor::handle_paste(&mut app.tui, &text);
            vec![]
        }
        // Resize re-renders on the next tick; layout is derived per frame.
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from any mode.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }

    // Route to the active overlay first.
    if let Some(overlay) = app.overlay.as_mut() {
        let overlay_update = overlay.handle_key(key);
        if let Some(action) = overlay_update.action {
            apply_overlay_action(&mut app.tui, action);
        }
        if overlay_update.transition == OverlayTransition::Close {
            app.overlay = None;
        }
        return vec![];
    }

    // Then an open edit session.
    if app.tui.editor.session.is_some() {
        return editor::handle_key(&mut app.tui, key);
    }

    // Otherwise the board.
    match board::handle_key(&mut app.tui, key) {
        board::BoardSignal::Quit => vec![UiEffect::Quit],
        board::BoardSignal::OpenEditor => {
            if let Some(widget) = app.tui.board.focused_widget(&app.tui.document) {
                app.tui.editor.session = Some(EditSession::open(widget));
            }
            vec![]
        }
        board::BoardSignal::OpenSizePicker => {
            if let Some(widget) = app.tui.board.focused_widget(&app.tui.document) {
                app.overlay = Some(Overlay::SizePicker(
                    crate::overlays::SizePickerState::open(widget.text_size),
                ));
            }
            vec![]
        }
        board::BoardSignal::OpenSpanPicker => {
            if let Some(widget) = app.tui.board.focused_widget(&app.tui.document) {
                app.overlay = Some(Overlay::SpanPicker(
                    crate::overlays::SpanPickerState::open(widget.span),
                ));
            }
            vec![]
        }
        board::BoardSignal::None => vec![],
    }
}

/// Applies a picker selection to the focused widget. Size and span
/// selections take effect immediately; no edit session is involved.
fn apply_overlay_action(tui: &mut TuiState, action: OverlayAction) {
    let Some(id) = tui.board.focus.clone() else {
        return;
    };
    match action {
        OverlayAction::ApplyTextSize(size) => {
            tui.document = tui.document.set_text_size(&id, size);
        }
        OverlayAction::ApplyColumnSpan(span) => {
            tui.document = tui.document.set_column_span(&id, span);
        }
    }
}

#[cfg(test)]
mod tests {
    use mdeck_core::config::Config;
    use mdeck_core::layout::{ColumnSpan, TextSize};

    use super::*;

    fn app() -> AppState {
        AppState::new(Config::default())
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        press_with(app, code, KeyModifiers::NONE)
    }

    fn press_with(app: &mut AppState, code: KeyCode, mods: KeyModifiers) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, mods))),
        )
    }

    fn type_str(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_quit_paths() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), vec![UiEffect::Quit]);

        let mut app = self::app();
        assert_eq!(
            press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL),
            vec![UiEffect::Quit]
        );
    }

    #[test]
    fn test_edit_then_cancel_leaves_document_identical() {
        let mut app = app();
        let before = app.tui.document.clone();

        press(&mut app, KeyCode::Enter);
        assert!(app.tui.editor.session.is_some());
        type_str(&mut app, "scratch that");
        press(&mut app, KeyCode::Esc);

        assert!(app.tui.editor.session.is_none());
        assert_eq!(app.tui.document, before);
    }

    #[test]
    fn test_edit_then_save_updates_exactly_title_and_content() {
        let mut app = app();
        let before = app.tui.document.clone();
        let focus_id = app.tui.board.focus.clone().unwrap();

        press(&mut app, KeyCode::Enter);
        // Rewrite the title, then switch to the body and rewrite it too.
        {
            let session = app.tui.editor.session.as_mut().unwrap();
            session.title = crate::common::TextBuffer::from_text("");
            session.content = crate::common::TextBuffer::from_text("");
        }
        type_str(&mut app, "Fresh Title");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "# Fresh body");
        press_with(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert!(app.tui.editor.session.is_none());
        let widget = app.tui.document.widget(&focus_id).unwrap();
        let old = before.widget(&focus_id).unwrap();
        assert_eq!(widget.title, "Fresh Title");
        assert_eq!(widget.content.as_deref(), Some("# Fresh body"));
        assert_eq!(widget.span, old.span);
        assert_eq!(widget.text_size, old.text_size);
        assert_eq!(widget.color, old.color);
        // Nothing else in the document moved.
        assert_eq!(app.tui.document.rows.len(), before.rows.len());
        assert_eq!(app.tui.document.widget_count(), before.widget_count());
    }

    #[test]
    fn test_title_edit_seeds_from_current_value() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        let session = app.tui.editor.session.as_ref().unwrap();
        assert_eq!(session.title.text(), "Quick Update");
        assert_eq!(session.content.text(), TextSize::Sm.default_content());
    }

    #[test]
    fn test_size_picker_applies_immediately_and_resets_content() {
        let mut app = app();
        let focus_id = app.tui.board.focus.clone().unwrap();

        press(&mut app, KeyCode::Char('s'));
        assert!(matches!(app.overlay, Some(Overlay::SizePicker(_))));

        // Current size is Sm (index 1); move to Xl and confirm.
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert!(app.overlay.is_none());
        let widget = app.tui.document.widget(&focus_id).unwrap();
        assert_eq!(widget.text_size, TextSize::Xl);
        assert_eq!(widget.resolved_content(), TextSize::Xl.default_content());
    }

    #[test]
    fn test_span_picker_applies_to_focused_widget() {
        let mut app = app();
        let focus_id = app.tui.board.focus.clone().unwrap();

        press(&mut app, KeyCode::Char('c'));
        assert!(matches!(app.overlay, Some(Overlay::SpanPicker(_))));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        let widget = app.tui.document.widget(&focus_id).unwrap();
        assert_eq!(widget.span, ColumnSpan::Two);
    }

    #[test]
    fn test_picker_esc_changes_nothing() {
        let mut app = app();
        let before = app.tui.document.clone();

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Esc);

        assert!(app.overlay.is_none());
        assert_eq!(app.tui.document, before);
    }

    #[test]
    fn test_overlay_captures_keys_from_the_board() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        // 'q' quits on the board but is inert inside a picker.
        assert!(press(&mut app, KeyCode::Char('q')).is_empty());
        assert!(matches!(app.overlay, Some(Overlay::SizePicker(_))));
    }

    #[test]
    fn test_insertions_via_alt_arrows() {
        let mut app = app();
        press_with(&mut app, KeyCode::Right, KeyModifiers::ALT);
        assert_eq!(app.tui.document.rows[0].widgets.len(), 3);

        press_with(&mut app, KeyCode::Up, KeyModifiers::ALT);
        assert_eq!(app.tui.document.rows.len(), 3);
    }

    #[test]
    fn test_paste_goes_into_the_active_buffer() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        {
            let session = app.tui.editor.session.as_mut().unwrap();
            session.content = crate::common::TextBuffer::from_text("");
        }
        update(
            &mut app,
            UiEvent::Terminal(Event::Paste("pasted\ntext".to_string())),
        );
        let session = app.tui.editor.session.as_ref().unwrap();
        assert_eq!(session.content.text(), "pasted\ntext");
    }

    #[test]
    fn test_frame_event_scrolls_board_to_focus() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        update(&mut app, UiEvent::Frame { width: 80, height: 10 });
        assert_eq!(app.tui.board.scroll_row, 1);
    }
}
