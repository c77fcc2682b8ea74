//! Editor reducer: keystrokes into the active buffer, save and cancel.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mdeck_core::layout::WidgetPatch;

use super::state::EditField;
use crate::common::CursorMove;
use crate::effects::UiEffect;
use crate::state::TuiState;

/// Handles a key press while an edit session is open.
pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    let Some(session) = tui.editor.session.as_mut() else {
        return vec![];
    };
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        // Cancel: drop the buffers, document untouched.
        KeyCode::Esc => {
            tui.editor.session = None;
        }
        // Save: copy both buffers into the widget and close.
        KeyCode::Char('s') if ctrl => save(tui),

        KeyCode::Tab | KeyCode::BackTab => session.toggle_field(),

        // Enter advances from the single-line title into the body.
        KeyCode::Enter => match session.field {
            EditField::Title => session.field = EditField::Content,
            EditField::Content => session.content.insert_newline(),
        },

        KeyCode::Backspace => session.active_buffer_mut().delete_prev_char(),
        KeyCode::Delete => session.active_buffer_mut().delete_next_char(),
        KeyCode::Left => session.active_buffer_mut().move_cursor(CursorMove::Back),
        KeyCode::Right => session.active_buffer_mut().move_cursor(CursorMove::Forward),
        KeyCode::Up => session.active_buffer_mut().move_cursor(CursorMove::Up),
        KeyCode::Down => session.active_buffer_mut().move_cursor(CursorMove::Down),
        KeyCode::Home => session.active_buffer_mut().move_cursor(CursorMove::Head),
        KeyCode::End => session.active_buffer_mut().move_cursor(CursorMove::End),

        KeyCode::Char(ch) if !ctrl => session.active_buffer_mut().insert_char(ch),
        _ => {}
    }

    vec![]
}

/// Routes pasted text into the active buffer.
pub fn handle_paste(tui: &mut TuiState, text: &str) {
    if let Some(session) = tui.editor.session.as_mut() {
        // Titles are single-line; pasted newlines become spaces there.
        match session.field {
            EditField::Title => session.title.insert_str(&text.replace('\n', " ")),
            EditField::Content => session.content.insert_str(text),
        }
    }
}

fn save(tui: &mut TuiState) {
    let Some(session) = tui.editor.session.take() else {
        return;
    };
    let patch = WidgetPatch {
        title: Some(session.title.text()),
        content: Some(session.content.text()),
    };
    tui.document = tui.document.update_widget(&session.widget_id, patch);
    tracing::debug!(widget = %session.widget_id, "saved widget edit");
}
