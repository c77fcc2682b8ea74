//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::state::AppState;
use crate::{board, editor, statusline};

/// Height of the status line below the board.
const STATUS_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .split(area);

    board::render_board(&app.tui, frame, chunks[0]);

    // Modal layers over the board: the edit panel, then any picker.
    editor::render_editor(&app.tui, frame, chunks[0]);
    if let Some(overlay) = &app.overlay {
        overlay.render(frame, chunks[0]);
    }

    statusline::render_status_line(app, frame, chunks[1]);
}
