//! Board reducer: focus movement, insertions, and picker/editor requests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mdeck_core::layout::{HorizontalSide, VerticalSide};

use super::render::row_heights;
use crate::state::TuiState;

/// What the board asks the top-level reducer to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardSignal {
    None,
    Quit,
    OpenEditor,
    OpenSizePicker,
    OpenSpanPicker,
}

/// Handles a key press in board mode (no overlay, no edit session).
pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> BoardSignal {
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('q') => return BoardSignal::Quit,

        // Alt+arrows insert next to the focused widget.
        KeyCode::Left if alt => insert_widget(tui, HorizontalSide::Left),
        KeyCode::Right if alt => insert_widget(tui, HorizontalSide::Right),
        KeyCode::Up if alt => insert_row(tui, VerticalSide::Above),
        KeyCode::Down if alt => insert_row(tui, VerticalSide::Below),

        KeyCode::Left => move_focus(tui, Direction::Left),
        KeyCode::Right => move_focus(tui, Direction::Right),
        KeyCode::Up => move_focus(tui, Direction::Up),
        KeyCode::Down => move_focus(tui, Direction::Down),

        KeyCode::Enter | KeyCode::Char('e') => return BoardSignal::OpenEditor,
        KeyCode::Char('s') => return BoardSignal::OpenSizePicker,
        KeyCode::Char('c') => return BoardSignal::OpenSpanPicker,
        _ => {}
    }

    BoardSignal::None
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Left,
    Right,
    Up,
    Down,
}

fn move_focus(tui: &mut TuiState, direction: Direction) {
    let Some((row, idx)) = tui.board.focus_position(&tui.document) else {
        tui.board.focus = tui.document.first_widget().map(|w| w.id.clone());
        return;
    };

    let (next_row, next_idx) = match direction {
        Direction::Left if idx > 0 => (row, idx - 1),
        Direction::Right => (row, idx + 1),
        Direction::Up if row > 0 => (row - 1, clamp_idx(tui, row - 1, idx)),
        Direction::Down => (row + 1, clamp_idx(tui, row + 1, idx)),
        _ => return,
    };
    tui.board.focus_at(&tui.document, next_row, next_idx);
}

fn clamp_idx(tui: &TuiState, row: usize, idx: usize) -> usize {
    tui.document
        .rows
        .get(row)
        .map_or(0, |r| idx.min(r.widgets.len().saturating_sub(1)))
}

fn insert_widget(tui: &mut TuiState, side: HorizontalSide) {
    let Some((row, idx)) = tui.board.focus_position(&tui.document) else {
        return;
    };
    let anchor = tui.document.rows[row].widgets[idx].id.clone();
    tui.document = tui.document.insert_widget(&anchor, side);
    tracing::debug!(anchor = %anchor, ?side, "inserted widget");

    // Focus the freshly inserted widget.
    let new_idx = match side {
        HorizontalSide::Left => idx,
        HorizontalSide::Right => idx + 1,
    };
    tui.board.focus_at(&tui.document, row, new_idx);
}

fn insert_row(tui: &mut TuiState, side: VerticalSide) {
    let Some((row, _)) = tui.board.focus_position(&tui.document) else {
        return;
    };
    let anchor = tui.document.rows[row].id.clone();
    tui.document = tui.document.insert_row(&anchor, side);
    tracing::debug!(anchor = %anchor, ?side, "inserted row");

    let new_row = match side {
        VerticalSide::Above => row,
        VerticalSide::Below => row + 1,
    };
    tui.board.focus_at(&tui.document, new_row, 0);
}

/// Per-frame scroll housekeeping: keeps the focused row inside the
/// visible band given the current terminal size.
pub fn sync_scroll(tui: &mut TuiState, width: u16, height: u16) {
    let Some((focus_row, _)) = tui.board.focus_position(&tui.document) else {
        return;
    };
    // One line is reserved for the status bar.
    let board_height = height.saturating_sub(1);
    let heights = row_heights(&tui.document, width, tui.config.max_widget_height);

    let mut scroll = tui
        .board
        .scroll_row
        .min(heights.len().saturating_sub(1));
    if focus_row < scroll {
        scroll = focus_row;
    } else {
        while scroll < focus_row {
            let used: u16 = heights[scroll..=focus_row].iter().sum();
            if used <= board_height {
                break;
            }
            scroll += 1;
        }
    }
    tui.board.scroll_row = scroll;
}
