//! Application state composition.
//!
//! Top-level state hierarchy for the TUI:
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── document: Document     (the current layout snapshot)
//! │   ├── board: BoardState      (focus, scroll)
//! │   ├── editor: EditorState    (transient edit session)
//! │   └── config: Config
//! └── overlay: Option<Overlay>   (modal pickers)
//! ```
//!
//! State is split between `TuiState` and `Option<Overlay>` so overlay
//! handlers can take `&mut self` and read `TuiState` without borrow
//! conflicts.
//!
//! The `document` field is the single mutable slot for layout snapshots:
//! reducers replace it with the value returned by a layout operation and
//! never mutate a snapshot in place.

use mdeck_core::config::Config;
use mdeck_core::layout::Document;

use crate::board::BoardState;
use crate::editor::EditorState;
use crate::overlays::Overlay;

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    /// Creates the startup state: seeded document, focus on the first
    /// widget, no edit session, no overlay.
    pub fn new(config: Config) -> Self {
        Self {
            tui: TuiState::new(config),
            overlay: None,
        }
    }
}

/// TUI application state (non-overlay).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// The current layout snapshot.
    pub document: Document,
    /// Board focus and scroll state.
    pub board: BoardState,
    /// Widget editor state.
    pub editor: EditorState,
    /// Application configuration.
    pub config: Config,
}

impl TuiState {
    pub fn new(config: Config) -> Self {
        let document = Document::seed();
        let board = BoardState::new(&document);
        Self {
            should_quit: false,
            document,
            board,
            editor: EditorState::default(),
            config,
        }
    }
}
