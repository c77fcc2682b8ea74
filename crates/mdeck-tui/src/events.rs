//! UI event types.
//!
//! All inputs to the TUI are converted to `UiEvent` before being processed
//! by the reducer. With no asynchronous collaborators, the event set is
//! terminal input plus the render tick and the per-frame layout event.

use crossterm::event::Event as CrosstermEvent;

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick; the only event that triggers a render.
    Tick,

    /// Frame event for per-frame state updates (board scroll sync).
    ///
    /// Emitted once per loop iteration before other events are processed,
    /// carrying the current terminal dimensions.
    Frame { width: u16, height: u16 },

    /// Terminal input event (key, paste, resize).
    Terminal(CrosstermEvent),
}
