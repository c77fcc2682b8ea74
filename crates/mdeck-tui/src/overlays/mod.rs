//! Modal overlays: pickers that temporarily take over keyboard input.
//!
//! Each overlay owns its state, key handler, and render function. The
//! top-level reducer routes keys to the active overlay first and applies
//! whatever action the overlay returns to the focused widget.

pub mod render_utils;
pub mod size_picker;
pub mod span_picker;

use crossterm::event::KeyEvent;
use mdeck_core::layout::{ColumnSpan, TextSize};
use ratatui::Frame;
use ratatui::layout::Rect;
pub use size_picker::SizePickerState;
pub use span_picker::SpanPickerState;

/// Requests to open an overlay, produced by the board reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayRequest {
    SizePicker,
    SpanPicker,
}

/// Transition returned by overlay key handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// A document mutation selected inside an overlay, applied by the
/// top-level reducer to the focused widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    ApplyTextSize(TextSize),
    ApplyColumnSpan(ColumnSpan),
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub action: Option<OverlayAction>,
}

impl OverlayUpdate {
    pub fn stay() -> Self {
        Self {
            transition: OverlayTransition::Stay,
            action: None,
        }
    }

    pub fn close() -> Self {
        Self {
            transition: OverlayTransition::Close,
            action: None,
        }
    }

    #[must_use]
    pub fn with_action(mut self, action: OverlayAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// The active modal overlay.
#[derive(Debug)]
pub enum Overlay {
    SizePicker(SizePickerState),
    SpanPicker(SpanPickerState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::SizePicker(p) => p.render(frame, area),
            Overlay::SpanPicker(p) => p.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::SizePicker(p) => p.handle_key(key),
            Overlay::SpanPicker(p) => p.handle_key(key),
        }
    }
}
