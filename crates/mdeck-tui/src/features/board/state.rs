//! Board focus and scroll state.

use mdeck_core::layout::{Document, Widget, WidgetId};

/// Focus and scroll state for the widget grid.
///
/// Focus is tracked by widget id, not position: ids stay stable across
/// insertions, so the focused card never silently shifts under the user.
pub struct BoardState {
    /// Id of the widget keyboard affordances act on.
    pub focus: Option<WidgetId>,
    /// Index of the first rendered row.
    pub scroll_row: usize,
}

impl BoardState {
    pub fn new(document: &Document) -> Self {
        Self {
            focus: document.first_widget().map(|w| w.id.clone()),
            scroll_row: 0,
        }
    }

    /// Position of the focused widget as (row index, widget index).
    pub fn focus_position(&self, document: &Document) -> Option<(usize, usize)> {
        self.focus.as_ref().and_then(|id| document.position_of(id))
    }

    pub fn focused_widget<'a>(&self, document: &'a Document) -> Option<&'a Widget> {
        self.focus.as_ref().and_then(|id| document.widget(id))
    }

    /// Moves focus to the widget at (row, idx), if it exists.
    pub fn focus_at(&mut self, document: &Document, row: usize, idx: usize) {
        if let Some(widget) = document.rows.get(row).and_then(|r| r.widgets.get(idx)) {
            self.focus = Some(widget.id.clone());
        }
    }
}
