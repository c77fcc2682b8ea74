//! Editor state: the transient edit session.

use mdeck_core::layout::{Widget, WidgetId};

use crate::common::TextBuffer;

/// Widget editor state. At most one session is open at a time.
#[derive(Default)]
pub struct EditorState {
    pub session: Option<EditSession>,
}

/// Which field the editor's keystrokes go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Title,
    Content,
}

/// A transient edit session for one widget.
///
/// Buffers are seeded from the widget when the session opens; the document
/// is only touched on save. Cancelling drops the buffers unseen.
pub struct EditSession {
    pub widget_id: WidgetId,
    pub title: TextBuffer,
    pub content: TextBuffer,
    pub field: EditField,
}

impl EditSession {
    /// Opens a session seeded from the widget's current title and its
    /// resolved content (the size default when no explicit body exists).
    pub fn open(widget: &Widget) -> Self {
        Self {
            widget_id: widget.id.clone(),
            title: TextBuffer::from_text(&widget.title),
            content: TextBuffer::from_text(widget.resolved_content()),
            field: EditField::Title,
        }
    }

    pub fn active_buffer_mut(&mut self) -> &mut TextBuffer {
        match self.field {
            EditField::Title => &mut self.title,
            EditField::Content => &mut self.content,
        }
    }

    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            EditField::Title => EditField::Content,
            EditField::Content => EditField::Title,
        };
    }
}

#[cfg(test)]
mod tests {
    use mdeck_core::layout::{ColorTag, ColumnSpan, TextSize, Widget};

    use super::*;

    #[test]
    fn test_open_seeds_from_widget() {
        let widget = Widget::new("My Card", ColumnSpan::One, TextSize::Sm, ColorTag::Blue);
        let session = EditSession::open(&widget);

        assert_eq!(session.title.text(), "My Card");
        // No explicit content: the buffer holds the size default.
        assert_eq!(session.content.text(), TextSize::Sm.default_content());
        assert_eq!(session.field, EditField::Title);
    }

    #[test]
    fn test_open_prefers_explicit_content() {
        let mut widget = Widget::new("t", ColumnSpan::One, TextSize::Sm, ColorTag::Blue);
        widget.content = Some("hand-written".into());
        let session = EditSession::open(&widget);
        assert_eq!(session.content.text(), "hand-written");
    }

    #[test]
    fn test_toggle_field_cycles() {
        let widget = Widget::new("t", ColumnSpan::One, TextSize::Sm, ColorTag::Blue);
        let mut session = EditSession::open(&widget);
        session.toggle_field();
        assert_eq!(session.field, EditField::Content);
        session.toggle_field();
        assert_eq!(session.field, EditField::Title);
    }
}
