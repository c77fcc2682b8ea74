//! Document mutation operations.
//!
//! Each operation is a pure transform: it reads the current snapshot and
//! returns the next one. Unknown ids degrade to a no-op (the result is
//! equal to the input), matching the silent-miss contract of the UI layer.

use serde::{Deserialize, Serialize};

use super::model::{ColumnSpan, Document, Row, RowId, TextSize, Widget, WidgetId};

/// Side of an anchor widget, within its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalSide {
    Left,
    Right,
}

/// Side of an anchor row, within the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalSide {
    Above,
    Below,
}

/// Partial widget update applied by `update_widget`.
///
/// Absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Document {
    /// Sets the text size of a widget and resets its content to the size
    /// default (any custom body is discarded).
    pub fn set_text_size(&self, id: &WidgetId, size: TextSize) -> Document {
        self.map_widget(id, |widget| {
            widget.text_size = size;
            widget.content = None;
        })
    }

    /// Sets the column span of a widget.
    ///
    /// `ColumnSpan` is validated at the type boundary
    /// (`ColumnSpan::try_from`), so every reachable value here is legal.
    pub fn set_column_span(&self, id: &WidgetId, span: ColumnSpan) -> Document {
        self.map_widget(id, |widget| widget.span = span)
    }

    /// Merges a patch into a widget, leaving unmentioned fields untouched.
    pub fn update_widget(&self, id: &WidgetId, patch: WidgetPatch) -> Document {
        self.map_widget(id, |widget| {
            if let Some(title) = patch.title {
                widget.title = title;
            }
            if let Some(content) = patch.content {
                widget.content = Some(content);
            }
        })
    }

    /// Inserts a default widget next to the anchor, within the anchor's
    /// row only.
    pub fn insert_widget(&self, anchor: &WidgetId, side: HorizontalSide) -> Document {
        let mut next = self.clone();
        for row in &mut next.rows {
            if let Some(idx) = row.widgets.iter().position(|w| w.id == *anchor) {
                let at = match side {
                    HorizontalSide::Left => idx,
                    HorizontalSide::Right => idx + 1,
                };
                row.widgets.insert(at, Widget::new_default());
                break;
            }
        }
        next
    }

    /// Inserts a new row (holding one default widget) next to the anchor
    /// row.
    pub fn insert_row(&self, anchor: &RowId, side: VerticalSide) -> Document {
        let mut next = self.clone();
        if let Some(idx) = next.rows.iter().position(|row| row.id == *anchor) {
            let at = match side {
                VerticalSide::Above => idx,
                VerticalSide::Below => idx + 1,
            };
            next.rows.insert(at, Row::new_default());
        }
        next
    }

    fn map_widget(&self, id: &WidgetId, apply: impl FnOnce(&mut Widget)) -> Document {
        let mut next = self.clone();
        if let Some(widget) = next
            .rows
            .iter_mut()
            .flat_map(|row| row.widgets.iter_mut())
            .find(|w| w.id == *id)
        {
            apply(widget);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::super::model::ColorTag;
    use super::*;

    fn sample() -> Document {
        Document::seed()
    }

    fn widget_id(doc: &Document, row: usize, idx: usize) -> WidgetId {
        doc.rows[row].widgets[idx].id.clone()
    }

    #[test]
    fn test_unknown_id_is_a_noop_for_every_operation() {
        let doc = sample();
        let ghost_widget = WidgetId::generate();
        let ghost_row = RowId::generate();

        assert_eq!(doc.set_text_size(&ghost_widget, TextSize::Xl), doc);
        assert_eq!(doc.set_column_span(&ghost_widget, ColumnSpan::Three), doc);
        assert_eq!(
            doc.update_widget(
                &ghost_widget,
                WidgetPatch {
                    title: Some("x".into()),
                    content: Some("y".into()),
                },
            ),
            doc
        );
        assert_eq!(doc.insert_widget(&ghost_widget, HorizontalSide::Left), doc);
        assert_eq!(doc.insert_row(&ghost_row, VerticalSide::Below), doc);
    }

    #[test]
    fn test_set_text_size_resets_content_to_size_default() {
        // Widget at (1, 1) starts at Xs.
        let doc = sample();
        let id = widget_id(&doc, 1, 1);
        assert_eq!(doc.widget(&id).unwrap().text_size, TextSize::Xs);

        let next = doc.set_text_size(&id, TextSize::Lg);
        let widget = next.widget(&id).unwrap();
        assert_eq!(widget.text_size, TextSize::Lg);
        assert_eq!(widget.resolved_content(), TextSize::Lg.default_content());
    }

    #[test]
    fn test_set_text_size_discards_custom_content() {
        let doc = sample();
        let id = widget_id(&doc, 0, 0);
        let doc = doc.update_widget(
            &id,
            WidgetPatch {
                title: None,
                content: Some("hand-written".into()),
            },
        );

        let next = doc.set_text_size(&id, TextSize::Md);
        assert_eq!(next.widget(&id).unwrap().content, None);
    }

    #[test]
    fn test_set_text_size_is_idempotent() {
        let doc = sample();
        let id = widget_id(&doc, 0, 0);

        let once = doc.set_text_size(&id, TextSize::Xl);
        let twice = once.set_text_size(&id, TextSize::Xl);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_set_column_span_touches_only_the_span() {
        let doc = sample();
        let id = widget_id(&doc, 0, 0);

        let next = doc.set_column_span(&id, ColumnSpan::Three);
        let before = doc.widget(&id).unwrap();
        let after = next.widget(&id).unwrap();
        assert_eq!(after.span, ColumnSpan::Three);
        assert_eq!(after.title, before.title);
        assert_eq!(after.text_size, before.text_size);
        assert_eq!(after.content, before.content);
    }

    #[test]
    fn test_update_widget_merges_only_given_fields() {
        let doc = sample();
        let id = widget_id(&doc, 0, 1);
        let original = doc.widget(&id).unwrap().clone();

        let next = doc.update_widget(
            &id,
            WidgetPatch {
                title: Some("Renamed".into()),
                content: None,
            },
        );
        let widget = next.widget(&id).unwrap();
        assert_eq!(widget.title, "Renamed");
        assert_eq!(widget.content, original.content);
        assert_eq!(widget.span, original.span);
        assert_eq!(widget.text_size, original.text_size);
        assert_eq!(widget.color, original.color);
    }

    #[test]
    fn test_insert_widget_left_of_anchor() {
        // Row 0 is [w1, w2]; inserting left of w1 gives [new, w1, w2].
        let doc = sample();
        let w1 = widget_id(&doc, 0, 0);
        let w2 = widget_id(&doc, 0, 1);

        let next = doc.insert_widget(&w1, HorizontalSide::Left);
        let row = &next.rows[0];
        assert_eq!(row.widgets.len(), 3);
        assert_eq!(row.widgets[1].id, w1);
        assert_eq!(row.widgets[2].id, w2);
        assert_eq!(row.widgets[0].title, "New Widget");
        assert_eq!(row.widgets[0].text_size, TextSize::Sm);
        assert_eq!(row.widgets[0].span, ColumnSpan::One);
        assert!(ColorTag::ALL.contains(&row.widgets[0].color));
    }

    #[test]
    fn test_insert_widget_right_of_anchor() {
        let doc = sample();
        let w1 = widget_id(&doc, 0, 0);
        let w2 = widget_id(&doc, 0, 1);

        let next = doc.insert_widget(&w1, HorizontalSide::Right);
        let row = &next.rows[0];
        assert_eq!(row.widgets.len(), 3);
        assert_eq!(row.widgets[0].id, w1);
        assert_eq!(row.widgets[1].title, "New Widget");
        assert_eq!(row.widgets[2].id, w2);
    }

    #[test]
    fn test_insert_widget_leaves_other_rows_untouched() {
        let doc = sample();
        let anchor = widget_id(&doc, 0, 0);

        let next = doc.insert_widget(&anchor, HorizontalSide::Right);
        assert_eq!(next.rows[0].widgets.len(), doc.rows[0].widgets.len() + 1);
        assert_eq!(next.rows[1], doc.rows[1]);
    }

    #[test]
    fn test_insert_row_below_anchor() {
        // Rows are [row1, row2]; inserting below row1 gives
        // [row1, new, row2].
        let doc = sample();
        let row1 = doc.rows[0].id.clone();
        let row2 = doc.rows[1].id.clone();

        let next = doc.insert_row(&row1, VerticalSide::Below);
        assert_eq!(next.rows.len(), 3);
        assert_eq!(next.rows[0].id, row1);
        assert_eq!(next.rows[2].id, row2);

        let inserted = &next.rows[1];
        assert_eq!(inserted.widgets.len(), 1);
        assert_eq!(inserted.widgets[0].span, ColumnSpan::One);
        assert_eq!(inserted.widgets[0].text_size, TextSize::Sm);
    }

    #[test]
    fn test_insert_row_above_anchor() {
        let doc = sample();
        let row1 = doc.rows[0].id.clone();

        let next = doc.insert_row(&row1, VerticalSide::Above);
        assert_eq!(next.rows.len(), 3);
        assert_eq!(next.rows[1].id, row1);
        assert_eq!(next.rows[0].widgets.len(), 1);
    }

    #[test]
    fn test_insert_row_leaves_existing_widget_sequences_unchanged() {
        let doc = sample();
        let anchor = doc.rows[0].id.clone();

        let next = doc.insert_row(&anchor, VerticalSide::Below);
        assert_eq!(next.rows[0].widgets, doc.rows[0].widgets);
        assert_eq!(next.rows[2].widgets, doc.rows[1].widgets);
    }

    #[test]
    fn test_operations_never_mutate_the_receiver() {
        let doc = sample();
        let snapshot = doc.clone();
        let id = widget_id(&doc, 0, 0);
        let row_id = doc.rows[0].id.clone();

        let _ = doc.set_text_size(&id, TextSize::Xl);
        let _ = doc.set_column_span(&id, ColumnSpan::Two);
        let _ = doc.insert_widget(&id, HorizontalSide::Left);
        let _ = doc.insert_row(&row_id, VerticalSide::Above);
        assert_eq!(doc, snapshot);
    }
}
