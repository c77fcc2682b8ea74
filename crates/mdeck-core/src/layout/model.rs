//! Layout data model: widgets, rows, and the document tree.

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::defaults;
use super::error::LayoutError;

/// Title given to widgets created by insertion.
pub(crate) const NEW_WIDGET_TITLE: &str = "New Widget";

// ============================================================================
// TextSize
// ============================================================================

/// Text size of a widget: visual scale and default content richness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Xs,
    #[default]
    Sm,
    Md,
    Lg,
    Xl,
}

impl TextSize {
    /// All sizes, smallest first.
    pub fn all() -> &'static [TextSize] {
        &[
            TextSize::Xs,
            TextSize::Sm,
            TextSize::Md,
            TextSize::Lg,
            TextSize::Xl,
        ]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TextSize::Xs => "Extra Small",
            TextSize::Sm => "Small",
            TextSize::Md => "Medium",
            TextSize::Lg => "Large",
            TextSize::Xl => "Extra Large",
        }
    }

    /// Short label used in badges ("xs", "sm", ...).
    pub fn label(self) -> &'static str {
        match self {
            TextSize::Xs => "xs",
            TextSize::Sm => "sm",
            TextSize::Md => "md",
            TextSize::Lg => "lg",
            TextSize::Xl => "xl",
        }
    }

    /// The canned Markdown shown when a widget of this size has no
    /// explicit content.
    pub fn default_content(self) -> &'static str {
        defaults::content_for(self)
    }
}

// ============================================================================
// ColumnSpan
// ============================================================================

/// Number of grid columns (of 3) a widget occupies.
///
/// Modeled as an enum so a stored document can never hold an out-of-range
/// span; raw integers enter only through the fallible conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum ColumnSpan {
    #[default]
    One,
    Two,
    Three,
}

impl ColumnSpan {
    pub fn all() -> &'static [ColumnSpan] {
        &[ColumnSpan::One, ColumnSpan::Two, ColumnSpan::Three]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ColumnSpan::One => "1 Column",
            ColumnSpan::Two => "2 Columns",
            ColumnSpan::Three => "3 Columns",
        }
    }

    /// Span as a column count, for grid math.
    pub fn columns(self) -> u32 {
        match self {
            ColumnSpan::One => 1,
            ColumnSpan::Two => 2,
            ColumnSpan::Three => 3,
        }
    }
}

impl TryFrom<u8> for ColumnSpan {
    type Error = LayoutError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ColumnSpan::One),
            2 => Ok(ColumnSpan::Two),
            3 => Ok(ColumnSpan::Three),
            other => Err(LayoutError::InvalidSpan(other)),
        }
    }
}

impl From<ColumnSpan> for u8 {
    fn from(span: ColumnSpan) -> Self {
        span.columns() as u8
    }
}

// ============================================================================
// ColorTag
// ============================================================================

/// Fixed color palette for widget cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Green,
    Yellow,
    Red,
    Purple,
    Pink,
    Indigo,
    Orange,
}

impl ColorTag {
    pub const ALL: [ColorTag; 8] = [
        ColorTag::Blue,
        ColorTag::Green,
        ColorTag::Yellow,
        ColorTag::Red,
        ColorTag::Purple,
        ColorTag::Pink,
        ColorTag::Indigo,
        ColorTag::Orange,
    ];

    /// Picks a palette color uniformly at random (for new widgets).
    pub fn random() -> Self {
        let idx = rand::rng().random_range(0..Self::ALL.len());
        Self::ALL[idx]
    }
}

// ============================================================================
// Identifiers
// ============================================================================

/// Opaque, unique widget identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    /// Generates a fresh collision-resistant id.
    pub fn generate() -> Self {
        Self(format!("w-{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque, unique row identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    /// Generates a fresh collision-resistant id.
    pub fn generate() -> Self {
        Self(format!("row-{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Widget / Row / Document
// ============================================================================

/// A single editable content card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: WidgetId,
    pub title: String,
    pub span: ColumnSpan,
    pub text_size: TextSize,
    pub color: ColorTag,
    /// Explicit Markdown body. `None` falls back to the size default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Widget {
    pub fn new(
        title: impl Into<String>,
        span: ColumnSpan,
        text_size: TextSize,
        color: ColorTag,
    ) -> Self {
        Self {
            id: WidgetId::generate(),
            title: title.into(),
            span,
            text_size,
            color,
            content: None,
        }
    }

    /// The widget created by the insertion operations: one column, small
    /// text, random palette color, default content.
    pub fn new_default() -> Self {
        Self::new(
            NEW_WIDGET_TITLE,
            ColumnSpan::One,
            TextSize::Sm,
            ColorTag::random(),
        )
    }

    /// The Markdown body to display: explicit content, or the canned
    /// default for the current text size.
    pub fn resolved_content(&self) -> &str {
        self.content
            .as_deref()
            .unwrap_or_else(|| self.text_size.default_content())
    }
}

/// A horizontal grouping of widgets sharing one grid line.
///
/// Invariant: a row always contains at least one widget. No operation
/// removes widgets, so the invariant only needs to hold at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    pub widgets: Vec<Widget>,
}

impl Row {
    pub fn new(widgets: Vec<Widget>) -> Self {
        debug_assert!(!widgets.is_empty(), "rows must hold at least one widget");
        Self {
            id: RowId::generate(),
            widgets,
        }
    }

    /// The row created by `insert_row`: a single default widget.
    pub fn new_default() -> Self {
        Self::new(vec![Widget::new_default()])
    }
}

/// The full ordered collection of rows at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub rows: Vec<Row>,
}

impl Document {
    /// The document shown at startup: two rows, four widgets.
    pub fn seed() -> Self {
        Self {
            rows: vec![
                Row::new(vec![
                    Widget::new(
                        "Quick Update",
                        ColumnSpan::One,
                        TextSize::Sm,
                        ColorTag::Blue,
                    ),
                    Widget::new(
                        "Detailed Report",
                        ColumnSpan::Two,
                        TextSize::Md,
                        ColorTag::Green,
                    ),
                ]),
                Row::new(vec![
                    Widget::new("Analysis", ColumnSpan::Two, TextSize::Lg, ColorTag::Yellow),
                    Widget::new("Note", ColumnSpan::One, TextSize::Xs, ColorTag::Red),
                ]),
            ],
        }
    }

    /// Looks up a widget anywhere in the document.
    pub fn widget(&self, id: &WidgetId) -> Option<&Widget> {
        self.rows
            .iter()
            .flat_map(|row| row.widgets.iter())
            .find(|w| w.id == *id)
    }

    /// Looks up a row by id.
    pub fn row(&self, id: &RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == *id)
    }

    /// Position of a widget as (row index, widget index).
    pub fn position_of(&self, id: &WidgetId) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(ri, row)| {
            row.widgets
                .iter()
                .position(|w| w.id == *id)
                .map(|wi| (ri, wi))
        })
    }

    pub fn widget_count(&self) -> usize {
        self.rows.iter().map(|row| row.widgets.len()).sum()
    }

    pub fn first_widget(&self) -> Option<&Widget> {
        self.rows.first().and_then(|row| row.widgets.first())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_span_try_from_accepts_grid_domain() {
        assert_eq!(ColumnSpan::try_from(1), Ok(ColumnSpan::One));
        assert_eq!(ColumnSpan::try_from(2), Ok(ColumnSpan::Two));
        assert_eq!(ColumnSpan::try_from(3), Ok(ColumnSpan::Three));
    }

    #[test]
    fn test_span_try_from_rejects_out_of_domain() {
        for raw in [0u8, 4, 255] {
            assert_eq!(ColumnSpan::try_from(raw), Err(LayoutError::InvalidSpan(raw)));
        }
    }

    #[test]
    fn test_span_serde_round_trips_as_integer() {
        let json = serde_json::to_string(&ColumnSpan::Two).unwrap();
        assert_eq!(json, "2");
        let span: ColumnSpan = serde_json::from_str("3").unwrap();
        assert_eq!(span, ColumnSpan::Three);
        assert!(serde_json::from_str::<ColumnSpan>("7").is_err());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: HashSet<String> = (0..1000)
            .map(|_| WidgetId::generate().as_str().to_string())
            .collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_id_prefixes() {
        assert!(WidgetId::generate().as_str().starts_with("w-"));
        assert!(RowId::generate().as_str().starts_with("row-"));
    }

    #[test]
    fn test_resolved_content_falls_back_to_size_default() {
        let mut widget = Widget::new("t", ColumnSpan::One, TextSize::Md, ColorTag::Blue);
        assert_eq!(widget.resolved_content(), TextSize::Md.default_content());

        widget.content = Some("custom".to_string());
        assert_eq!(widget.resolved_content(), "custom");
    }

    #[test]
    fn test_default_widget_shape() {
        let widget = Widget::new_default();
        assert_eq!(widget.title, "New Widget");
        assert_eq!(widget.span, ColumnSpan::One);
        assert_eq!(widget.text_size, TextSize::Sm);
        assert!(widget.content.is_none());
    }

    #[test]
    fn test_seed_document_shape() {
        let doc = Document::seed();
        assert_eq!(doc.rows.len(), 2);
        assert_eq!(doc.widget_count(), 4);
        assert_eq!(doc.rows[0].widgets[0].title, "Quick Update");
        assert_eq!(doc.rows[1].widgets[0].span, ColumnSpan::Two);
        // Seeded widgets rely on size defaults until edited.
        assert!(doc.rows.iter().flat_map(|r| &r.widgets).all(|w| w.content.is_none()));
    }

    #[test]
    fn test_random_color_is_from_palette() {
        for _ in 0..32 {
            let color = ColorTag::random();
            assert!(ColorTag::ALL.contains(&color));
        }
    }

    #[test]
    fn test_position_of_finds_widgets() {
        let doc = Document::seed();
        let id = doc.rows[1].widgets[1].id.clone();
        assert_eq!(doc.position_of(&id), Some((1, 1)));
        assert_eq!(doc.position_of(&WidgetId::generate()), None);
    }
}
