//! The layout store: documents, rows, widgets, and the operations that
//! derive new document snapshots from user intents.
//!
//! ## Module Structure
//!
//! - `model.rs` - the data model (`Document`, `Row`, `Widget`, enums, ids)
//! - `ops.rs` - pure mutation operations (`Document` methods returning a
//!   fresh `Document`)
//! - `defaults.rs` - canned Markdown defaults per text size
//! - `error.rs` - validation errors
//!
//! ## Snapshot Discipline
//!
//! A `Document` is an immutable value. Every operation takes `&self` and
//! returns the next snapshot; the caller owns the single mutable slot that
//! holds "the current document". Operations referencing an unknown widget
//! or row id return a document equal to the input.

mod defaults;
mod error;
mod model;
mod ops;

pub use error::LayoutError;
pub use model::{ColorTag, ColumnSpan, Document, Row, RowId, TextSize, Widget, WidgetId};
pub use ops::{HorizontalSide, VerticalSide, WidgetPatch};
