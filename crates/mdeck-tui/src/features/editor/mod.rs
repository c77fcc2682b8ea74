//! The widget editor: a modal session over the focused widget's title and
//! Markdown body.

mod render;
mod state;
mod update;

pub use render::render_editor;
pub use state::{EditField, EditSession, EditorState};
pub use update::{handle_key, handle_paste};
