//! Shared utilities for the TUI.

pub mod text;
pub mod text_buffer;

pub use text::truncate_with_ellipsis;
pub use text_buffer::{CursorMove, TextBuffer};
