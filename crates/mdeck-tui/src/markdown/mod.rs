//! Markdown parsing and rendering for widget bodies.
//!
//! `render_markdown()` parses Markdown with pulldown-cmark and produces
//! width-wrapped, semantically styled lines. Styles are UI-agnostic; the
//! board renderer maps them to terminal styles.
//!
//! HTML and inline HTML events are skipped: widget bodies are displayed,
//! never interpreted.

mod parse;
mod style;
mod wrap;

pub use parse::render_markdown;
pub use style::{Style, StyledLine, StyledSpan};
pub use wrap::{WrapOptions, wrap_styled_spans};
