//! The board: the widget grid, its focus model, and insertion controls.

mod render;
mod state;
mod update;

pub use render::{render_board, row_heights, tag_color, widget_widths};
pub use state::BoardState;
pub use update::{BoardSignal, handle_key, sync_scroll};
