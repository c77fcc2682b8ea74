//! Full-screen TUI implementation for mdeck: a 3-column grid of editable
//! Markdown widget cards.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod markdown;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use features::{board, editor, statusline};
use mdeck_core::config::Config;
pub use runtime::DashboardRuntime;

/// Runs the interactive dashboard loop.
pub fn run_dashboard(config: Config) -> Result<()> {
    // The dashboard requires a terminal to render into.
    if !stderr().is_terminal() {
        anyhow::bail!("mdeck requires a terminal.");
    }

    let mut runtime = DashboardRuntime::new(config)?;
    runtime.run()
}
