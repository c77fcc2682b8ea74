//! UI effect types.
//!
//! Effects are commands returned by the reducer for the runtime to
//! execute. The reducer stays pure: it mutates state and returns effects,
//! never touches the terminal or process itself. The dashboard performs no
//! I/O after startup, so the only runtime command is quitting.

/// Effects returned by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,
}
