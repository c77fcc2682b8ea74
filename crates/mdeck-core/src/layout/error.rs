use thiserror::Error;

/// Validation errors for layout input.
///
/// Lookup misses are not errors: operations on an unknown id return an
/// unchanged document. Errors are reserved for values that must never be
/// stored.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Column span outside the 1..=3 grid domain.
    #[error("invalid column span: {0} (expected 1, 2 or 3)")]
    InvalidSpan(u8),
}
