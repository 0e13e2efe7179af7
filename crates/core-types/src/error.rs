use thiserror::Error;

/// Errors shared by every metric in the workspace.
///
/// Structural precondition violations surface as one of these variants and
/// are never silently coerced to zero; degenerate ratio denominators are the
/// one deliberate exception and resolve to a neutral value at the call site.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("Empty input: '{0}' requires a non-empty series")]
    EmptyInput(&'static str),

    #[error("Domain error in '{0}': {1}")]
    Domain(&'static str, String),

    #[error("Shape mismatch in '{operation}': expected length {expected}, got {actual}")]
    ShapeMismatch {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },
}
