//! Error types for shape generation and ribbon animation.

use thiserror::Error;

/// Errors reported by a [`MeshSink`](crate::mesh::MeshSink).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// The host mesh object no longer exists.
    #[error("mesh sink destroyed")]
    Destroyed,
}

/// Errors that can occur while generating anchors or animating a ribbon.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RibbonError {
    /// A parameter was non-finite, non-positive, or out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// The mesh sink went away mid-animation. Not retried.
    #[error("mesh sink unavailable: {0}")]
    SinkUnavailable(#[from] SinkError),
}

pub type RibbonResult<T> = Result<T, RibbonError>;

/// Reject non-finite values.
pub(crate) fn ensure_finite(name: &str, value: f32) -> RibbonResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RibbonError::InvalidParameter(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

/// Reject non-finite and non-positive values.
pub(crate) fn ensure_positive(name: &str, value: f32) -> RibbonResult<()> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(RibbonError::InvalidParameter(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

/// Reject zero counts.
pub(crate) fn ensure_count(name: &str, value: u32) -> RibbonResult<()> {
    if value >= 1 {
        Ok(())
    } else {
        Err(RibbonError::InvalidParameter(format!(
            "{name} must be at least 1"
        )))
    }
}
