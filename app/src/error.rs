//! Application error types.

use muraltrace_core::RibbonError;
use thiserror::Error;

/// Errors that stop the frame loop.
#[derive(Debug, Error)]
pub enum AppError {
    /// Animation setup or a tick failed.
    #[error("ribbon error: {0}")]
    Ribbon(#[from] RibbonError),

    /// Rejected command line or programmatic configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Handler-specific failure.
    #[error("handler failed: {0}")]
    Handler(String),
}
