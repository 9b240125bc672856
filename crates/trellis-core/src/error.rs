//! Error types for Trellis.
//!
//! The error surface of the toolkit core is deliberately narrow: only
//! platform shell construction can fail. Everything past startup is total —
//! out-of-range indices are no-ops and degenerate geometry short-circuits
//! layout instead of erroring.

use thiserror::Error;

/// Errors raised while bringing up or driving the platform shell.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Failed to create the native window.
    #[error("failed to create window: {0}")]
    WindowCreation(String),

    /// Failed to initialize the drawing backend.
    #[error("failed to initialize backend: {0}")]
    BackendInit(String),
}

/// A specialized Result type for Trellis operations.
pub type Result<T> = std::result::Result<T, ShellError>;
