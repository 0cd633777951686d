//! # Error Types
//!
//! This module defines the crate-level error type. Parse and render failures
//! keep their own enums (see [`crate::layout::ParseError`] and
//! [`crate::render::RenderError`]) and are wrapped transparently here so the
//! printed recovery line carries their message unchanged.

use thiserror::Error;

use crate::layout::ParseError;
use crate::render::RenderError;

/// Main error type for tillroll operations
#[derive(Debug, Error)]
pub enum TillrollError {
    /// Layout text could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A section could not be rendered
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The pipeline panicked; the payload message is kept
    #[error("internal error: {0}")]
    Internal(String),

    /// Invalid configuration file or option
    #[error("Config error: {0}")]
    Config(String),

    /// Order file could not be read as an order
    #[error("Order error: {0}")]
    Order(String),

    /// Transport-level errors (device open, write)
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
