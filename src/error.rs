//! Error types for measurement configuration.
//!
//! Runtime misuse of the tool (double `start`, double `end`) is defined as
//! an idempotent no-op, not an error, so the only fallible surface is
//! construction with an invalid style.

use thiserror::Error;

/// Errors raised when a [`crate::style::MeasureStyle`] fails validation.
#[derive(Error, Debug)]
pub enum MeasureError {
    /// Stroke color is not a `#RRGGBB` hex string
    #[error("invalid stroke color {0:?}: expected \"#RRGGBB\"")]
    InvalidStrokeColor(String),

    /// Stroke weight must be a positive, finite pixel width
    #[error("invalid stroke weight {0}: must be positive and finite")]
    InvalidStrokeWeight(f32),
}

/// Result type alias for measurement operations
pub type MeasureResult<T> = Result<T, MeasureError>;
