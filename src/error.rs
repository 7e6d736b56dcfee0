//! Error types for malformed engine input.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised when a move request or board description is malformed.
///
/// A well-formed request never fails: the search itself is total.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("board is {found_height}x{found_width}, engine is configured for {expected_height}x{expected_width}")]
    DimensionMismatch {
        expected_height: usize,
        expected_width: usize,
        found_height: usize,
        found_width: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("board is empty")]
    EmptyBoard,

    #[error("invalid cell value {value} at ({row}, {col}), expected -1, 0 or 1")]
    InvalidCell { row: usize, col: usize, value: i8 },

    #[error("invalid side value {0}, expected -1 (black) or 1 (white)")]
    InvalidSide(i8),

    #[error("board text line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
