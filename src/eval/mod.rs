//! Evaluation module for Gomoku positions
//!
//! This module scores board positions from runs of stones:
//! - Run values by length, blocked ends and side to move
//! - Per-side line scanning over rows, columns and both diagonals
//! - The White / Black score ratio used by the search

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, position_value, side_score};
pub use patterns::{run_value, PatternScore};
