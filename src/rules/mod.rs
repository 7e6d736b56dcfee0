//! Game rules for Gomoku
//!
//! Five or more in a row wins; a full board without a winner is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, find_five, has_five_in_row, is_game_over, WIN_LENGTH};
