//! Gomoku move-selection engine
//!
//! Picks the next move for one side in a five-in-a-row game on a
//! rectangular board of any configured size:
//! - 5-in-a-row (or longer) wins
//! - No captures, no forbidden moves
//! - White/Black ratio evaluation over every line of the board
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, sides and coordinates
//! - [`rules`]: Win and game-over detection
//! - [`eval`]: Run scoring and position evaluation
//! - [`search`]: Forcing moves, candidate ordering and alpha-beta search
//! - [`opening`]: Book moves for the first plies
//! - [`engine`]: Main AI engine integrating all components
//! - [`config`]: Engine settings from TOML and the environment
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, Side};
//!
//! let engine = AIEngine::new(EngineConfig::new(15, 15, 2)).unwrap();
//! let mut board = Board::new(15, 15);
//! board.place_stone(Pos::new(7, 7), Side::Black);
//!
//! // AI responds as White
//! if let Some(pos) = engine.next_move(&board, Side::White).unwrap() {
//!     board.place_stone(pos, Side::White);
//!     println!("AI plays at {}", pos);
//! }
//! ```
//!
//! # Search Priority
//!
//! 1. Opening book while fewer than four stones are down
//! 2. No move once the game is over
//! 3. Immediate winning move
//! 4. Block the opponent's five
//! 5. Alpha-beta search at the configured depth

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod opening;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Side};
pub use config::{ConfigError, EngineConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::EngineError;
pub use eval::position_value;
