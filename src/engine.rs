//! Move selection engine
//!
//! The engine answers one move request at a time. The phases are tried in
//! order and the first one that produces an answer wins:
//!
//! 1. **Opening**: fewer than four stones on the board, answered by the book
//! 2. **Game over**: a five is on the board or the board is full; no move
//! 3. **Immediate win**: a cell completing five for the mover
//! 4. **Defense**: a cell the opponent needs for five
//! 5. **Alpha-Beta**: depth-limited search over the candidate frontier
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Pos, Side};
//!
//! let engine = AIEngine::new(EngineConfig::new(15, 15, 2)).unwrap();
//! let mut board = Board::new(15, 15);
//! board.place_stone(Pos::new(7, 7), Side::Black);
//!
//! let result = engine.next_move_with_stats(&board, Side::White).unwrap();
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Pos, Side};
use crate::config::{ConfigError, EngineConfig};
use crate::error::EngineError;
use crate::eval;
use crate::opening::{early_move, OPENING_STONES};
use crate::rules::is_game_over;
use crate::search::{find_forcing_move, ForcingKind, SearchResult, Searcher};

/// Phase of the move request that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Answered from the opening book
    Opening,
    /// Position already decided or drawn; no move
    GameOver,
    /// Move completes five for the mover
    ImmediateWin,
    /// Move blocks the opponent's five
    Defense,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move request with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move, `None` when there is nothing to play
    pub best_move: Option<Pos>,
    /// Search value of the chosen move; only set by the alpha-beta phase
    pub score: Option<f64>,
    /// Phase that produced this result
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn opening(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: None,
            search_type: SearchType::Opening,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn game_over(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: None,
            search_type: SearchType::GameOver,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn forcing(pos: Pos, kind: ForcingKind, time_ms: u64) -> Self {
        let search_type = match kind {
            ForcingKind::Win => SearchType::ImmediateWin,
            ForcingKind::Block => SearchType::Defense,
        };
        Self {
            best_move: Some(pos),
            score: None,
            search_type,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.best_move.map(|_| result.score),
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Gomoku move engine.
///
/// Holds only the validated configuration; every request works on its own
/// copy of the caller's board, so one engine can serve any number of
/// requests.
///
/// # Example
///
/// ```
/// use gomoku::{AIEngine, Board, EngineConfig};
///
/// let engine = AIEngine::new(EngineConfig::new(9, 9, 2)).unwrap();
/// let board = Board::new(9, 9);
/// assert!(engine.next_move(&board, gomoku::Side::Black).unwrap().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    config: EngineConfig,
}

impl AIEngine {
    /// Create an engine, validating `config`.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            height = config.board.height,
            width = config.board.width,
            depth = config.search.depth,
            order = ?config.search.candidate_order,
            "engine configured"
        );
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Best move for `side`, or `None` when the game is over or no move exists.
    pub fn next_move(&self, board: &Board, side: Side) -> Result<Option<Pos>, EngineError> {
        Ok(self.next_move_with_stats(board, side)?.best_move)
    }

    /// Raw entry point: cells are `1` white, `-1` black, `0` empty, and
    /// `side` uses the same encoding.
    pub fn next_move_signed(&self, rows: &[Vec<i8>], side: i8) -> Result<Option<Pos>, EngineError> {
        let side = Side::from_signed(side).ok_or(EngineError::InvalidSide(side))?;
        let board = Board::from_signed(rows)?;
        self.next_move(&board, side)
    }

    /// Best move for `side` with the phase that produced it and search statistics.
    pub fn next_move_with_stats(&self, board: &Board, side: Side) -> Result<MoveResult, EngineError> {
        self.check_dimensions(board)?;
        let start = Instant::now();
        let elapsed = || start.elapsed().as_millis() as u64;

        if board.stone_count() < OPENING_STONES {
            if let Some(pos) = early_move(board, side) {
                debug!(%side, %pos, "opening book move");
                return Ok(MoveResult::opening(pos, elapsed()));
            }
            debug!(%side, stones = board.stone_count(), "opening book has no answer");
        }

        if is_game_over(board) {
            debug!(%side, "game over, no move");
            return Ok(MoveResult::game_over(elapsed()));
        }

        if let Some(forcing) = find_forcing_move(board, side) {
            debug!(%side, pos = %forcing.pos, kind = ?forcing.kind, "forcing move");
            return Ok(MoveResult::forcing(forcing.pos, forcing.kind, elapsed()));
        }

        let mut searcher = Searcher::new(self.config.search.depth, self.config.search.candidate_order);
        let result = searcher.search(board, side);
        debug!(
            %side,
            best = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            "alpha-beta search finished"
        );
        Ok(MoveResult::from_alphabeta(result, elapsed()))
    }

    /// Static evaluation of `board` with `next_to_move` to play.
    pub fn position_value(&self, board: &Board, next_to_move: Side) -> Result<f64, EngineError> {
        self.check_dimensions(board)?;
        Ok(eval::position_value(board, next_to_move))
    }

    fn check_dimensions(&self, board: &Board) -> Result<(), EngineError> {
        let (height, width) = (self.config.board.height, self.config.board.width);
        if board.height() != height || board.width() != width {
            return Err(EngineError::DimensionMismatch {
                expected_height: height,
                expected_width: width,
                found_height: board.height(),
                found_width: board.width(),
            });
        }
        Ok(())
    }
}
