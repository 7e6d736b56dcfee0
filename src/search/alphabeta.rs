//! Minimax search with alpha-beta pruning
//!
//! Values are White/Black evaluation ratios (see [`crate::eval::evaluate`]),
//! so one side maximizes and the other minimizes; this is plain minimax,
//! not negamax. Which side maximizes at the root is decided by the parity
//! of the stone count: with an even count the mover maximizes.
//!
//! The search mutates a single working board with place/undo pairs around
//! every recursive call, so a call always leaves the board exactly as it
//! found it.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Side};
//! use gomoku::search::{CandidateOrder, Searcher};
//!
//! let mut board = Board::new(9, 9);
//! board.place_stone(Pos::new(4, 4), Side::Black);
//! board.place_stone(Pos::new(4, 5), Side::White);
//!
//! let mut searcher = Searcher::new(2, CandidateOrder::Ascending);
//! let result = searcher.search(&board, Side::Black);
//! assert!(result.best_move.is_some());
//! ```

use tracing::trace;

use crate::board::{Board, Pos, Side};
use crate::eval::evaluate;
use crate::rules::is_game_over;

use super::candidates::{candidates, CandidateOrder};

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Value of the position after the best move (`±inf` when no move was found)
    pub score: f64,
    /// Whether the root maximized
    pub maximizing: bool,
    /// Total nodes searched
    pub nodes: u64,
}

/// Depth-limited alpha-beta searcher
#[derive(Debug, Clone)]
pub struct Searcher {
    depth: u32,
    order: CandidateOrder,
    nodes: u64,
}

impl Searcher {
    /// `depth` counts plies including the root move; values below 1 are
    /// raised to 1.
    #[must_use]
    pub fn new(depth: u32, order: CandidateOrder) -> Self {
        Self {
            depth: depth.max(1),
            order,
            nodes: 0,
        }
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Nodes visited since the last root search started
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search a copy of `board` for `side`'s best move.
    #[must_use]
    pub fn search(&mut self, board: &Board, side: Side) -> SearchResult {
        let mut work_board = board.clone();
        self.search_root(&mut work_board, side)
    }

    /// Root search over `board`'s candidates for `side`.
    pub fn search_root(&mut self, board: &mut Board, side: Side) -> SearchResult {
        self.nodes = 0;
        let maximizing = board.stone_count() % 2 == 0;

        let mut best_move = None;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut alpha = f64::NEG_INFINITY;
        let mut beta = f64::INFINITY;

        for mov in candidates(board, self.order) {
            if !board.is_empty(mov) {
                continue;
            }
            board.place_stone(mov, side);
            let score = self.alpha_beta(
                board,
                self.depth.saturating_sub(1),
                alpha,
                beta,
                !maximizing,
                side.opponent(),
            );
            board.remove_stone(mov);

            trace!(%mov, score, "root candidate");

            if maximizing {
                if score > best {
                    best = score;
                    best_move = Some(mov);
                }
                alpha = alpha.max(score);
            } else {
                if score < best {
                    best = score;
                    best_move = Some(mov);
                }
                beta = beta.min(score);
            }
        }

        SearchResult {
            best_move,
            score: best,
            maximizing,
            nodes: self.nodes,
        }
    }

    /// Recursive alpha-beta search.
    ///
    /// `to_place` is the side whose stone this node places. Leaves are
    /// evaluated with `to_place` as the side to move. Cutoffs are fail-soft:
    /// the child value that caused the cutoff is returned. A node without
    /// candidates returns `-inf` when maximizing and `+inf` when minimizing.
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        to_place: Side,
    ) -> f64 {
        self.nodes += 1;

        if depth == 0 || is_game_over(board) {
            return evaluate(board, to_place);
        }

        let moves = candidates(board, self.order);

        if maximizing {
            let mut max_eval = f64::NEG_INFINITY;
            for mov in moves {
                if !board.is_empty(mov) {
                    continue;
                }
                board.place_stone(mov, to_place);
                let eval = self.alpha_beta(board, depth - 1, alpha, beta, false, to_place.opponent());
                board.remove_stone(mov);

                max_eval = max_eval.max(eval);
                if eval >= beta {
                    return eval;
                }
                alpha = alpha.max(eval);
            }
            max_eval
        } else {
            let mut min_eval = f64::INFINITY;
            for mov in moves {
                if !board.is_empty(mov) {
                    continue;
                }
                board.place_stone(mov, to_place);
                let eval = self.alpha_beta(board, depth - 1, alpha, beta, true, to_place.opponent());
                board.remove_stone(mov);

                min_eval = min_eval.min(eval);
                if eval <= alpha {
                    return eval;
                }
                beta = beta.min(eval);
            }
            min_eval
        }
    }

    /// Unpruned minimax with the same move generation and leaf evaluation
    /// as [`Searcher::alpha_beta`]. Exponentially slower; meant for checking
    /// the pruned search on small boards.
    pub fn minimax(&mut self, board: &mut Board, depth: u32, maximizing: bool, to_place: Side) -> f64 {
        self.nodes += 1;

        if depth == 0 || is_game_over(board) {
            return evaluate(board, to_place);
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for mov in candidates(board, self.order) {
            board.place_stone(mov, to_place);
            let eval = self.minimax(board, depth - 1, !maximizing, to_place.opponent());
            board.remove_stone(mov);

            best = if maximizing { best.max(eval) } else { best.min(eval) };
        }
        best
    }
}
