//! Search module for Gomoku AI
//!
//! Contains:
//! - Forcing-move detection (immediate win / forced block)
//! - Candidate generation with neighbour-line ordering
//! - Minimax with alpha-beta pruning

pub mod alphabeta;
pub mod candidates;
pub mod tactics;

pub use alphabeta::{SearchResult, Searcher};
pub use candidates::{candidate_key, candidates, generate_candidates, Candidate, CandidateOrder};
pub use tactics::{find_forcing_move, find_four, ForcingKind, ForcingMove};
