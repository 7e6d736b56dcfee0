//! Forcing-move detection
//!
//! Before any tree search the engine looks for a move that decides the game
//! on the spot: a cell that completes five for the side to move, or failing
//! that, a cell that stops the opponent from completing five next turn.

use crate::board::{Board, Pos, Side, DIRECTIONS};
use crate::rules::WIN_LENGTH;

/// Why a forcing move was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForcingKind {
    /// Completes five for the mover
    Win,
    /// Fills the cell the opponent needs for five
    Block,
}

/// A move the side to move must play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForcingMove {
    pub pos: Pos,
    pub kind: ForcingKind,
}

/// Find a winning move for `attacker`, else a move blocking the opponent's
/// five. Returns `None` if neither exists.
pub fn find_forcing_move(board: &Board, attacker: Side) -> Option<ForcingMove> {
    if let Some(pos) = find_four(board, attacker) {
        return Some(ForcingMove {
            pos,
            kind: ForcingKind::Win,
        });
    }
    find_four(board, attacker.opponent()).map(|pos| ForcingMove {
        pos,
        kind: ForcingKind::Block,
    })
}

/// Find the empty cell of the first 5-window holding four of `side`'s stones.
///
/// Windows start at each of `side`'s stones (row-major) and run along each
/// direction in [`DIRECTIONS`] order. A window is skipped when the cells just
/// before and just after it both hold opposing stones, and is unusable when
/// any of its cells is off the board or holds an opposing stone.
pub fn find_four(board: &Board, side: Side) -> Option<Pos> {
    let opponent = Some(Some(side.opponent()));

    for pos in board.stones(side) {
        for &dir in &DIRECTIONS {
            let (br, bc) = pos.offset(dir, -1);
            let (ar, ac) = pos.offset(dir, WIN_LENGTH);
            if board.cell(br, bc) == opponent && board.cell(ar, ac) == opponent {
                continue;
            }

            if let Some(gap) = window_gap(board, pos, dir, side) {
                return Some(gap);
            }
        }
    }
    None
}

/// The single empty cell of a usable window with exactly four own stones.
fn window_gap(board: &Board, start: Pos, dir: (i32, i32), side: Side) -> Option<Pos> {
    let mut own = 0;
    let mut gap = None;
    for step in 0..WIN_LENGTH {
        let (r, c) = start.offset(dir, step);
        match board.cell(r, c)? {
            Some(s) if s == side => own += 1,
            Some(_) => return None,
            None => {
                if gap.is_none() {
                    gap = board.pos_at(r, c);
                }
            }
        }
    }
    if own == WIN_LENGTH - 1 {
        gap
    } else {
        None
    }
}
