//! Fixed replies for the first plies
//!
//! While fewer than four stones are on the board the engine answers from a
//! small deterministic book instead of searching:
//! - Empty board: the centre
//! - One stone: step diagonally from it toward the centre
//! - Two stones: a diagonal step off our stone, away from the opponent's line
//! - Three stones: the first free neighbour of our first stone
//!
//! The book returns `None` when its answer would be off the board or
//! occupied, or when the position does not fit the pattern (for example the
//! mover has no stone yet). The engine then falls back to the regular search.

use std::cmp::Ordering;

use crate::board::{Board, Pos, Side, DIRECTIONS};

/// Stone count below which the book is consulted
pub const OPENING_STONES: usize = 4;

/// Book move for `side`, or `None` to defer to the search.
pub fn early_move(board: &Board, side: Side) -> Option<Pos> {
    let pick = match board.stone_count() {
        0 => Some(board.center()),
        1 => toward_center(board),
        2 => off_diagonal(board, side),
        3 => first_free_neighbor(board, side),
        _ => None,
    };
    pick.filter(|&pos| board.is_empty(pos))
}

/// Unit step from `from` toward `to` along one axis.
#[inline]
fn step_toward(from: usize, to: usize) -> i32 {
    match from.cmp(&to) {
        Ordering::Greater => -1,
        Ordering::Less => 1,
        Ordering::Equal => 0,
    }
}

fn toward_center(board: &Board) -> Option<Pos> {
    let stone = board.positions().find(|&p| !board.is_empty(p))?;
    let center = board.center();

    let row = stone.row as i32 + step_toward(stone.row, center.row);
    let mut col = stone.col as i32 + step_toward(stone.col, center.col);
    if row == stone.row as i32 && col == stone.col as i32 {
        // stone sits on the centre
        col += 1;
    }
    board.pos_at(row, col)
}

fn off_diagonal(board: &Board, side: Side) -> Option<Pos> {
    let own = board.stones(side).next()?;
    let theirs = board.stones(side.opponent()).next()?;

    if own.row == theirs.row || own.col == theirs.col {
        return board.pos_at(own.row as i32 + 1, own.col as i32 + 1);
    }

    let row = if own.row > theirs.row {
        own.row as i32 - 1
    } else {
        own.row as i32 + 1
    };
    let col = if own.col > theirs.col {
        own.col as i32 + 1
    } else {
        own.col as i32 - 1
    };
    board.pos_at(row, col)
}

fn first_free_neighbor(board: &Board, side: Side) -> Option<Pos> {
    board.stones(side).find_map(|stone| {
        DIRECTIONS.iter().find_map(|&dir| {
            let (r, c) = stone.offset(dir, 1);
            board.pos_at(r, c).filter(|&p| board.is_empty(p))
        })
    })
}
