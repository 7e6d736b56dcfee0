//! End-of-game detection
//!
//! The game is over when the board is full or when some side owns five
//! consecutive intersections along one of the 8 directions. Only windows
//! lying entirely on the board are examined.

use crate::board::{Board, Pos, Side, DIRECTIONS};

/// Length of a winning line
pub const WIN_LENGTH: i32 = 5;

/// True if the 5-cell window starting at `pos` along `dir` is on the board
/// and holds only `side`'s stones.
#[inline]
fn is_winning_window(board: &Board, pos: Pos, dir: (i32, i32), side: Side) -> bool {
    (0..WIN_LENGTH).all(|step| {
        let (r, c) = pos.offset(dir, step);
        board.cell(r, c) == Some(Some(side))
    })
}

/// Find the first winning line in row-major, direction order.
///
/// Returns the owning side and the start of the window.
pub fn find_five(board: &Board) -> Option<(Side, Pos)> {
    for pos in board.positions() {
        let Some(side) = board.get(pos) else {
            continue;
        };
        if DIRECTIONS
            .iter()
            .any(|&dir| is_winning_window(board, pos, dir, side))
        {
            return Some((side, pos));
        }
    }
    None
}

/// Check if `side` has five in a row anywhere
pub fn has_five_in_row(board: &Board, side: Side) -> bool {
    board.stones(side).any(|pos| {
        DIRECTIONS
            .iter()
            .any(|&dir| is_winning_window(board, pos, dir, side))
    })
}

/// Winner of the position, if a five exists.
pub fn check_winner(board: &Board) -> Option<Side> {
    find_five(board).map(|(side, _)| side)
}

/// The board is full or either side has five in a row.
pub fn is_game_over(board: &Board) -> bool {
    board.is_full() || find_five(board).is_some()
}
