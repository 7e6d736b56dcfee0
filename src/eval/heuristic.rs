//! Heuristic evaluation function for Gomoku board positions
//!
//! Every row, column, diagonal and anti-diagonal is scanned once. Each maximal
//! run of a side's stones on a line contributes [`run_value`]; a side's score
//! is the sum over all lines. The position value is White's score divided by
//! Black's.

use crate::board::{Board, Cell, Pos, Side};

use super::patterns::run_value;

/// Line scan state for one side.
///
/// `block` is the number of closed ends the current run would have if the
/// cell that ends it turned out to be closed too. It starts at 2 (the line
/// start is a wall) and is decremented when the run ends on an empty cell.
struct LineScanner {
    side: Side,
    is_next: bool,
    run: u32,
    block: u8,
    total: i64,
}

impl LineScanner {
    fn new(side: Side, next_to_move: Side) -> Self {
        Self {
            side,
            is_next: side == next_to_move,
            run: 0,
            block: 2,
            total: 0,
        }
    }

    #[inline]
    fn feed(&mut self, cell: Cell) {
        match cell {
            Some(s) if s == self.side => self.run += 1,
            None => {
                if self.run > 0 {
                    self.block -= 1;
                    self.total += run_value(self.run, self.block, self.is_next);
                    self.run = 0;
                }
                self.block = 1;
            }
            Some(_) => {
                if self.run > 0 {
                    self.total += run_value(self.run, self.block, self.is_next);
                    self.run = 0;
                }
                self.block = 2;
            }
        }
    }

    /// Close the line: the far edge acts like an opposing stone.
    #[inline]
    fn end_line(&mut self) {
        self.feed(Some(self.side.opponent()));
        self.run = 0;
        self.block = 2;
    }
}

/// Start cell and step of every line on the board: rows, columns,
/// `\` diagonals and `/` anti-diagonals.
fn lines(board: &Board) -> impl Iterator<Item = (Pos, (i32, i32))> {
    let (h, w) = (board.height(), board.width());
    let rows = (0..h).map(|r| (Pos::new(r, 0), (0, 1)));
    let cols = (0..w).map(|c| (Pos::new(0, c), (1, 0)));
    let diag = (0..w)
        .map(|c| (Pos::new(0, c), (1, 1)))
        .chain((1..h).map(|r| (Pos::new(r, 0), (1, 1))));
    let anti = (0..w)
        .map(|c| (Pos::new(0, c), (1, -1)))
        .chain((1..h).map(move |r| (Pos::new(r, w - 1), (1, -1))));
    rows.chain(cols).chain(diag).chain(anti)
}

/// Sum of run scores for `side` when `next_to_move` places the next stone.
pub fn side_score(board: &Board, side: Side, next_to_move: Side) -> i64 {
    let mut scanner = LineScanner::new(side, next_to_move);
    for (start, dir) in lines(board) {
        let mut step = 0;
        loop {
            let (r, c) = start.offset(dir, step);
            let Some(cell) = board.cell(r, c) else {
                break;
            };
            scanner.feed(cell);
            step += 1;
        }
        scanner.end_line();
    }
    scanner.total
}

/// Evaluate the board with `next_to_move` placing the next stone.
///
/// Returns `side_score(White) / side_score(Black)`. Larger values favour
/// White. A zero Black score is treated as 1, so the ratio stays finite
/// (an empty board evaluates to 0).
#[must_use]
pub fn evaluate(board: &Board, next_to_move: Side) -> f64 {
    let white = side_score(board, Side::White, next_to_move);
    let black = side_score(board, Side::Black, next_to_move);
    white as f64 / black.max(1) as f64
}

/// Evaluation entry point for verification and tooling.
#[must_use]
pub fn position_value(board: &Board, next_to_move: Side) -> f64 {
    evaluate(board, next_to_move)
}
