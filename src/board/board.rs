//! Fixed-size game board with bounds-checked access

use std::fmt;
use std::str::FromStr;

use super::{Cell, Pos, Side};
use crate::error::EngineError;

/// Game board: a `height x width` matrix of cells stored row-major.
///
/// Dimensions never change after construction. Reads that may fall off the
/// board go through [`Board::cell`], which answers `None` outside the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![None; height * width],
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// True iff `(row, col)` lies on the board.
    #[inline]
    pub fn in_board(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.height && col >= 0 && (col as usize) < self.width
    }

    /// Bounds-checked read. `None` means off the board.
    #[inline]
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        if self.in_board(row, col) {
            Some(self.cells[row as usize * self.width + col as usize])
        } else {
            None
        }
    }

    /// On-board position at signed coordinates, if any.
    #[inline]
    pub fn pos_at(&self, row: i32, col: i32) -> Option<Pos> {
        self.in_board(row, col)
            .then(|| Pos::new(row as usize, col as usize))
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        debug_assert!(pos.row < self.height && pos.col < self.width);
        self.cells[pos.row * self.width + pos.col]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Place a stone
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, side: Side) {
        debug_assert!(pos.row < self.height && pos.col < self.width);
        self.cells[pos.row * self.width + pos.col] = Some(side);
    }

    /// Remove a stone, restoring the cell to empty
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        debug_assert!(pos.row < self.height && pos.col < self.width);
        self.cells[pos.row * self.width + pos.col] = None;
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// No empty intersection left
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Centre intersection `(height / 2, width / 2)`.
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.height / 2, self.width / 2)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let width = self.width;
        (0..self.height * width).map(move |idx| Pos::new(idx / width, idx % width))
    }

    /// Positions holding `side`'s stones, row-major.
    pub fn stones(&self, side: Side) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&p| self.get(p) == Some(side))
    }

    /// Copy rotated 90 degrees clockwise: `(r, c)` moves to `(c, height - 1 - r)`.
    pub fn rotated(&self) -> Board {
        let mut out = Board::new(self.width, self.height);
        for pos in self.positions() {
            if let Some(side) = self.get(pos) {
                out.place_stone(Pos::new(pos.col, self.height - 1 - pos.row), side);
            }
        }
        out
    }

    /// Build a board from signed rows: `0` empty, `1` White, `-1` Black.
    pub fn from_signed(rows: &[Vec<i8>]) -> Result<Board, EngineError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).ok_or(EngineError::EmptyBoard)?;
        if width == 0 {
            return Err(EngineError::EmptyBoard);
        }

        let mut board = Board::new(height, width);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(EngineError::RaggedRow {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                match value {
                    0 => {}
                    v => {
                        let side = Side::from_signed(v)
                            .ok_or(EngineError::InvalidCell { row, col, value })?;
                        board.place_stone(Pos::new(row, col), side);
                    }
                }
            }
        }
        Ok(board)
    }

    /// Signed rows, the inverse of [`Board::from_signed`].
    pub fn to_signed(&self) -> Vec<Vec<i8>> {
        (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| self.get(Pos::new(row, col)).map_or(0, Side::to_signed))
                    .collect()
            })
            .collect()
    }
}

/// Text format: one line per row, `.` empty, `X` black, `O` white.
/// Whitespace inside a line and blank lines are ignored.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (idx, line) in s.lines().enumerate() {
            let mut row = Vec::new();
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                let value = match ch {
                    '.' => 0,
                    'X' | 'x' => Side::Black.to_signed(),
                    'O' | 'o' => Side::White.to_signed(),
                    other => {
                        return Err(EngineError::Parse {
                            line: idx + 1,
                            reason: format!("unexpected character '{other}'"),
                        })
                    }
                };
                row.push(value);
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Board::from_signed(&rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let ch = self.get(Pos::new(row, col)).map_or('.', Side::symbol);
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
