//! Board representation for Gomoku

pub mod board;


// Re-exports
pub use board::Board;

/// Contents of a single intersection: `None` when empty.
pub type Cell = Option<Side>;

/// The 8 compass offsets as `(row delta, col delta)`.
///
/// Order: SW, S, SE, E, NE, NW, N, W. Every scan that walks directions uses
/// this order, so it decides which of several equal answers is returned first.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, -1),
    (-1, 0),
    (0, -1),
];

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Signed encoding: White is `1`, Black is `-1`.
    #[inline]
    pub fn to_signed(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Decode a signed side value (`1` White, `-1` Black).
    #[inline]
    pub fn from_signed(value: i8) -> Option<Side> {
        match value {
            1 => Some(Side::White),
            -1 => Some(Side::Black),
            _ => None,
        }
    }

    /// Single-character symbol used by the text board format.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Side::Black => 'X',
            Side::White => 'O',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Black => write!(f, "black"),
            Side::White => write!(f, "white"),
        }
    }
}

/// Position on the board.
///
/// A `Pos` handed out by a [`Board`] always lies on that board; "no move"
/// is expressed as `Option<Pos>::None`, never as a special coordinate.
/// The derived ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Signed coordinates of the cell `steps` away along `dir`.
    #[inline]
    pub fn offset(self, dir: (i32, i32), steps: i32) -> (i32, i32) {
        (
            self.row as i32 + dir.0 * steps,
            self.col as i32 + dir.1 * steps,
        )
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
