//! Candidate move generation
//!
//! Only empty cells touching at least one stone (8-neighbourhood) are worth
//! searching. Each candidate carries an ordering key: the longest line of
//! same-colored stones that starts at one of its neighbours and runs away
//! from it.

use serde::Deserialize;

use crate::board::{Board, Pos, DIRECTIONS};

/// Order in which the search visits candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateOrder {
    /// Weakest neighbouring line first
    #[default]
    Ascending,
    /// Strongest neighbouring line first; prunes more
    Descending,
}

impl std::str::FromStr for CandidateOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Ok(CandidateOrder::Ascending),
            "descending" | "desc" => Ok(CandidateOrder::Descending),
            other => Err(format!("unknown candidate order '{other}'")),
        }
    }
}

/// An empty cell worth searching, with its ordering key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub pos: Pos,
    pub key: u32,
}

/// True if any 8-neighbour of `pos` holds a stone.
#[inline]
fn has_neighbor(board: &Board, pos: Pos) -> bool {
    DIRECTIONS.iter().any(|&dir| {
        let (r, c) = pos.offset(dir, 1);
        matches!(board.cell(r, c), Some(Some(_)))
    })
}

/// Longest same-colored line starting next to `pos` and running outward.
pub fn candidate_key(board: &Board, pos: Pos) -> u32 {
    DIRECTIONS
        .iter()
        .filter_map(|&dir| {
            let (r, c) = pos.offset(dir, 1);
            let side = board.cell(r, c).flatten()?;
            let mut len = 0u32;
            loop {
                let (r, c) = pos.offset(dir, 1 + len as i32);
                if board.cell(r, c) != Some(Some(side)) {
                    break;
                }
                len += 1;
            }
            Some(len)
        })
        .max()
        .unwrap_or(0)
}

/// Keyed candidates, sorted stably by key in the requested order.
/// Cells with equal keys keep row-major order.
pub fn generate_candidates(board: &Board, order: CandidateOrder) -> Vec<Candidate> {
    let mut list: Vec<Candidate> = board
        .positions()
        .filter(|&pos| board.is_empty(pos) && has_neighbor(board, pos))
        .map(|pos| Candidate {
            pos,
            key: candidate_key(board, pos),
        })
        .collect();

    match order {
        CandidateOrder::Ascending => list.sort_by_key(|c| c.key),
        CandidateOrder::Descending => list.sort_by(|a, b| b.key.cmp(&a.key)),
    }
    list
}

/// Candidate positions in search order.
pub fn candidates(board: &Board, order: CandidateOrder) -> Vec<Pos> {
    generate_candidates(board, order)
        .into_iter()
        .map(|c| c.pos)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;

    #[test]
    fn test_empty_board_has_no_candidates() {
        let board = Board::new(9, 9);
        assert!(candidates(&board, CandidateOrder::Ascending).is_empty());
    }

    #[test]
    fn test_single_stone_ring() {
        let mut board = Board::new(9, 9);
        board.place_stone(Pos::new(4, 4), Side::Black);

        let list = generate_candidates(&board, CandidateOrder::Ascending);
        assert_eq!(list.len(), 8);
        assert!(list.iter().all(|c| c.key == 1));
        // equal keys keep row-major order
        assert_eq!(list[0].pos, Pos::new(3, 3));
        assert_eq!(list[7].pos, Pos::new(5, 5));
    }

    #[test]
    fn test_corner_stone_ring_clipped() {
        let mut board = Board::new(9, 9);
        board.place_stone(Pos::new(0, 0), Side::White);
        let list = candidates(&board, CandidateOrder::Ascending);
        assert_eq!(list, vec![Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]);
    }

    #[test]
    fn test_isolated_cells_pruned() {
        let mut board = Board::new(9, 9);
        board.place_stone(Pos::new(1, 1), Side::Black);
        board.place_stone(Pos::new(7, 7), Side::White);
        let list = candidates(&board, CandidateOrder::Ascending);
        assert_eq!(list.len(), 16);
        assert!(!list.contains(&Pos::new(4, 4)));
        assert!(list.iter().all(|&p| board.is_empty(p)));
    }

    #[test]
    fn test_key_measures_line_away_from_cell() {
        let mut board = Board::new(9, 9);
        for c in 2..5 {
            board.place_stone(Pos::new(4, c), Side::Black);
        }
        // west of the line: three stones run east from (4,2)
        assert_eq!(candidate_key(&board, Pos::new(4, 1)), 3);
        assert_eq!(candidate_key(&board, Pos::new(4, 5)), 3);
        // above the middle stone: only a single stone below
        assert_eq!(candidate_key(&board, Pos::new(3, 3)), 1);
    }

    #[test]
    fn test_key_stops_at_other_color() {
        let mut board = Board::new(9, 9);
        board.place_stone(Pos::new(4, 2), Side::Black);
        board.place_stone(Pos::new(4, 3), Side::Black);
        board.place_stone(Pos::new(4, 4), Side::White);
        assert_eq!(candidate_key(&board, Pos::new(4, 1)), 2);
    }

    #[test]
    fn test_orderings() {
        let mut board = Board::new(9, 9);
        for c in 2..5 {
            board.place_stone(Pos::new(4, c), Side::Black);
        }
        let asc = generate_candidates(&board, CandidateOrder::Ascending);
        let desc = generate_candidates(&board, CandidateOrder::Descending);
        assert_eq!(asc.len(), desc.len());
        assert!(asc.windows(2).all(|w| w[0].key <= w[1].key));
        assert!(desc.windows(2).all(|w| w[0].key >= w[1].key));
        assert_eq!(desc[0].pos, Pos::new(4, 1));
        assert_eq!(desc[0].key, 3);
    }

    #[test]
    fn test_order_parse() {
        assert_eq!("desc".parse::<CandidateOrder>(), Ok(CandidateOrder::Descending));
        assert_eq!("Ascending".parse::<CandidateOrder>(), Ok(CandidateOrder::Ascending));
        assert!("random".parse::<CandidateOrder>().is_err());
    }
}
