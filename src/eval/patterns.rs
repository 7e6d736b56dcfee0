//! Run scores for Gomoku evaluation
//!
//! A run is a maximal line of same-colored stones. Its worth depends on its
//! length, on how many of its two ends are closed off (by an opposing stone
//! or the board edge), and on whether its owner moves next.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - the game is won
    pub const WIN: i64 = 100_000_000;
    /// A run that cannot be stopped from becoming five
    pub const WIN_GUARANTEE: i64 = 1_000_000;
    /// Overline (six or more)
    pub const OVERLINE: i64 = Self::WIN * 2;
    /// Four or open three that the opponent can still answer
    pub const STOPPABLE: i64 = 200;
}

/// Score of one run.
///
/// * `length` - stones in the run
/// * `blocked_ends` - closed ends, 0 to 2
/// * `is_next` - the run's owner places the next stone
pub fn run_value(length: u32, blocked_ends: u8, is_next: bool) -> i64 {
    if blocked_ends >= 2 && length < 5 {
        // dead: cannot grow into five
        return 0;
    }
    let open = blocked_ends == 0;
    match length {
        0 => 0,
        1 => 1,
        2 => match (open, is_next) {
            (true, true) => 7,
            (true, false) => 5,
            (false, _) => 3,
        },
        3 => match (open, is_next) {
            (true, true) => PatternScore::WIN_GUARANTEE / 10,
            (true, false) => PatternScore::STOPPABLE,
            (false, true) => 10,
            (false, false) => 5,
        },
        4 => {
            if is_next {
                PatternScore::WIN_GUARANTEE
            } else if open {
                PatternScore::WIN_GUARANTEE / 4
            } else {
                PatternScore::STOPPABLE
            }
        }
        5 => PatternScore::WIN,
        _ => PatternScore::OVERLINE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_runs_score_zero() {
        for length in 1..5 {
            for is_next in [true, false] {
                assert_eq!(run_value(length, 2, is_next), 0, "length {length}");
            }
        }
    }

    #[test]
    fn test_five_and_overline_ignore_blocking() {
        for blocked in 0..=2 {
            for is_next in [true, false] {
                assert_eq!(run_value(5, blocked, is_next), PatternScore::WIN);
                assert_eq!(run_value(6, blocked, is_next), PatternScore::WIN * 2);
                assert_eq!(run_value(9, blocked, is_next), PatternScore::WIN * 2);
            }
        }
    }

    #[test]
    fn test_four_table() {
        assert_eq!(run_value(4, 0, true), 1_000_000);
        assert_eq!(run_value(4, 1, true), 1_000_000);
        assert_eq!(run_value(4, 0, false), 250_000);
        assert_eq!(run_value(4, 1, false), 200);
    }

    #[test]
    fn test_three_table() {
        assert_eq!(run_value(3, 0, true), 100_000);
        assert_eq!(run_value(3, 0, false), 200);
        assert_eq!(run_value(3, 1, true), 10);
        assert_eq!(run_value(3, 1, false), 5);
    }

    #[test]
    fn test_two_and_one_table() {
        assert_eq!(run_value(2, 0, true), 7);
        assert_eq!(run_value(2, 0, false), 5);
        assert_eq!(run_value(2, 1, true), 3);
        assert_eq!(run_value(2, 1, false), 3);
        assert_eq!(run_value(1, 0, true), 1);
        assert_eq!(run_value(1, 1, false), 1);
    }

    #[test]
    fn test_score_hierarchy() {
        assert!(PatternScore::OVERLINE > PatternScore::WIN);
        assert!(PatternScore::WIN > PatternScore::WIN_GUARANTEE);
        assert!(run_value(4, 0, false) > run_value(3, 0, true));
        assert!(run_value(3, 0, true) > run_value(3, 0, false));
    }
}
