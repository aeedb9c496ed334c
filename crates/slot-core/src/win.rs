//! Row-match win evaluation

use crate::symbol::{Grid, REEL_COUNT, ROW_COUNT};
use std::collections::BTreeSet;

/// Indices of the rows that matched across every reel
pub type WinningRows = BTreeSet<usize>;

/// Evaluate a settled board.
///
/// Row `r` wins when every reel shows the same symbol at `r`. Columns never
/// count: a column rule pushed the hit rate to roughly 80%.
pub fn evaluate(grid: &Grid) -> WinningRows {
    (0..ROW_COUNT)
        .filter(|&row| {
            let first = grid[0][row];
            (1..REEL_COUNT).all(|col| grid[col][row] == first)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol::{Bars as B, Cherries as C, Seven as A};

    #[test]
    fn rows_match_across_reels() {
        // reel0 = [A, B, A], reel1 = [A, B, B], reel2 = [A, B, A]
        // row 0: A A A, row 1: B B B, row 2: A B A
        let grid = [[A, B, A], [A, B, B], [A, B, A]];
        assert_eq!(evaluate(&grid), BTreeSet::from([0, 1]));
    }

    #[test]
    fn full_column_is_not_a_win() {
        let grid = [[A, A, A], [B, C, B], [C, B, C]];
        assert!(evaluate(&grid).is_empty());
    }

    #[test]
    fn all_rows_can_win() {
        let grid = [[C, C, C], [C, C, C], [C, C, C]];
        assert_eq!(evaluate(&grid), BTreeSet::from([0, 1, 2]));
    }

    #[test]
    fn single_bottom_row() {
        let grid = [[A, B, C], [B, A, C], [A, A, C]];
        assert_eq!(evaluate(&grid), BTreeSet::from([2]));
    }
}
