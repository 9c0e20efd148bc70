//! Conway's B3/S23 rule over a bounded neighbourhood.
use crate::Board;

const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Outcome of the rule for a single cell.
#[inline]
pub fn next_state(alive: bool, neighbours: u8) -> bool {
    matches!((alive, neighbours), (true, 2) | (_, 3))
}

/// Number of live cells around `(i, j)`; positions outside the board are skipped.
///
/// Reads only the current-generation bit, so it may run while other cells
/// already carry their pending state.
pub fn live_neighbours(board: &Board, i: usize, j: usize) -> u8 {
    OFFSETS
        .iter()
        .filter_map(|&(di, dj)| {
            let y = i.checked_add_signed(di)?;
            let x = j.checked_add_signed(dj)?;
            (y < board.height() && x < board.width()).then(|| board.is_alive(y, x) as u8)
        })
        .sum()
}

/// Whether the cell at `(i, j)` is alive in the next generation.
pub fn will_live(board: &Board, i: usize, j: usize) -> bool {
    next_state(board.is_alive(i, j), live_neighbours(board, i, j))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive, {n} neighbours");
            assert_eq!(next_state(false, n), n == 3, "dead, {n} neighbours");
        }
    }

    #[test]
    fn test_corner_and_edge_neighbours() {
        let board = Board::from_rows(&["***", "***", "***"]).unwrap();
        assert_eq!(live_neighbours(&board, 0, 0), 3);
        assert_eq!(live_neighbours(&board, 2, 2), 3);
        assert_eq!(live_neighbours(&board, 0, 1), 5);
        assert_eq!(live_neighbours(&board, 1, 0), 5);
        assert_eq!(live_neighbours(&board, 1, 1), 8);
    }

    #[test]
    fn test_no_wraparound() {
        // a full opposite edge must not leak into the corner count
        let board = Board::from_rows(&["...*", "...*", "...*", "****"]).unwrap();
        assert_eq!(live_neighbours(&board, 0, 0), 0);
        assert!(!will_live(&board, 0, 0));
    }

    #[test]
    fn test_single_row_board() {
        let board = Board::from_rows(&["***"]).unwrap();
        assert_eq!(live_neighbours(&board, 0, 0), 1);
        assert_eq!(live_neighbours(&board, 0, 1), 2);
        assert!(will_live(&board, 0, 1));
        assert!(!will_live(&board, 0, 2));
    }
}
