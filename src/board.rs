use crate::rule;
use anyhow::{anyhow, Result};
use std::hash::{BuildHasher, Hasher};
use std::ops::Range;
use std::sync::atomic::{AtomicU8, Ordering};

/// Bounded rectangular Game of Life field.
///
/// Every cell is a single byte holding two generations at once:
/// bit 0 is the current state and bit 1 the pending one. A generation is
/// computed in two passes over the same storage, so no second grid is needed:
///
/// 1. [`Board::compute_rows`] sets bit 1 for every cell that lives on,
///    reading nothing but bit 0;
/// 2. [`Board::commit_rows`] shifts every cell right by one.
///
/// Cells are atomics so that several workers can run a pass over disjoint row
/// bands of one shared board. Ordering between the passes is provided by
/// whoever drives them; the cells themselves use relaxed operations.
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<AtomicU8>,
}

impl Board {
    pub(crate) const CURRENT: u8 = 1;
    pub(crate) const NEXT: u8 = 2;

    /// Creates a board with all cells dead.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the cell count overflows `usize`.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        Self::from_fn(height, width, |_, _| false)
    }

    pub(crate) fn from_fn(
        height: usize,
        width: usize,
        mut alive: impl FnMut(usize, usize) -> bool,
    ) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(anyhow!("Board must be at least 1x1, got {height}x{width}"));
        }
        let len = height
            .checked_mul(width)
            .ok_or_else(|| anyhow!("Board of {height}x{width} cells is too large"))?;
        let cells = (0..len)
            .map(|idx| AtomicU8::new(alive(idx / width, idx % width) as u8))
            .collect();
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Builds a board from text rows where `*` marks a live cell and
    /// `.` or a space marks a dead one.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty or jagged input and for unknown characters.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.len());
        if let Some(row) = rows.iter().find(|row| row.len() != width) {
            return Err(anyhow!("Row {row:?} differs in length from the first one"));
        }
        if let Some(c) = rows
            .iter()
            .flat_map(|row| row.chars())
            .find(|c| !matches!(c, '*' | '.' | ' '))
        {
            return Err(anyhow!("Unexpected character {c:?} in board rows"));
        }
        Self::from_fn(rows.len(), width, |i, j| rows[i].as_bytes()[j] == b'*')
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn cell(&self, i: usize, j: usize) -> &AtomicU8 {
        &self.cells[i * self.width + j]
    }

    /// Current state of the cell at row `i`, column `j`.
    #[inline]
    pub fn is_alive(&self, i: usize, j: usize) -> bool {
        self.cell(i, j).load(Ordering::Relaxed) & Self::CURRENT != 0
    }

    /// Must not be called while a generation is in progress.
    pub fn set_alive(&mut self, i: usize, j: usize, alive: bool) {
        *self.cells[i * self.width + j].get_mut() = alive as u8;
    }

    /// Phase 1 for the rows in `rows`: marks the cells that live on.
    pub(crate) fn compute_rows(&self, rows: Range<usize>) {
        for i in rows {
            for j in 0..self.width {
                if rule::will_live(self, i, j) {
                    self.cell(i, j).fetch_or(Self::NEXT, Ordering::Relaxed);
                }
            }
        }
    }

    /// Phase 2 for the rows in `rows`: the pending state becomes the current one.
    pub(crate) fn commit_rows(&self, rows: Range<usize>) {
        let cells = &self.cells[rows.start * self.width..rows.end * self.width];
        for cell in cells {
            let value = cell.load(Ordering::Relaxed);
            cell.store(value >> 1, Ordering::Relaxed);
        }
    }

    /// Advances the whole board by one generation on the calling thread.
    pub fn step(&mut self) {
        self.compute_rows(0..self.height);
        self.commit_rows(0..self.height);
    }

    /// Number of live cells.
    pub fn population(&self) -> u64 {
        self.cells
            .iter()
            .filter(|cell| cell.load(Ordering::Relaxed) & Self::CURRENT != 0)
            .count() as u64
    }

    /// Deterministic fingerprint of the dimensions and the current generation.
    pub fn hash(&self) -> u64 {
        let mut hasher = ahash::RandomState::with_seeds(
            0x243f_6a88_85a3_08d3,
            0x1319_8a2e_0370_7344,
            0xa409_3822_299f_31d0,
            0x082e_fa98_ec4e_6c89,
        )
        .build_hasher();
        hasher.write_usize(self.height);
        hasher.write_usize(self.width);
        for chunk in self.cells.chunks(8) {
            let mut word = 0u8;
            for (k, cell) in chunk.iter().enumerate() {
                word |= (cell.load(Ordering::Relaxed) & Self::CURRENT) << k;
            }
            hasher.write_u8(word);
        }
        hasher.finish()
    }

    /// Approximate heap usage in bytes.
    pub fn bytes_total(&self) -> usize {
        self.cells.capacity() * size_of::<AtomicU8>()
    }

    /// True if no cell carries a pending state, i.e. the board is at rest.
    #[cfg(test)]
    pub(crate) fn is_at_rest(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.load(Ordering::Relaxed) & Self::NEXT == 0)
    }
}

impl Clone for Board {
    fn clone(&self) -> Self {
        Self {
            height: self.height,
            width: self.width,
            cells: self
                .cells
                .iter()
                .map(|cell| AtomicU8::new(cell.load(Ordering::Relaxed)))
                .collect(),
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.height == other.height
            && self.width == other.width
            && (0..self.height).all(|i| {
                (0..self.width).all(|j| self.is_alive(i, j) == other.is_alive(i, j))
            })
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("height", &self.height)
            .field("width", &self.width)
            .field("population", &self.population())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_of(board: &Board) -> Vec<String> {
        (0..board.height())
            .map(|i| {
                (0..board.width())
                    .map(|j| if board.is_alive(i, j) { '*' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut board = Board::from_rows(&["...", "***", "..."]).unwrap();
        board.step();
        assert_eq!(rows_of(&board), [".*.", ".*.", ".*."]);
        assert!(board.is_at_rest());
        board.step();
        assert_eq!(rows_of(&board), ["...", "***", "..."]);
        assert!(board.is_at_rest());
    }

    #[test]
    fn test_block_is_still() {
        let mut board = Board::from_rows(&["....", ".**.", ".**.", "...."]).unwrap();
        let before = board.clone();
        for _ in 0..5 {
            board.step();
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_glider_dies_at_the_border() {
        // no wraparound: a glider reaching the corner turns into a block
        let mut board = Board::from_rows(&[".*....", "..*...", "***...", "......", "......", "......"])
            .unwrap();
        for _ in 0..32 {
            board.step();
        }
        assert_eq!(
            rows_of(&board),
            ["......", "......", "......", "......", "....**", "....**"]
        );
    }

    #[test]
    fn test_compute_does_not_touch_current_bits() {
        let board = Board::from_rows(&["...", "***", "..."]).unwrap();
        let before = board.clone();
        board.compute_rows(0..3);
        assert_eq!(board, before);
        assert!(!board.is_at_rest());
        board.commit_rows(0..3);
        assert!(board.is_at_rest());
        assert_eq!(rows_of(&board), [".*.", ".*.", ".*."]);
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(Board::new(0, 5).is_err());
        assert!(Board::new(5, 0).is_err());
        assert!(Board::from_rows(&[]).is_err());
        assert!(Board::from_rows(&["**", "*"]).is_err());
        assert!(Board::from_rows(&["*x"]).is_err());
        assert!(Board::new(usize::MAX / 2 + 1, 4).is_err());
        assert!(Board::new(3, usize::MAX).is_err());
    }

    #[test]
    fn test_population_and_hash() {
        let a = Board::from_rows(&["*.*", "..."]).unwrap();
        let mut b = Board::new(2, 3).unwrap();
        b.set_alive(0, 0, true);
        b.set_alive(0, 2, true);
        assert_eq!(a.population(), 2);
        assert_eq!(a.hash(), b.hash());

        // same cells, different shape
        let c = Board::from_rows(&["*.", "*.", ".."]).unwrap();
        assert_ne!(a.hash(), c.hash());
    }
}
