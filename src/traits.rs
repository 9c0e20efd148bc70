use crate::{Board, EngineConfig};
use anyhow::Result;

/// Game engine for a bounded Game of Life board
pub trait LifeEngine {
    /// Creates an engine with no board.
    ///
    /// # Parameters
    /// * `config` - Size limits checked by [`LifeEngine::populate`] and, for
    ///   parallel engines, the number of row bands.
    fn new(config: EngineConfig) -> Self
    where
        Self: Sized;

    /// Replaces the board with a fresh random one of `height` rows and `width` columns,
    /// each cell alive with probability `density`.
    ///
    /// # Returns
    /// * `Ok(())` - The board (and any worker pool) was rebuilt
    /// * `Err(_)` - [`InvalidParameter`](crate::InvalidParameter) if an argument is out of
    ///   range; the engine is left untouched
    fn populate(&mut self, height: usize, width: usize, density: f64) -> Result<()> {
        self.populate_seeded(height, width, density, None)
    }

    /// Same as [`LifeEngine::populate`], but with an explicit seed when `seed` is `Some`.
    fn populate_seeded(
        &mut self,
        height: usize,
        width: usize,
        density: f64,
        seed: Option<u64>,
    ) -> Result<()>;

    /// Installs an existing board, e.g. a hand-made pattern.
    ///
    /// # Errors
    ///
    /// Fails if the board exceeds the configured size limits.
    fn load_board(&mut self, board: Board) -> Result<()>;

    /// Advances the board by one generation and blocks until it is complete.
    ///
    /// Does nothing if no board was populated yet.
    fn step(&mut self);

    /// Returns the current board, if any.
    fn board(&self) -> Option<&Board>;

    /// Returns the current frame, or an empty string if there is no board.
    fn render(&self) -> String {
        self.board().map(crate::render).unwrap_or_default()
    }

    /// Returns the approximate heap memory usage of the engine in bytes.
    fn bytes_total(&self) -> usize {
        self.board().map_or(0, Board::bytes_total)
    }
}
