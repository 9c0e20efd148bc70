use crate::{Board, EngineConfig, LifeEngine};
use anyhow::Result;

/// Single-threaded engine: the whole board is one band updated on the caller's thread.
///
/// It is the reference the parallel engine is checked against.
///
/// # Example
///
/// ```rust
/// use gol_board::{Board, EngineConfig, LifeEngine, SequentialEngine};
///
/// let mut engine = SequentialEngine::new(EngineConfig::default());
/// engine
///     .load_board(Board::from_rows(&["...", "***", "..."]).unwrap())
///     .unwrap();
/// engine.step();
/// assert_eq!(engine.render(), "+---+\n| * |\n| * |\n| * |\n+---+\n");
/// ```
pub struct SequentialEngine {
    config: EngineConfig,
    board: Option<Board>,
}

impl LifeEngine for SequentialEngine {
    fn new(config: EngineConfig) -> Self {
        Self {
            config,
            board: None,
        }
    }

    fn populate_seeded(
        &mut self,
        height: usize,
        width: usize,
        density: f64,
        seed: Option<u64>,
    ) -> Result<()> {
        self.config.validate(height, width, density)?;
        let board = Board::random(height, width, density, seed)?;
        tracing::debug!(height, width, density, population = board.population(), "Populated board");
        self.board = Some(board);
        Ok(())
    }

    fn load_board(&mut self, board: Board) -> Result<()> {
        self.config.validate_shape(board.height(), board.width())?;
        self.board = Some(board);
        Ok(())
    }

    fn step(&mut self) {
        if let Some(board) = self.board.as_mut() {
            board.step();
            tracing::trace!(population = board.population(), "Advanced one generation");
        }
    }

    fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InvalidParameter;

    #[test]
    fn test_blank_engine() {
        let mut engine = SequentialEngine::new(EngineConfig::default());
        engine.step();
        assert!(engine.board().is_none());
        assert_eq!(engine.render(), "");
        assert_eq!(engine.bytes_total(), 0);
    }

    #[test]
    fn test_failed_populate_keeps_previous_board() {
        let mut engine = SequentialEngine::new(EngineConfig::default());
        engine.populate(4, 6, 1.0).unwrap();
        let err = engine.populate(4, 6, 1.5).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InvalidParameter>(),
            Some(&InvalidParameter::Density(1.5))
        );
        assert_eq!(engine.board().unwrap().population(), 24);
    }

    #[test]
    fn test_oversized_board_is_rejected() {
        let mut engine = SequentialEngine::new(EngineConfig::unbounded());
        engine.populate(3, 3, 1.0).unwrap();
        assert!(engine.populate(usize::MAX / 2 + 1, 4, 0.0).is_err());
        assert_eq!(engine.board().unwrap().population(), 9);
        engine.step();
        assert_eq!(engine.render().lines().count(), 5);
    }

    #[test]
    fn test_load_board_respects_limits() {
        let mut engine = SequentialEngine::new(EngineConfig {
            max_height: 2,
            max_width: 2,
            ..Default::default()
        });
        assert!(engine.load_board(Board::new(3, 2).unwrap()).is_err());
        assert!(engine.load_board(Board::new(2, 2).unwrap()).is_ok());
    }
}
