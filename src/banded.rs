use crate::scheduler::{split_workload, Phase, WorkerPool};
use crate::{Board, EngineConfig, LifeEngine};
use anyhow::Result;
use std::ops::Range;
use std::sync::Arc;

/// Parallel engine: the rows are split into contiguous bands, each owned by a
/// persistent worker for the whole run.
///
/// Workers are spawned by [`LifeEngine::populate`] (and [`LifeEngine::load_board`])
/// and reused by every [`LifeEngine::step`]. A step is two rounds of
/// wake-all / wait-for-all: one for the compute phase and one for the commit
/// phase, so no band shifts its cells while a neighbouring band still reads them.
///
/// The number of bands follows [`EngineConfig::workers`]; the size of the
/// underlying tokio runtime follows [`WORKER_THREADS`](crate::WORKER_THREADS).
///
/// Must not be created or dropped from inside an async context.
pub struct BandedEngine {
    config: EngineConfig,
    board: Option<Arc<Board>>,
    pool: Option<WorkerPool>,
}

impl BandedEngine {
    fn install(&mut self, board: Board) -> Result<()> {
        let workers = self.config.workers.for_rows(board.height());
        let board = Arc::new(board);
        let pool = WorkerPool::new(&board, &split_workload(board.height(), workers))?;
        // the old workers hold the old board until their pool is dropped
        self.pool = Some(pool);
        self.board = Some(board);
        Ok(())
    }

    /// Row ranges owned by the workers, empty if there is no board.
    pub fn bands(&self) -> &[Range<usize>] {
        match &self.pool {
            Some(pool) => pool.bands(),
            None => &[],
        }
    }
}

impl LifeEngine for BandedEngine {
    fn new(config: EngineConfig) -> Self {
        Self {
            config,
            board: None,
            pool: None,
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
        self.install(board)
    }

    fn load_board(&mut self, board: Board) -> Result<()> {
        self.config.validate_shape(board.height(), board.width())?;
        self.install(board)
    }

    fn step(&mut self) {
        if let Some(pool) = self.pool.as_mut() {
            pool.run(Phase::Compute);
            pool.run(Phase::Commit);
            tracing::trace!(bands = pool.bands().len(), "Advanced one generation");
        }
    }

    fn board(&self) -> Option<&Board> {
        self.board.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InvalidParameter, WorkerCount};
    const SEED: u64 = 42;

    #[test]
    fn test_bands_follow_height() {
        let mut engine = BandedEngine::new(EngineConfig::default());
        assert!(engine.bands().is_empty());

        engine.populate(1, 10, 0.5).unwrap();
        assert_eq!(engine.bands(), [0..1]);

        engine.populate(10, 10, 0.5).unwrap();
        assert_eq!(engine.bands(), [0..2, 2..4, 4..7, 7..10]);
    }

    #[test]
    fn test_invalid_populate_leaves_no_board() {
        for density in [-0.1, 1.1] {
            let mut engine = BandedEngine::new(EngineConfig::default());
            let err = engine.populate(5, 5, density).unwrap_err();
            assert_eq!(
                err.downcast_ref::<InvalidParameter>(),
                Some(&InvalidParameter::Density(density))
            );
            assert!(engine.board().is_none());
            assert!(engine.bands().is_empty());
        }
    }

    #[test]
    fn test_matches_board_step() {
        let mut engine = BandedEngine::new(EngineConfig::default().with_workers(WorkerCount::Fixed(7)));
        engine.populate_seeded(60, 80, 0.4, Some(SEED)).unwrap();
        let mut reference = engine.board().unwrap().clone();
        for _ in 0..20 {
            engine.step();
            reference.step();
            assert_eq!(engine.board().unwrap().hash(), reference.hash());
        }
    }
}
