use super::{bands, Phase};
use crate::{Board, WORKER_THREADS};
use anyhow::Result;
use std::ops::Range;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{atomic::Ordering, Arc};
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc;

/// Persistent workers, one per row band of a shared [`Board`].
///
/// Each worker parks on its own wake channel and reports to a shared
/// completion channel; [`WorkerPool::run`] broadcasts a phase and blocks until
/// every worker has acknowledged it. A worker whose phase panics reports the
/// failure instead of an acknowledgement and exits, so the driver panics rather
/// than waiting forever. Dropping the pool closes the wake channels, which ends
/// the worker loops, and shuts the runtime down.
pub(crate) struct WorkerPool {
    wakes: Vec<mpsc::Sender<Phase>>,
    /// `Ok(id)` for a finished phase, `Err(id)` for a panicked one.
    done: mpsc::Receiver<Result<usize, usize>>,
    bands: Vec<Range<usize>>,
    runtime: Runtime,
}

impl WorkerPool {
    pub(crate) fn new(board: &Arc<Board>, band_sizes: &[usize]) -> Result<Self> {
        let bands = bands(band_sizes);
        let mut builder = Builder::new_multi_thread();
        let threads = match WORKER_THREADS.load(Ordering::Relaxed) {
            0 => std::thread::available_parallelism()
                .map_or(1, |x| x.get())
                .min(bands.len()),
            x => x as usize,
        };
        let runtime = builder
            .worker_threads(threads)
            .thread_name("gol-band-worker")
            .build()?;

        let (done_tx, done) = mpsc::channel(bands.len());
        let wakes = bands
            .iter()
            .enumerate()
            .map(|(id, band)| {
                let (wake_tx, mut wake_rx) = mpsc::channel(1);
                let board = Arc::clone(board);
                let done_tx = done_tx.clone();
                let band = band.clone();
                runtime.spawn(async move {
                    while let Some(phase) = wake_rx.recv().await {
                        let report = panic::catch_unwind(AssertUnwindSafe(|| {
                            board.run_phase(phase, band.clone())
                        }))
                        .map(|()| id)
                        .map_err(|_| id);
                        let panicked = report.is_err();
                        if done_tx.send(report).await.is_err() || panicked {
                            break;
                        }
                    }
                });
                wake_tx
            })
            .collect();

        tracing::debug!(
            bands = ?bands,
            threads,
            "Spawned {} band workers",
            band_sizes.len()
        );
        Ok(Self {
            wakes,
            done,
            bands,
            runtime,
        })
    }

    /// Runs `phase` on every band and returns once all of them are finished.
    ///
    /// # Panics
    ///
    /// Panics if a worker panicked while running its band.
    pub(crate) fn run(&mut self, phase: Phase) {
        let Self {
            wakes,
            done,
            runtime,
            ..
        } = self;
        let panicked = runtime.block_on(async {
            for wake in wakes.iter() {
                wake.send(phase)
                    .await
                    .expect("A bug in WorkerPool: band worker exited");
            }
            let mut panicked = Vec::new();
            for _ in 0..wakes.len() {
                let report = done
                    .recv()
                    .await
                    .expect("A bug in WorkerPool: band workers exited");
                if let Err(id) = report {
                    panicked.push(id);
                }
            }
            panicked
        });
        assert!(
            panicked.is_empty(),
            "A bug in WorkerPool: band workers {panicked:?} panicked"
        );
    }

    pub(crate) fn bands(&self) -> &[Range<usize>] {
        &self.bands
    }
}

impl Board {
    fn run_phase(&self, phase: Phase, rows: Range<usize>) {
        match phase {
            Phase::Compute => self.compute_rows(rows),
            Phase::Commit => self.commit_rows(rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::split_workload;
    use super::*;

    #[test]
    fn test_workers_are_reused() {
        let board = Arc::new(Board::from_rows(&[".....", "..*..", "..*..", "..*..", "....."]).unwrap());
        let expected = Board::from_rows(&[".....", ".....", ".***.", ".....", "....."]).unwrap();
        let mut pool = WorkerPool::new(&board, &split_workload(5, 3)).unwrap();
        assert_eq!(pool.bands(), [0..1, 1..3, 3..5]);

        for generation in 1..=6 {
            pool.run(Phase::Compute);
            pool.run(Phase::Commit);
            if generation % 2 == 1 {
                assert_eq!(*board, expected);
            } else {
                assert_ne!(*board, expected);
            }
        }
        assert!(board.is_at_rest());
    }

    #[test]
    fn test_empty_bands_are_harmless() {
        let board = Arc::new(Board::from_rows(&["***"]).unwrap());
        let mut pool = WorkerPool::new(&board, &split_workload(1, 4)).unwrap();
        pool.run(Phase::Compute);
        pool.run(Phase::Commit);
        assert_eq!(*board, Board::from_rows(&[".*."]).unwrap());
    }

    #[test]
    #[should_panic(expected = "band workers [1] panicked")]
    fn test_worker_panic_reaches_driver() {
        // the second band runs past the last row and panics on indexing
        let board = Arc::new(Board::from_rows(&["...", "***", "..."]).unwrap());
        let mut pool = WorkerPool::new(&board, &[1, 5]).unwrap();
        pool.run(Phase::Compute);
    }
}
