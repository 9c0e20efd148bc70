mod pool;
mod split;

/// Half of a generation, run by every worker before the next half starts anywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Mark the cells that live on, reading only the current state.
    Compute,
    /// Shift the pending state into the current one.
    Commit,
}

use split::bands;

pub(crate) use pool::WorkerPool;
pub use split::split_workload;
