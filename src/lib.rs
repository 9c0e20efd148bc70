#![warn(clippy::all)]

mod banded;
mod board;
mod config;
mod error;
mod populate;
mod render;
pub mod rule;
mod scheduler;
mod sequential;
mod traits;

pub use banded::BandedEngine;
pub use board::Board;
pub use config::{EngineConfig, WorkerCount};
pub use error::InvalidParameter;
pub use render::{render, write_frame};
pub use scheduler::split_workload;
pub use sequential::SequentialEngine;
pub use traits::LifeEngine;

pub type DefaultEngine = BandedEngine;

pub const VERSION: &str = "0.1.0";

use std::sync::atomic::AtomicU32;
/// Threads of the runtime behind each [`BandedEngine`] pool; 0 means one per band, capped by the available parallelism.
/// Read when the pool is built, i.e. on `populate`.
pub static WORKER_THREADS: AtomicU32 = AtomicU32::new(0);
