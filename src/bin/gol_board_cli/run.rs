use crate::util::{print_population, reset_cursor};
use anyhow::Result;
use clap::{Args, ValueEnum};
use gol_board::{
    BandedEngine, EngineConfig, LifeEngine, SequentialEngine, WorkerCount, WORKER_THREADS,
};
use std::time::Duration;

#[derive(Args, Debug)]
pub(super) struct RunArgs {
    /// Board height, at most `max_height`
    #[arg(long, default_value_t = 25)]
    height: usize,

    /// Board width, at most `max_width`
    #[arg(long, default_value_t = 100)]
    width: usize,

    /// Spawn chance: 0 - no cells spawn, 1 - fills the board completely
    #[arg(short, long, default_value_t = 0.33)]
    density: f64,

    /// Simulation updates per second
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=30))]
    update: u32,

    /// Simulation steps
    #[arg(short, long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    count: u64,

    /// The engine to use for the simulation, default is banded
    #[arg(short, long, value_enum, default_value_t = Engine::Banded)]
    engine: Engine,

    /// Fixed number of row bands for the banded engine, floor(log2(height)) + 1 by default
    #[arg(short, long)]
    workers: Option<usize>,

    /// The number of runtime threads for the banded engine, one per band by default
    #[arg(short, long, default_value_t = 0)]
    threads: u32,

    /// Seed of the initial board, random by default
    #[arg(short, long)]
    seed: Option<u64>,

    /// Largest accepted board height
    #[arg(long, default_value_t = EngineConfig::DEFAULT_MAX_HEIGHT)]
    max_height: usize,

    /// Largest accepted board width
    #[arg(long, default_value_t = EngineConfig::DEFAULT_MAX_WIDTH)]
    max_width: usize,

    /// Print population and hash of the final board
    #[arg(short, long)]
    population: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Engine {
    /// Whole board on the main thread
    Sequential,
    /// Row bands on persistent workers
    Banded,
}

pub(super) fn run_simulation(args: RunArgs) -> Result<()> {
    WORKER_THREADS.store(args.threads, std::sync::atomic::Ordering::Relaxed);
    let config = EngineConfig {
        max_height: args.max_height,
        max_width: args.max_width,
        workers: args.workers.map_or(WorkerCount::Log2, WorkerCount::Fixed),
    };

    let mut engine: Box<dyn LifeEngine> = match args.engine {
        Engine::Sequential => Box::new(SequentialEngine::new(config)),
        Engine::Banded => Box::new(BandedEngine::new(config)),
    };
    engine.populate_seeded(args.height, args.width, args.density, args.seed)?;
    tracing::info!(
        engine = ?args.engine,
        height = args.height,
        width = args.width,
        density = args.density,
        "Starting simulation"
    );

    println!("Turn 0");
    println!("{}", engine.render());

    let period = Duration::from_secs(1) / args.update;
    let timer = std::time::Instant::now();
    for turn in 1..=args.count {
        std::thread::sleep(period);
        engine.step();

        reset_cursor(args.height);
        println!("Turn {turn}");
        println!("{}", engine.render());
    }
    tracing::info!(
        "Simulated {} generations in {:.1} secs",
        args.count,
        timer.elapsed().as_secs_f64()
    );

    if args.population {
        if let Some(board) = engine.board() {
            print_population(board);
        }
    }
    Ok(())
}
