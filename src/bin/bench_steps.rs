use gol_board::*;

fn main() {
    let (height, width, steps) = (1 << 11, 1 << 11, 64);
    let config = EngineConfig::unbounded();
    let board = Board::random(height, width, 0.33, Some(42)).unwrap();

    let mut engines: Vec<Box<dyn LifeEngine>> = vec![
        Box::new(SequentialEngine::new(config)),
        Box::new(BandedEngine::new(config)),
    ];
    let mut hashes = Vec::new();
    for (name, engine) in ["sequential", "banded"].into_iter().zip(engines.iter_mut()) {
        engine.load_board(board.clone()).unwrap();

        let timer = std::time::Instant::now();
        for _ in 0..steps {
            engine.step();
        }
        let elapsed = timer.elapsed();
        println!(
            "{name:<12} {steps} steps of {height}x{width} in {:.3} secs",
            elapsed.as_secs_f64()
        );
        hashes.push(engine.board().unwrap().hash());
    }
    assert!(hashes.windows(2).all(|w| w[0] == w[1]), "Engines diverged");
}
