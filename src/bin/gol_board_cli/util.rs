use gol_board::Board;
use num_format::{CustomFormat, Grouping, ToFormattedString};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so that the frames on stdout stay intact.
pub(super) fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

pub(super) fn print_population(board: &Board) {
    let fmt = CustomFormat::builder()
        .grouping(Grouping::Standard)
        .separator("_")
        .build()
        .unwrap();
    println!("Population: {}", board.population().to_formatted_string(&fmt));
    println!("Hash: 0x{:016x}", board.hash());
}

/// Moves the cursor back over the previous `Turn` line and frame.
pub(super) fn reset_cursor(height: usize) {
    print!("\x1B[{}A", height + 4);
}
