mod run;
mod util;

use clap::Parser;
use run::{run_simulation, RunArgs};

#[derive(Parser, Debug)]
#[command(version, about)]
struct CLIParser {
    #[command(flatten)]
    run: RunArgs,
}

fn main() {
    util::init_tracing();
    let args = CLIParser::parse();

    if let Err(err) = run_simulation(args.run) {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}
