// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use ultralytics_workouts::cli::args::{Cli, Commands};
use ultralytics_workouts::cli::{analyze, logging};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => {
            logging::set_verbose(args.verbose);
            analyze::run_analysis(&args);
        }
        Commands::List => analyze::run_list(),
    }
}
