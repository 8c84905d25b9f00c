// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::{Args, Parser, Subcommand};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Analyze Options:
    --exercise, -e <EXERCISE>  Exercise to evaluate [default: Squat]
    --source, -s <SOURCE>      JSONL pose frame file, or '-' for stdin
    --verbose                  Show per-frame feedback

Examples:
    ultralytics-workouts analyze --exercise squat --source frames.jsonl
    ultralytics-workouts analyze -e "wall sit" -s frames.jsonl
    cat frames.jsonl | ultralytics-workouts analyze --exercise push-up
    ultralytics-workouts list"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a recorded pose frame stream for one exercise
    Analyze(AnalyzeArgs),
    /// List the supported exercises
    List,
}

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Exercise to evaluate (e.g. squat, push-up, "wall sit")
    #[arg(short, long, default_value = "Squat")]
    pub exercise: String,

    /// JSONL pose frame file, or '-' for stdin
    #[arg(short, long, default_value = "-")]
    pub source: String,

    /// Show per-frame feedback
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}
