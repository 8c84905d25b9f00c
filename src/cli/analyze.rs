// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::collections::HashMap;
use std::process;

use colored::Colorize;

use crate::cli::args::AnalyzeArgs;
use crate::classifier::classify;
use crate::exercise::Exercise;
use crate::feedback::{Feedback, Tier};
use crate::source::Source;
use crate::{error, verbose, warn, VERSION};

/// Render one feedback message colored by tier.
fn colorize(feedback: &Feedback) -> String {
    match feedback.tier {
        Tier::Good => feedback.message.green().to_string(),
        Tier::Improve => feedback.message.yellow().to_string(),
        Tier::Poor => feedback.message.red().to_string(),
        Tier::Undetected => feedback.message.dimmed().to_string(),
    }
}

/// Run form analysis over a recorded pose frame stream.
pub fn run_analysis(args: &AnalyzeArgs) {
    let exercise: Exercise = match args.exercise.parse() {
        Ok(e) => e,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let source = Source::from(args.source.as_str());
    let reader = match source.open() {
        Ok(r) => r,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    println!("Ultralytics Workouts {VERSION} 🚀 {exercise}");

    let mut counts: HashMap<Tier, usize> = HashMap::new();
    let mut frames = 0usize;
    let mut parse_errors = 0usize;

    for result in reader {
        match result {
            Ok(frame) => {
                frames += 1;
                let feedback = classify(exercise, &frame);
                verbose!("frame {frames}: {}", colorize(&feedback));
                *counts.entry(feedback.tier).or_insert(0) += 1;
            }
            Err(e) => {
                parse_errors += 1;
                warn!("{e}");
            }
        }
    }

    if frames == 0 {
        warn!("no pose frames in source");
        return;
    }

    verbose!("");
    println!(
        "{} frames: {} good, {} improve, {} poor, {} undetected",
        frames,
        counts.get(&Tier::Good).copied().unwrap_or(0),
        counts.get(&Tier::Improve).copied().unwrap_or(0),
        counts.get(&Tier::Poor).copied().unwrap_or(0),
        counts.get(&Tier::Undetected).copied().unwrap_or(0),
    );
    if parse_errors > 0 {
        warn!("{parse_errors} malformed frame records skipped");
    }
}

/// Print the supported exercises, one per line.
pub fn run_list() {
    for exercise in crate::exercise::ALL_EXERCISES {
        println!("{exercise}");
    }
}
