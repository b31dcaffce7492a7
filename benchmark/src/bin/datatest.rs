use std::collections::HashSet;

use benchmark::{
    generators,
    handles::{Representation, TestCollection, ALL_REPRESENTATIONS},
    schema::{ConfigPoint, PERCENT},
    timer::{Algorithm, ALGORITHMS},
};
use clap::Parser;
use colored::Colorize;
use indicatif::ParallelProgressIterator;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(default_value_t = 1000, long)]
    trials: u64,
    #[arg(default_value_t = 0, long)]
    seed: u64,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_datatest(&cli) {
        let msg = format!("error: {}", e);
        println!("{}", msg.red().bold());
    }
    else {
        println!("{}", "all algorithms agree".green().bold());
    }
}

/// Random configuration points verified in parallel. Every worker builds
/// its own handles and rng, so invocations of the core never share state.
fn run_datatest(cli: &Cli) -> Result<(), String> {
    (0..cli.trials)
        .into_par_iter()
        .progress_count(cli.trials)
        .try_for_each(|trial| {
            verify_trial(cli.seed, trial)
                .map_err(|e| format!("trial #{}: {}", trial, e))
        })
}

fn verify_trial(seed: u64, trial: u64) -> Result<(), String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(trial);

    let receiver_kind = random_kind(&mut rng);
    let parameter_kind = random_kind(&mut rng);
    let point = ConfigPoint {
        receiver_size: rng.gen_range(0..=1024),
        parameter_size: rng.gen_range(0..=1024),
        receiver_kind: receiver_kind.label().to_string(),
        parameter_kind: parameter_kind.label().to_string(),
        overlap: rng.gen_range(0..=PERCENT),
    };

    let pair = generators::gen_pair(&point, &mut rng);

    let expected: HashSet<i32> = {
        let receiver: HashSet<i32> = pair.receiver.iter().copied().collect();
        pair.parameter.iter()
            .filter(|item| receiver.contains(item))
            .copied()
            .collect()
    };

    for name in ALGORITHMS {
        let algorithm = Algorithm::new(name)
            .ok_or_else(|| format!("unknown algorithm {}", name))?;

        let receiver = TestCollection::build(receiver_kind, &pair.receiver);
        let parameter = TestCollection::build(parameter_kind, &pair.parameter);

        let result = algorithm.run(&receiver, &parameter);

        if result != expected {
            return Err(format!(
                "{} disagrees with the std oracle at {:?}",
                name, point
            ));
        }
        if result.len() != pair.expected {
            return Err(format!(
                "{} produced {} elements, generator promised {}",
                name, result.len(), pair.expected
            ));
        }
    }

    Ok(())
}

fn random_kind(rng: &mut ChaCha8Rng) -> Representation {
    ALL_REPRESENTATIONS[rng.gen_range(0..ALL_REPRESENTATIONS.len())]
}
