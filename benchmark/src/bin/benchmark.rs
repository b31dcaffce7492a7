use std::{
    collections::{HashMap, HashSet},
    fs::{self, File},
    path::PathBuf,
};

use benchmark::{
    fmt_open_err, format, generators,
    handles::Representation,
    harness, path_str,
    schema::*,
    timer::Algorithm,
};
use clap::Parser;
use colored::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(default_value = "experiment.toml", long)]
    experiment: PathBuf,
    #[arg(default_value = "results.json", long)]
    out: PathBuf,
    // Ignore --bench provided by cargo.
    #[arg(long, action)]
    bench: bool,
    benchmarks: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    if cfg!(debug_assertions) {
        println!("{}", "warning: running in debug mode".yellow().bold());
    }

    if let Err(e) = bench_from_file(&cli) {
        let msg = format!("error: {}", e);
        println!("{}", msg.red().bold());
    }
}

fn bench_from_file(cli: &Cli) -> Result<(), String> {
    let experiment_toml = fs::read_to_string(&cli.experiment)
        .map_err(|e| fmt_open_err(e, &cli.experiment))?;

    let experiment: Experiment = toml::from_str(&experiment_toml)
        .map_err(|e| format!(
            "invalid toml file {}: {}",
            path_str(&cli.experiment), e
        ))?;

    let sweep_algos = gen_sweep_to_algos_map(cli, &experiment);

    if sweep_algos.is_empty() {
        return Err("no benchmark matches found".to_string());
    }

    let results = run_benchmarks(cli, experiment, sweep_algos);

    write_results(results, &cli.out)?;

    Ok(())
}

type AlgorithmSet = HashSet<String>;
/// Map each sweep to the algorithms which need to be run on it. This saves
/// us from timing a sweep/algorithm pair twice if present in multiple
/// benchmarks.
fn gen_sweep_to_algos_map(cli: &Cli, experiment: &Experiment)
    -> HashMap<SweepId, AlgorithmSet>
{
    let mut sweep_algos: HashMap<SweepId, AlgorithmSet> = HashMap::new();
    for b in &experiment.benchmark {
        if cli.benchmarks.is_empty() || cli.benchmarks.contains(&b.name) {
            sweep_algos
                .entry(b.sweep.clone())
                .or_default()
                .extend(b.algorithms.iter().cloned());
        }
    }
    sweep_algos
}

fn run_benchmarks(
    cli: &Cli,
    experiment: Experiment,
    sweep_algos: HashMap<SweepId, AlgorithmSet>) -> Results
{
    let mut results = HashMap::<SweepId, SweepResults>::new();

    for sweep in &experiment.sweep {
        if let Some(algos) = sweep_algos.get(&sweep.name) {
            println!("{}", sweep.name.green().bold());

            let sweep_results = SweepResults {
                info: sweep.clone(),
                algos: run_sweep(sweep, algos),
            };
            results.insert(sweep.name.clone(), sweep_results);
        }
    }

    let benchmarks = if cli.benchmarks.is_empty() {
        experiment.benchmark
    }
    else {
        experiment.benchmark
            .into_iter()
            .filter(|b| cli.benchmarks.contains(&b.name))
            .collect()
    };

    Results {
        benchmarks,
        sweeps: results,
    }
}

fn run_sweep(info: &SweepInfo, algos: &AlgorithmSet) -> AlgorithmResults {
    let mut algorithm_results: AlgorithmResults =
        algos.iter().map(|a| (a.clone(), Vec::new())).collect();

    let mut rng = ChaCha8Rng::seed_from_u64(info.seed);

    for point in info.points() {
        println!("{}", format::format_point(&point).bold());

        // A construction error aborts this configuration point only.
        if let Err(e) = run_point(info, &point, &mut algorithm_results, &mut rng) {
            println!("{}", format!("  warn: {}", e).yellow());
        }
    }

    algorithm_results
}

fn run_point(
    info: &SweepInfo,
    point: &ConfigPoint,
    algorithm_results: &mut AlgorithmResults,
    rng: &mut ChaCha8Rng) -> Result<(), String>
{
    let receiver_kind: Representation = point.receiver_kind.parse()?;
    let parameter_kind: Representation = point.parameter_kind.parse()?;

    let pair = generators::gen_pair(point, rng);

    for (name, runs) in algorithm_results.iter_mut() {
        if let Some(algorithm) = Algorithm::new(name) {
            let timed = harness::time_algorithm(
                &algorithm, &pair, receiver_kind, parameter_kind,
                &info.timing, rng);

            match timed {
                Ok(times) => {
                    let median = median_time(&times);
                    println!("  {} {}", name, format::format_time(median));
                    runs.push(ResultRun { point: point.clone(), times });
                },
                Err(e) =>
                    println!("{}", format!("  {}: warn: {}", name, e).yellow()),
            }
        }
        else {
            println!("{}", format!("  unknown algorithm {}", name).yellow());
        }
    }

    Ok(())
}

fn median_time(times: &[u64]) -> u64 {
    let mut sorted = times.to_vec();
    sorted.sort_unstable();
    sorted.get(sorted.len() / 2).copied().unwrap_or(0)
}

fn write_results(results: Results, path: &PathBuf) -> Result<(), String> {
    let results_file = File::options()
        .write(true).create(true).truncate(true)
        .open(path)
        .map_err(|e| fmt_open_err(e, path))?;

    serde_json::to_writer(results_file, &results)
        .map_err(|e| format!(
            "failed to write {}: {}",
            path_str(path), e.to_string()
        ))?;

    Ok(())
}
