use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub type SweepId = String;
pub type AlgorithmId = String;

// An integer i represents the ratio i/PERCENT_F (from 0.0 to 1.0)
pub const PERCENT: u32 = 10000;
pub const PERCENT_F: f64 = PERCENT as f64;

#[derive(Serialize, Deserialize, Debug)]
pub struct Experiment {
    pub benchmark: Vec<BenchmarkEntry>,
    pub sweep: Vec<SweepInfo>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BenchmarkEntry {
    pub name: String,
    pub title: String,
    pub sweep: SweepId,
    pub algorithms: Vec<AlgorithmId>,
}

/// Parameter matrix for one sweep: every combination of sizes, kinds and
/// overlap ratio becomes one timed configuration point.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct SweepInfo {
    pub name: SweepId,
    pub receiver_sizes: Vec<usize>,
    pub parameter_sizes: Vec<usize>,
    pub receiver_kinds: Vec<String>,
    pub parameter_kinds: Vec<String>,
    pub overlaps: Vec<u32>,
    pub seed: u64,
    #[serde(flatten)]
    pub timing: TimingInfo,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
pub struct TimingInfo {
    pub warmup_millis: u64,
    pub measured_runs: usize,
    /// Randomize the receiver's representation kind during warm-up only.
    #[serde(default)]
    pub polluted_warmup: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct ConfigPoint {
    pub receiver_size: usize,
    pub parameter_size: usize,
    pub receiver_kind: String,
    pub parameter_kind: String,
    pub overlap: u32,
}

impl SweepInfo {
    pub fn points(&self) -> Vec<ConfigPoint> {
        let mut points = Vec::new();
        for &receiver_size in &self.receiver_sizes {
            for &parameter_size in &self.parameter_sizes {
                for receiver_kind in &self.receiver_kinds {
                    for parameter_kind in &self.parameter_kinds {
                        for &overlap in &self.overlaps {
                            points.push(ConfigPoint {
                                receiver_size,
                                parameter_size,
                                receiver_kind: receiver_kind.clone(),
                                parameter_kind: parameter_kind.clone(),
                                overlap,
                            });
                        }
                    }
                }
            }
        }
        points
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Results {
    pub benchmarks: Vec<BenchmarkEntry>,
    pub sweeps: HashMap<SweepId, SweepResults>,
}

pub type AlgorithmResults = HashMap<AlgorithmId, Vec<ResultRun>>;

#[derive(Serialize, Deserialize, Debug)]
pub struct SweepResults {
    pub info: SweepInfo,
    pub algos: AlgorithmResults,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ResultRun {
    pub point: ConfigPoint,
    // Nanoseconds per invocation
    pub times: Vec<u64>,
}
