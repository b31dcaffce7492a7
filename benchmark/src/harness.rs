use std::{
    collections::HashSet,
    hint,
    time::{Duration, Instant},
};

use rand::Rng;

use crate::{
    generators::GeneratedPair,
    handles::{Representation, TestCollection, ALL_REPRESENTATIONS},
    schema::TimingInfo,
    timer::Algorithm,
};

/// Time one algorithm on one generated pair: a warm-up phase bounded by
/// duration, then the configured number of individually timed invocations,
/// each on freshly built handles so one-pass inputs are never reused.
pub fn time_algorithm(
    algorithm: &Algorithm,
    pair: &GeneratedPair,
    receiver_kind: Representation,
    parameter_kind: Representation,
    timing: &TimingInfo,
    rng: &mut impl Rng) -> Result<Vec<u64>, String>
{
    let warmup = Duration::from_millis(timing.warmup_millis);

    let warmup_start = Instant::now();
    while warmup_start.elapsed() < warmup {
        // Polluted warm-up feeds the algorithm a randomly chosen receiver
        // representation; the measured phase always uses the configured one.
        let kind = if timing.polluted_warmup {
            random_kind(rng)
        }
        else {
            receiver_kind
        };

        let receiver = TestCollection::build(kind, &pair.receiver);
        let parameter = TestCollection::build(parameter_kind, &pair.parameter);
        hint::black_box(algorithm.run(&receiver, &parameter));
    }

    let mut times = Vec::with_capacity(timing.measured_runs);
    for _ in 0..timing.measured_runs {
        let receiver = TestCollection::build(receiver_kind, &pair.receiver);
        let parameter = TestCollection::build(parameter_kind, &pair.parameter);

        let start = Instant::now();
        let result = hint::black_box(algorithm.run(&receiver, &parameter));
        let elapsed = start.elapsed();

        ensure_expected_cardinality(&result, pair.expected)?;
        times.push(elapsed.as_nanos() as u64);
    }

    Ok(times)
}

fn ensure_expected_cardinality(result: &HashSet<i32>, expected: usize) -> Result<(), String> {
    if result.len() != expected {
        Err(format!(
            "expected intersection of {} elements, found {}",
            expected, result.len()
        ))
    }
    else {
        Ok(())
    }
}

fn random_kind(rng: &mut impl Rng) -> Representation {
    ALL_REPRESENTATIONS[rng.gen_range(0..ALL_REPRESENTATIONS.len())]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::{generators, schema::ConfigPoint};

    fn timing() -> TimingInfo {
        TimingInfo {
            warmup_millis: 1,
            measured_runs: 3,
            polluted_warmup: false,
        }
    }

    #[test]
    fn produces_one_time_per_measured_run() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let point = ConfigPoint {
            receiver_size: 100,
            parameter_size: 100,
            receiver_kind: "set".to_string(),
            parameter_kind: "set".to_string(),
            overlap: 5000,
        };
        let pair = generators::gen_pair(&point, &mut rng);
        let algorithm = Algorithm::new("adaptive").unwrap();

        let times = time_algorithm(
            &algorithm,
            &pair,
            Representation::Set,
            Representation::Set,
            &timing(),
            &mut rng,
        ).unwrap();

        assert_eq!(times.len(), 3);
    }

    #[test]
    fn polluted_warmup_does_not_change_the_observed_result() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let point = ConfigPoint {
            receiver_size: 50,
            parameter_size: 200,
            receiver_kind: "ordered-sequence".to_string(),
            parameter_kind: "one-pass-iterable".to_string(),
            overlap: 9000,
        };
        let pair = generators::gen_pair(&point, &mut rng);
        let algorithm = Algorithm::new("adaptive").unwrap();

        let polluted = TimingInfo { polluted_warmup: true, ..timing() };

        // The cardinality check inside time_algorithm is the observation;
        // a pollution-dependent result would fail it.
        let times = time_algorithm(
            &algorithm,
            &pair,
            Representation::OrderedSequence,
            Representation::OnePassIterable,
            &polluted,
            &mut rng,
        ).unwrap();

        assert_eq!(times.len(), 3);
    }
}
