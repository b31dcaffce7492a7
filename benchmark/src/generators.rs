use rand::{distributions::Uniform, seq::SliceRandom, Rng};

use crate::schema::{ConfigPoint, PERCENT_F};

/// Generated input pair plus the cardinality every intersection of it must
/// report.
pub struct GeneratedPair {
    pub receiver: Vec<i32>,
    pub parameter: Vec<i32>,
    pub expected: usize,
}

/// Build a receiver/parameter pair for one configuration point. The target
/// shared count is the overlap ratio applied to the smaller side; all other
/// values are distinct across both collections, so the expected
/// intersection cardinality is exact.
pub fn gen_pair(point: &ConfigPoint, rng: &mut impl Rng) -> GeneratedPair {
    let overlap = point.overlap as f64 / PERCENT_F;
    let small_len = point.receiver_size.min(point.parameter_size);
    // A ratio above 1.0 cannot share more than the smaller side holds.
    let shared_count = ((overlap * small_len as f64) as usize).min(small_len);

    let gen_count =
        point.receiver_size + point.parameter_size - shared_count;
    let values = shuffled_values(gen_count, rng);

    let (shared, unshared) = values.split_at(shared_count);
    let (only_receiver, only_parameter) =
        unshared.split_at(point.receiver_size - shared_count);

    let mut receiver = [shared, only_receiver].concat();
    let mut parameter = [shared, only_parameter].concat();
    receiver.sort_unstable();
    parameter.sort_unstable();

    assert!(receiver.len() == point.receiver_size);
    assert!(parameter.len() == point.parameter_size);

    GeneratedPair { receiver, parameter, expected: shared_count }
}

/// Returns `result_len` distinct values in random order, uniformly drawn
/// from a domain four times the requested length.
fn shuffled_values(result_len: usize, rng: &mut impl Rng) -> Vec<i32> {
    if result_len == 0 {
        return Vec::new();
    }

    let max_value = (result_len * 4) as i32;
    let distribution = Uniform::new(0, max_value);

    let mut items: Vec<i32> = Vec::new();
    while items.len() < result_len {
        let need = result_len - items.len();
        items.extend(rng.sample_iter(distribution).take(need * 2));
        items.sort_unstable();
        items.dedup();
    }
    items.shuffle(rng);
    items.truncate(result_len);
    items
}
