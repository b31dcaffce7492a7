use std::collections::HashSet;
use std::hash::Hash;

use crate::capability::Capabilities;
use crate::collection::{materialize, Collection, Lookup};

/// One concrete way of computing an intersection, picked from the
/// capability tags and sizes of the two inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Iterate the receiver once, testing each element against the
    /// parameter's native membership probe.
    DirectMembership,
    /// Both sizes known: materialize the smaller side, scan the larger.
    SizeAwareSwap,
    /// Materialize the receiver, scan the parameter once.
    FallbackMaterialize,
    /// Nothing known about either side: materialize both.
    DoubleMaterialize,
}

/// Pick the cheapest strategy the probed capabilities allow, where cheap is
/// measured by expected membership tests and allocations.
pub fn select_strategy(receiver: &Capabilities, parameter: &Capabilities) -> Strategy {
    if parameter.constant_time_membership {
        Strategy::DirectMembership
    }
    else if receiver.known_size() && parameter.known_size() {
        Strategy::SizeAwareSwap
    }
    else if receiver.known_size() || parameter.known_size() {
        Strategy::FallbackMaterialize
    }
    else {
        Strategy::DoubleMaterialize
    }
}

/// Intersection of two collection handles: every element present in both,
/// deduplicated, iteration order unspecified.
///
/// Probes both handles, selects a strategy, and executes it. Neither input
/// is mutated and a one-pass input is scanned at most once, so repeated
/// calls with equal inputs yield equal sets.
pub fn intersect<T>(
    receiver: &dyn Collection<T>,
    parameter: &dyn Collection<T>) -> HashSet<T>
where
    T: Eq + Hash + Clone,
{
    let strategy = select_strategy(
        &Capabilities::probe(receiver),
        &Capabilities::probe(parameter));

    intersect_with(strategy, receiver, parameter)
}

/// Run one strategy regardless of what probing would select.
///
/// Every strategy is total: a missing capability is made up for by
/// materializing through [`materialize`], so all four produce the same set
/// on any pair of well-typed handles.
pub fn intersect_with<T>(
    strategy: Strategy,
    receiver: &dyn Collection<T>,
    parameter: &dyn Collection<T>) -> HashSet<T>
where
    T: Eq + Hash + Clone,
{
    // A handle that knows it is empty short-circuits before any strategy
    // can touch the other side.
    if receiver.known_size() == Some(0) || parameter.known_size() == Some(0) {
        return HashSet::new();
    }
    if same_handle(receiver, parameter) {
        return materialize(receiver);
    }

    match strategy {
        Strategy::DirectMembership => direct_membership(receiver, parameter),
        Strategy::SizeAwareSwap => size_aware_swap(receiver, parameter),
        Strategy::FallbackMaterialize => fallback_materialize(receiver, parameter),
        Strategy::DoubleMaterialize => double_materialize(receiver, parameter),
    }
}

/// The non-adaptive reference point: always pay for a materialized receiver
/// and a parameter scan, no matter what the handles can do.
pub fn baseline<T>(
    receiver: &dyn Collection<T>,
    parameter: &dyn Collection<T>) -> HashSet<T>
where
    T: Eq + Hash + Clone,
{
    if same_handle(receiver, parameter) {
        return materialize(receiver);
    }
    let materialized = materialize(receiver);
    filter_scan(parameter, &materialized)
}

/// Identity of handles, not equality of contents.
fn same_handle<T>(a: &dyn Collection<T>, b: &dyn Collection<T>) -> bool {
    std::ptr::eq(
        a as *const dyn Collection<T> as *const u8,
        b as *const dyn Collection<T> as *const u8)
}

/// A side of the intersection in membership-testable form: either the
/// handle's own probe, or a one-scan materialization of it.
enum Probe<'a, T> {
    Native(&'a dyn Lookup<T>),
    Materialized(HashSet<T>),
}

impl<'a, T> Probe<'a, T>
where
    T: Eq + Hash + Clone,
{
    fn of(collection: &'a dyn Collection<T>) -> Self {
        match collection.lookup() {
            Some(probe) => Probe::Native(probe),
            None => Probe::Materialized(materialize(collection)),
        }
    }
}

impl<'a, T> Lookup<T> for Probe<'a, T>
where
    T: Eq + Hash,
{
    fn contains(&self, item: &T) -> bool {
        match self {
            Probe::Native(probe) => probe.contains(item),
            Probe::Materialized(set) => set.contains(item),
        }
    }
}

/// Scan `source` once, collecting every element `probe` accepts.
fn filter_scan<T>(source: &dyn Collection<T>, probe: &dyn Lookup<T>) -> HashSet<T>
where
    T: Eq + Hash + Clone,
{
    let mut result = HashSet::new();
    source.scan(&mut |item| {
        if probe.contains(item) {
            result.insert(item.clone());
        }
    });
    result
}

fn direct_membership<T>(
    receiver: &dyn Collection<T>,
    parameter: &dyn Collection<T>) -> HashSet<T>
where
    T: Eq + Hash + Clone,
{
    let probe = Probe::of(parameter);
    filter_scan(receiver, &probe)
}

/// Build a membership structure only for the smaller side, then scan the
/// larger side once against it. Equal sizes materialize the parameter so
/// the choice stays deterministic; forced execution without both sizes
/// falls back to the same side.
fn size_aware_swap<T>(
    receiver: &dyn Collection<T>,
    parameter: &dyn Collection<T>) -> HashSet<T>
where
    T: Eq + Hash + Clone,
{
    let receiver_smaller = match (receiver.known_size(), parameter.known_size()) {
        (Some(r), Some(p)) => r < p,
        _ => false,
    };

    let (small, large) = if receiver_smaller {
        (receiver, parameter)
    }
    else {
        (parameter, receiver)
    };

    let probe = Probe::of(small);
    filter_scan(large, &probe)
}

/// The least informed specialized path: one materialization of the
/// receiver, one scan of the parameter. Correct for fully generic one-pass
/// inputs since each side is touched exactly once.
fn fallback_materialize<T>(
    receiver: &dyn Collection<T>,
    parameter: &dyn Collection<T>) -> HashSet<T>
where
    T: Eq + Hash + Clone,
{
    let probe = Probe::of(receiver);
    filter_scan(parameter, &probe)
}

fn double_materialize<T>(
    receiver: &dyn Collection<T>,
    parameter: &dyn Collection<T>) -> HashSet<T>
where
    T: Eq + Hash + Clone,
{
    let receiver_set = materialize(receiver);
    let parameter_set = materialize(parameter);

    // Walk the smaller materialized set against the larger one; ties walk
    // the parameter's, matching the swap strategy's convention.
    let (small, large) = if receiver_set.len() < parameter_set.len() {
        (receiver_set, parameter_set)
    }
    else {
        (parameter_set, receiver_set)
    };

    small.into_iter().filter(|item| large.contains(item)).collect()
}
