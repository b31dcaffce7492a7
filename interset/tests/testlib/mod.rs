use std::cell::RefCell;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::vec;

use quickcheck::Arbitrary;

use interset::{Collection, Lookup, OnePass, Strategy};

// Arbitrary Strategy //
#[derive(Clone)]
pub struct ForcedStrategy(&'static str, pub Strategy);

impl fmt::Debug for ForcedStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl quickcheck::Arbitrary for ForcedStrategy {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        g.choose([
            ForcedStrategy("direct_membership", Strategy::DirectMembership),
            ForcedStrategy("size_aware_swap", Strategy::SizeAwareSwap),
            ForcedStrategy("fallback_materialize", Strategy::FallbackMaterialize),
            ForcedStrategy("double_materialize", Strategy::DoubleMaterialize),
        ].as_slice())
        .unwrap()
        .clone()
    }
}

// Arbitrary Representation Kind //
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Set,
    Tree,
    Sequence,
    OnePass,
}

impl Kind {
    /// The nearest kind supporting repeated iteration, for properties that
    /// must observe an input after the call.
    pub fn repeatable(self) -> Kind {
        match self {
            Kind::OnePass => Kind::Sequence,
            other => other,
        }
    }
}

impl quickcheck::Arbitrary for Kind {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Kind::Set, Kind::Tree, Kind::Sequence, Kind::OnePass])
            .unwrap()
    }
}

// Realized Collection //
/// One input collection realized as a concrete representation. Rebuilt for
/// every intersect call so one-pass realizations are always fresh.
pub enum Realized {
    Set(HashSet<i32>),
    Tree(BTreeSet<i32>),
    Sequence(Vec<i32>),
    OnePass(OnePass<vec::IntoIter<i32>>),
}

impl Realized {
    pub fn build(kind: Kind, values: &[i32]) -> Self {
        match kind {
            Kind::Set => Realized::Set(values.iter().copied().collect()),
            Kind::Tree => Realized::Tree(values.iter().copied().collect()),
            Kind::Sequence => Realized::Sequence(values.to_vec()),
            Kind::OnePass =>
                Realized::OnePass(OnePass::new(values.to_vec().into_iter())),
        }
    }

    pub fn handle(&self) -> &dyn Collection<i32> {
        match self {
            Realized::Set(set) => set,
            Realized::Tree(tree) => tree,
            Realized::Sequence(seq) => seq,
            Realized::OnePass(iter) => iter,
        }
    }
}

// Arbitrary Pair of Element Vectors //
#[derive(Debug, Clone)]
pub struct SimilarPair(pub Vec<i32>, pub Vec<i32>);

impl quickcheck::Arbitrary for SimilarPair {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let shared: Vec<i32> = Vec::arbitrary(g);

        let mut left = Vec::arbitrary(g);
        let mut right = Vec::arbitrary(g);
        left.extend(&shared);
        right.extend(&shared);

        SimilarPair(left, right)
    }
}

/// Reference result computed with the standard library alone.
pub fn oracle(a: &[i32], b: &[i32]) -> HashSet<i32> {
    let a: HashSet<i32> = a.iter().copied().collect();
    let b: HashSet<i32> = b.iter().copied().collect();
    a.intersection(&b).copied().collect()
}

// Scan-Order Tracing //
/// Wrapper recording when its inner collection is scanned, shared through a
/// log cell so tests can observe which side a strategy materializes first.
pub struct Traced<'a, C> {
    label: &'static str,
    log: &'a RefCell<Vec<&'static str>>,
    inner: C,
}

impl<'a, C> Traced<'a, C> {
    pub fn new(label: &'static str, log: &'a RefCell<Vec<&'static str>>, inner: C) -> Self {
        Self { label, log, inner }
    }
}

impl<'a, T, C> Collection<T> for Traced<'a, C>
where
    C: Collection<T>,
{
    fn lookup(&self) -> Option<&dyn Lookup<T>> {
        self.inner.lookup()
    }

    fn known_size(&self) -> Option<usize> {
        self.inner.known_size()
    }

    fn scan(&self, visit: &mut dyn FnMut(&T)) {
        self.log.borrow_mut().push(self.label);
        self.inner.scan(visit);
    }
}
