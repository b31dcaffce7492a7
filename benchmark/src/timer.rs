use std::collections::HashSet;

use interset::{baseline, intersect, intersect_with, Strategy};

use crate::handles::TestCollection;

pub const ALGORITHMS: [&str; 6] = [
    "adaptive",
    "baseline",
    "direct_membership",
    "size_aware_swap",
    "fallback_materialize",
    "double_materialize",
];

type IntersectFn = Box<dyn Fn(&TestCollection, &TestCollection) -> HashSet<i32>>;

/// One named intersection entry point the harness can time: the adaptive
/// selector, the non-adaptive baseline, or one forced strategy.
pub struct Algorithm {
    intersect: IntersectFn,
}

impl Algorithm {
    pub fn new(name: &str) -> Option<Self> {
        let intersect: IntersectFn = match name {
            "adaptive" =>
                Box::new(|r, p| intersect(r.handle(), p.handle())),
            "baseline" =>
                Box::new(|r, p| baseline(r.handle(), p.handle())),
            "direct_membership" => forced(Strategy::DirectMembership),
            "size_aware_swap" => forced(Strategy::SizeAwareSwap),
            "fallback_materialize" => forced(Strategy::FallbackMaterialize),
            "double_materialize" => forced(Strategy::DoubleMaterialize),
            _ => return None,
        };
        Some(Self { intersect })
    }

    pub fn run(&self, receiver: &TestCollection, parameter: &TestCollection) -> HashSet<i32> {
        (self.intersect)(receiver, parameter)
    }
}

fn forced(strategy: Strategy) -> IntersectFn {
    Box::new(move |r, p| intersect_with(strategy, r.handle(), p.handle()))
}
