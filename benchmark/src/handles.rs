use std::collections::HashSet;
use std::str::FromStr;
use std::vec;

use interset::{Collection, OnePass};

/// Representation kinds the harness can realize an input as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Set,
    OrderedSequence,
    OnePassIterable,
}

pub const ALL_REPRESENTATIONS: [Representation; 3] = [
    Representation::Set,
    Representation::OrderedSequence,
    Representation::OnePassIterable,
];

impl FromStr for Representation {
    type Err = String;

    /// An unrecognized kind is a harness construction error; it aborts the
    /// configuration run it belongs to and nothing else.
    fn from_str(kind: &str) -> Result<Self, String> {
        match kind {
            "set" => Ok(Representation::Set),
            "ordered-sequence" => Ok(Representation::OrderedSequence),
            "one-pass-iterable" => Ok(Representation::OnePassIterable),
            _ => Err(format!("unsupported representation kind: {}", kind)),
        }
    }
}

impl Representation {
    pub fn label(&self) -> &'static str {
        match self {
            Representation::Set => "set",
            Representation::OrderedSequence => "ordered-sequence",
            Representation::OnePassIterable => "one-pass-iterable",
        }
    }
}

/// One realized input collection. Rebuilt for every intersect invocation so
/// one-pass handles are always fresh and concurrent workers share nothing.
pub enum TestCollection {
    Set(HashSet<i32>),
    OrderedSequence(Vec<i32>),
    OnePassIterable(OnePass<vec::IntoIter<i32>>),
}

impl TestCollection {
    pub fn build(kind: Representation, values: &[i32]) -> Self {
        match kind {
            Representation::Set =>
                TestCollection::Set(values.iter().copied().collect()),
            Representation::OrderedSequence =>
                TestCollection::OrderedSequence(values.to_vec()),
            Representation::OnePassIterable =>
                TestCollection::OnePassIterable(OnePass::new(values.to_vec().into_iter())),
        }
    }

    pub fn handle(&self) -> &dyn Collection<i32> {
        match self {
            TestCollection::Set(set) => set,
            TestCollection::OrderedSequence(sequence) => sequence,
            TestCollection::OnePassIterable(one_pass) => one_pass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interset::Capabilities;

    #[test]
    fn recognized_kinds_parse() {
        for kind in ALL_REPRESENTATIONS {
            assert_eq!(kind.label().parse::<Representation>(), Ok(kind));
        }
    }

    #[test]
    fn unrecognized_kind_is_a_construction_error() {
        let parsed = "linked-list".parse::<Representation>();

        assert_eq!(
            parsed,
            Err("unsupported representation kind: linked-list".to_string()));
    }

    #[test]
    fn realizations_expose_the_expected_capabilities() {
        let values = [1, 2, 3];

        let set = TestCollection::build(Representation::Set, &values);
        let sequence = TestCollection::build(Representation::OrderedSequence, &values);
        let one_pass = TestCollection::build(Representation::OnePassIterable, &values);

        assert_eq!(
            Capabilities::probe(set.handle()),
            Capabilities { constant_time_membership: true, size: Some(3) });
        assert_eq!(
            Capabilities::probe(sequence.handle()),
            Capabilities { constant_time_membership: false, size: Some(3) });
        assert_eq!(
            Capabilities::probe(one_pass.handle()),
            Capabilities::default());
    }
}
