use std::{
    cell::RefCell,
    collections::{BTreeSet, HashSet},
    hash,
};

/// Constant-time membership probe lent out by collections which support it.
pub trait Lookup<T> {
    fn contains(&self, item: &T) -> bool;
}

/// A handle to a sequence of elements with a runtime-probed capability set.
///
/// Realizations report only what they can actually deliver: a membership
/// probe when `contains` runs in constant time, and an element count when it
/// is available without iterating. Strategy selection reads these two
/// accessors and nothing else, so it works the same for any realization.
pub trait Collection<T> {
    /// Membership probe, present exactly when tests run in constant time.
    fn lookup(&self) -> Option<&dyn Lookup<T>>;

    /// Element count, present exactly when known without iterating.
    fn known_size(&self) -> Option<usize>;

    /// Visit every element once. A realization without repeat-iteration
    /// guarantees may only be scanned once per handle (see [`OnePass`]).
    fn scan(&self, visit: &mut dyn FnMut(&T));
}

impl<T> Lookup<T> for HashSet<T>
where
    T: Eq + hash::Hash,
{
    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }
}

impl<T> Collection<T> for HashSet<T>
where
    T: Eq + hash::Hash,
{
    fn lookup(&self) -> Option<&dyn Lookup<T>> {
        Some(self)
    }

    fn known_size(&self) -> Option<usize> {
        Some(self.len())
    }

    fn scan(&self, visit: &mut dyn FnMut(&T)) {
        for item in self {
            visit(item);
        }
    }
}

/// Tree sets know their size, but membership is logarithmic, so no probe.
impl<T: Ord> Collection<T> for BTreeSet<T> {
    fn lookup(&self) -> Option<&dyn Lookup<T>> {
        None
    }

    fn known_size(&self) -> Option<usize> {
        Some(self.len())
    }

    fn scan(&self, visit: &mut dyn FnMut(&T)) {
        for item in self {
            visit(item);
        }
    }
}

impl<T> Collection<T> for Vec<T> {
    fn lookup(&self) -> Option<&dyn Lookup<T>> {
        None
    }

    fn known_size(&self) -> Option<usize> {
        Some(self.len())
    }

    fn scan(&self, visit: &mut dyn FnMut(&T)) {
        for item in self {
            visit(item);
        }
    }
}

/// One-shot iterable reporting the empty capability set.
///
/// The wrapped iterator can be scanned exactly once; the consumed flag makes
/// a second scan a panic instead of a silently empty result.
pub struct OnePass<I> {
    source: RefCell<Option<I>>,
}

impl<I> OnePass<I> {
    pub fn new(source: I) -> Self {
        Self { source: RefCell::new(Some(source)) }
    }

    /// True once the underlying iterator has been drained.
    pub fn consumed(&self) -> bool {
        self.source.borrow().is_none()
    }
}

impl<T, I> Collection<T> for OnePass<I>
where
    I: Iterator<Item = T>,
{
    fn lookup(&self) -> Option<&dyn Lookup<T>> {
        None
    }

    fn known_size(&self) -> Option<usize> {
        None
    }

    fn scan(&self, visit: &mut dyn FnMut(&T)) {
        let source = self.source.borrow_mut().take()
            .expect("one-pass collection scanned twice");
        for item in source {
            visit(&item);
        }
    }
}

/// Single access point for turning a handle into a membership-testable
/// structure. Costs one scan and one allocation sized by the handle's
/// reported size, when it has one.
pub fn materialize<T>(collection: &dyn Collection<T>) -> HashSet<T>
where
    T: Eq + hash::Hash + Clone,
{
    let mut set = match collection.known_size() {
        Some(size) => HashSet::with_capacity(size),
        None => HashSet::new(),
    };
    collection.scan(&mut |item| {
        set.insert(item.clone());
    });
    set
}
