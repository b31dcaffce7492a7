use crate::collection::Collection;

/// Capability tags read off a collection handle without iterating it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// The handle lends out a constant-time membership probe.
    pub constant_time_membership: bool,
    /// Element count, when the handle knows it without iterating.
    pub size: Option<usize>,
}

impl Capabilities {
    /// Classify a handle. Side-effect free and safe to call on both inputs
    /// of an intersection in either order; a realization reporting nothing
    /// is treated as a generic one-pass iterable, never an error.
    pub fn probe<T>(collection: &dyn Collection<T>) -> Self {
        Self {
            constant_time_membership: collection.lookup().is_some(),
            size: collection.known_size(),
        }
    }

    pub fn known_size(&self) -> bool {
        self.size.is_some()
    }
}
