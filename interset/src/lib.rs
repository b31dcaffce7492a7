pub mod capability;
pub mod collection;
pub mod intersect;

pub use capability::Capabilities;
pub use collection::{materialize, Collection, Lookup, OnePass};
pub use intersect::{baseline, intersect, intersect_with, select_strategy, Strategy};
