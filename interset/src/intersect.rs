mod adaptive;

pub use adaptive::{baseline, intersect, intersect_with, select_strategy, Strategy};
