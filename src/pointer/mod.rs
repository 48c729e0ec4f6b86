mod from;
pub(crate) mod point;

pub use point::{Path, Segment};
