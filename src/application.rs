//! Application layer: the caller-facing query operations and the result
//! boundary that keeps raised failures from crossing into caller code

pub mod boundary;
pub mod query;

pub use boundary::{attempt, fail, rescue};
