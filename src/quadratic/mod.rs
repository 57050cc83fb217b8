//! The O(n^2) in-place family. All three repeat a bounded-work pass until the
//! order check reports sorted, trading a redundant final pass for a uniform
//! termination condition.

pub mod bubble;
pub mod insertion;
pub mod selection;
