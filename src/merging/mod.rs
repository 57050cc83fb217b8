//! The merge family: the shared two-way merge routine and the two sorts
//! built on top of it.

pub mod merge;
pub mod merge_sort;
pub mod split_sort_merge;
