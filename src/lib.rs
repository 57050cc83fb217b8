//! A testbed of the classic comparison sorts: the quadratic family (bubble,
//! selection, insertion), the merge family (two-way merge, split-sort-merge,
//! recursive merge sort), quicksort with a stable out-of-place partition, and
//! a tree sort over a binary-search-tree collaborator.
//!
//! Every sorter mutates the caller's slice in place and preserves the input
//! multiset; only the order of elements changes. None of them is the "best"
//! sort, the point is comparing their trade-offs.

use std::cmp::Ordering;

/// Common interface implemented by every sort in this crate via `sort_impl!`.
///
/// `T: Clone` is required because the divide-and-conquer sorts and the tree
/// sort lift elements out of the borrowed slice into owned intermediates.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(v: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(v);
            }

            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(v, compare);
            }
        }
    };
}

pub mod bst;
pub mod merging;
pub mod order;
pub mod patterns;
pub mod quadratic;
pub mod quicksort;
pub mod registry;
pub mod treesort;

/// Moves a computed result back into the caller's buffer, element by element.
/// Uniform "sort into" contract shared by every out-of-place stage.
pub(crate) fn write_back<T>(dst: &mut [T], src: Vec<T>) {
    debug_assert_eq!(dst.len(), src.len());

    for (slot, val) in dst.iter_mut().zip(src) {
        *slot = val;
    }
}
