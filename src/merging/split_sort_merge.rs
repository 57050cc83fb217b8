use std::cmp::Ordering;

use crate::merging::merge::merge_by_less;
use crate::quadratic::bubble;
use crate::write_back;

sort_impl!("split_sort_merge");

/// Sorts `v` by splitting it at the midpoint, bubble-sorting each half and
/// merging the results back over the original.
///
/// One level of divide-and-conquer over a quadratic sub-sort: still O(n^2)
/// overall, O(n) extra space for the two halves. Stable, both the sub-sort
/// and the merge are.
pub fn sort<T: Ord + Clone>(v: &mut [T]) {
    split_sort_merge(v, &mut |a, b| a.lt(b));
}

pub fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    split_sort_merge(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn split_sort_merge<T: Clone, F: FnMut(&T, &T) -> bool>(v: &mut [T], is_less: &mut F) {
    let mid = v.len() / 2;
    let mut left = v[..mid].to_vec();
    let mut right = v[mid..].to_vec();

    bubble::bubble_sort(&mut left, is_less);
    bubble::bubble_sort(&mut right, is_less);

    write_back(v, merge_by_less(left, right, is_less));
}
