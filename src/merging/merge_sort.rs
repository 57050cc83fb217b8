use std::cmp::Ordering;

use crate::merging::merge::merge_by_less;
use crate::order::is_sorted_by_less;
use crate::write_back;

sort_impl!("merge_sort");

/// Recursive merge sort: split at the midpoint, sort each half recursively,
/// merge the halves back over the original.
///
/// The base case is any slice the order check already accepts, not just
/// length <= 1, so already-sorted runs short-circuit the recursion. O(n log n)
/// worst case, O(n) extra space across the active recursion. Stable.
pub fn sort<T: Ord + Clone>(v: &mut [T]) {
    merge_sort(v, &mut |a, b| a.lt(b));
}

pub fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn merge_sort<T: Clone, F: FnMut(&T, &T) -> bool>(v: &mut [T], is_less: &mut F) {
    if is_sorted_by_less(v, is_less) {
        return;
    }

    let mid = v.len() / 2;
    let mut left = v[..mid].to_vec();
    let mut right = v[mid..].to_vec();

    merge_sort(&mut left, is_less);
    merge_sort(&mut right, is_less);

    write_back(v, merge_by_less(left, right, is_less));
}
