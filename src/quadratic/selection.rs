use std::cmp::Ordering;

use crate::order::is_sorted_by_less;

sort_impl!("selection_sort");

/// Sorts `v` by repeatedly selecting the minimum of the unsorted suffix and
/// swapping it to the front of that suffix.
///
/// O(n^2) comparisons, at most n - 1 swaps, O(1) extra space. The long-range
/// swaps make this the one unstable sort in the crate.
pub fn sort<T: Ord>(v: &mut [T]) {
    selection_sort(v, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn selection_sort<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], is_less: &mut F) {
    while !is_sorted_by_less(v, is_less) {
        for i in 0..v.len() {
            let mut min_idx = i;
            for j in (i + 1)..v.len() {
                if is_less(&v[j], &v[min_idx]) {
                    min_idx = j;
                }
            }
            if min_idx != i {
                v.swap(i, min_idx);
            }
        }
    }
}
