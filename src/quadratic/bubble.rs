use std::cmp::Ordering;

use crate::order::is_sorted_by_less;

sort_impl!("bubble_sort");

/// Sorts `v` by repeatedly swapping out-of-order adjacent pairs.
///
/// O(n^2) worst case, O(1) extra space. Stable, only strictly out-of-order
/// neighbors are ever swapped.
pub fn sort<T: Ord>(v: &mut [T]) {
    bubble_sort(v, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

pub(crate) fn bubble_sort<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], is_less: &mut F) {
    while !is_sorted_by_less(v, is_less) {
        for i in 1..v.len() {
            if is_less(&v[i], &v[i - 1]) {
                v.swap(i - 1, i);
            }
        }
    }
}
