use std::cmp::Ordering;

use crate::order::is_sorted_by_less;

sort_impl!("insertion_sort");

/// Sorts `v` by swapping each element leftward past every strictly greater
/// predecessor, growing a sorted prefix.
///
/// O(n^2) worst case, O(1) extra space, stable. Cheap on nearly-sorted input
/// since the inner walk exits on the first non-greater predecessor.
pub fn sort<T: Ord>(v: &mut [T]) {
    insertion_sort(v, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn insertion_sort<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], is_less: &mut F) {
    while !is_sorted_by_less(v, is_less) {
        for i in 1..v.len() {
            let mut j = i;
            while j > 0 && is_less(&v[j], &v[j - 1]) {
                v.swap(j - 1, j);
                j -= 1;
            }
        }
    }
}
