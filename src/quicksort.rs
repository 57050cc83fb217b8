use std::cmp::Ordering;

use crate::write_back;

sort_impl!("quick_sort");

/// Quicksort with a first-element pivot and a stable out-of-place partition.
///
/// Elements strictly less than the pivot go left, the rest go right, keeping
/// their relative order within each group. Average O(n log n); first-element
/// pivoting degrades to O(n^2) and recursion depth O(n) on already-sorted or
/// reversed input. O(n) extra space per level for the group buffers, no
/// in-place swap partition.
pub fn sort<T: Ord + Clone>(v: &mut [T]) {
    quick_sort(v, &mut |a, b| a.lt(b));
}

pub fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    quick_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn quick_sort<T: Clone, F: FnMut(&T, &T) -> bool>(v: &mut [T], is_less: &mut F) {
    if v.len() <= 1 {
        return;
    }

    let pivot = v[0].clone();
    let (mut less, mut greater_eq): (Vec<T>, Vec<T>) =
        v[1..].iter().cloned().partition(|x| is_less(x, &pivot));

    quick_sort(&mut less, is_less);
    quick_sort(&mut greater_eq, is_less);

    let mut out = less;
    out.push(pivot);
    out.append(&mut greater_eq);
    write_back(v, out);
}
