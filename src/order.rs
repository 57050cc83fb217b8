use std::cmp::Ordering;

/// Returns true if every adjacent pair of `v` is in non-decreasing order.
/// Empty and single-element slices are trivially sorted.
///
/// Scans left to right and stops at the first inversion. Also serves as the
/// termination guard of the quadratic sorters.
pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    is_sorted_by_less(v, &mut |a, b| a.lt(b))
}

/// `is_sorted` with a caller-supplied comparator.
pub fn is_sorted_by<T, F: FnMut(&T, &T) -> Ordering>(v: &[T], mut compare: F) -> bool {
    is_sorted_by_less(v, &mut |a, b| compare(a, b) == Ordering::Less)
}

pub(crate) fn is_sorted_by_less<T, F: FnMut(&T, &T) -> bool>(v: &[T], is_less: &mut F) -> bool {
    // No inversion means v[i] <= v[i + 1] for every adjacent pair.
    v.windows(2).all(|w| !is_less(&w[1], &w[0]))
}
