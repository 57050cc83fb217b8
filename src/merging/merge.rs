use std::cmp::Ordering;

/// Merges two individually sorted sequences into one sorted sequence.
///
/// Repeatedly takes the smaller front element; ties go to `a`, so equal
/// elements keep their relative order between the two inputs and the merge is
/// stable. Once one input is exhausted the other's remainder is appended
/// as-is. O(n + m) time and output space. The inputs are consumed, their
/// sortedness is a precondition and is not re-verified.
pub fn merge<T: Ord>(a: Vec<T>, b: Vec<T>) -> Vec<T> {
    merge_by_less(a, b, &mut |a, b| a.lt(b))
}

/// `merge` with a caller-supplied comparator.
pub fn merge_by<T, F: FnMut(&T, &T) -> Ordering>(a: Vec<T>, b: Vec<T>, mut compare: F) -> Vec<T> {
    merge_by_less(a, b, &mut |a, b| compare(a, b) == Ordering::Less)
}

pub(crate) fn merge_by_less<T, F: FnMut(&T, &T) -> bool>(
    a: Vec<T>,
    b: Vec<T>,
    is_less: &mut F,
) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let mut a = a.into_iter().peekable();
    let mut b = b.into_iter().peekable();

    loop {
        // Take from `b` only when it is strictly smaller.
        let take_b = match (a.peek(), b.peek()) {
            (Some(front_a), Some(front_b)) => is_less(front_b, front_a),
            _ => break,
        };
        if take_b {
            out.extend(b.next());
        } else {
            out.extend(a.next());
        }
    }

    out.extend(a);
    out.extend(b);
    out
}
