use std::cmp::Ordering;

use crate::bst::BinarySearchTree;
use crate::write_back;

sort_impl!("tree_sort");

/// Sorts `v` by loading it into a binary search tree and overwriting it with
/// the tree's in-order traversal. All the ordering work happens in the
/// collaborator; this is just the two calls. Stable (equal keys descend right
/// in insertion order). Unbalanced tree, so O(n^2) on sorted input,
/// O(n log n) on average, O(n) extra space for the tree.
pub fn sort<T: Ord + Clone>(v: &mut [T]) {
    tree_sort(v, &mut |a, b| a.lt(b));
}

pub fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    tree_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn tree_sort<T: Clone, F: FnMut(&T, &T) -> bool>(v: &mut [T], is_less: &mut F) {
    let mut tree = BinarySearchTree::new();
    for value in v.iter() {
        tree.insert_by_less(value.clone(), is_less);
    }
    write_back(v, tree.into_sorted_vec());
}
