//! Unbalanced binary-search-tree collaborator for tree sort. Only the two
//! operations tree sort needs: build from a sequence of values and drain the
//! tree in sorted order. Insert and traversal are iterative, so tree depth
//! never translates into call-stack depth.

use std::cmp::Ordering;

pub struct BinarySearchTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        self.insert_by_less(value, &mut |a, b| a.lt(b));
    }

    pub fn insert_by<F: FnMut(&T, &T) -> Ordering>(&mut self, value: T, mut compare: F) {
        self.insert_by_less(value, &mut |a, b| compare(a, b) == Ordering::Less);
    }

    /// Duplicates descend right, so equal values are all kept and come back
    /// out of `into_sorted_vec` in insertion order.
    pub(crate) fn insert_by_less<F: FnMut(&T, &T) -> bool>(&mut self, value: T, is_less: &mut F) {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            cursor = if is_less(&value, &node.value) {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *cursor = Some(Box::new(Node {
            value,
            left: None,
            right: None,
        }));
        self.len += 1;
    }

    /// Consuming in-order traversal: yields every stored value in
    /// non-decreasing order, using an explicit node stack.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        let mut cursor = self.root.take();

        loop {
            while let Some(mut node) = cursor {
                cursor = node.left.take();
                stack.push(node);
            }
            match stack.pop() {
                Some(mut node) => {
                    cursor = node.right.take();
                    out.push(node.value);
                }
                None => break,
            }
        }

        out
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}
