//! Integration tests: one module per registered sort instantiating the
//! shared suite, plus direct suites for the merge routine, the order check,
//! the tree collaborator and the CLI dispatch registry.

mod bubble {
    type TestSort = sort_basics_rs::quadratic::bubble::SortImpl;
    sort_basics_rs::instantiate_sort_tests!(TestSort);
    sort_basics_rs::instantiate_stable_sort_tests!(TestSort);
}

mod selection {
    // Canonical selection sort swaps over long ranges and is not stable, so
    // only the base suite applies.
    type TestSort = sort_basics_rs::quadratic::selection::SortImpl;
    sort_basics_rs::instantiate_sort_tests!(TestSort);
}

mod insertion {
    type TestSort = sort_basics_rs::quadratic::insertion::SortImpl;
    sort_basics_rs::instantiate_sort_tests!(TestSort);
    sort_basics_rs::instantiate_stable_sort_tests!(TestSort);
}

mod split_sort_merge {
    type TestSort = sort_basics_rs::merging::split_sort_merge::SortImpl;
    sort_basics_rs::instantiate_sort_tests!(TestSort);
    sort_basics_rs::instantiate_stable_sort_tests!(TestSort);
}

mod merge_sort {
    type TestSort = sort_basics_rs::merging::merge_sort::SortImpl;
    sort_basics_rs::instantiate_sort_tests!(TestSort);
    sort_basics_rs::instantiate_stable_sort_tests!(TestSort);
}

mod quick_sort {
    type TestSort = sort_basics_rs::quicksort::SortImpl;
    sort_basics_rs::instantiate_sort_tests!(TestSort);
    sort_basics_rs::instantiate_stable_sort_tests!(TestSort);
}

mod tree_sort {
    type TestSort = sort_basics_rs::treesort::SortImpl;
    sort_basics_rs::instantiate_sort_tests!(TestSort);
    sort_basics_rs::instantiate_stable_sort_tests!(TestSort);
}

mod merge_routine {
    use sort_basics_rs::merging::merge::{merge, merge_by};
    use sort_basics_rs::order::is_sorted;
    use sort_basics_rs::patterns;

    #[test]
    fn interleaves_two_sorted_inputs() {
        assert_eq!(merge(vec![1, 3, 5], vec![2, 4, 6]), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn exhausted_side_appends_remainder() {
        assert_eq!(merge(vec![1, 2], vec![10, 11, 12]), [1, 2, 10, 11, 12]);
        assert_eq!(merge(vec![10, 11, 12], vec![1, 2]), [1, 2, 10, 11, 12]);
        assert_eq!(merge(vec![], vec![1, 2]), [1, 2]);
        assert_eq!(merge::<i32>(vec![], vec![]), []);
    }

    #[test]
    fn output_is_sorted_with_full_length() {
        for (len_a, len_b) in [(0, 10), (7, 7), (25, 3), (100, 100)] {
            let mut a = patterns::random_uniform(len_a, 0..=20);
            let mut b = patterns::random_uniform(len_b, 0..=20);
            a.sort();
            b.sort();

            let out = merge(a, b);
            assert_eq!(out.len(), len_a + len_b);
            assert!(is_sorted(&out), "seed: {}", patterns::random_seed());
        }
    }

    #[test]
    fn ties_favor_the_left_input() {
        // Equal keys: everything tagged 'a' must come out before the equal
        // keys tagged 'b'.
        let a = vec![(1, 'a'), (2, 'a'), (2, 'a')];
        let b = vec![(1, 'b'), (2, 'b'), (3, 'b')];
        let out = merge_by(a, b, |x, y| x.0.cmp(&y.0));
        assert_eq!(
            out,
            [(1, 'a'), (1, 'b'), (2, 'a'), (2, 'a'), (2, 'b'), (3, 'b')]
        );
    }
}

mod order_check {
    use sort_basics_rs::order::{is_sorted, is_sorted_by};

    #[test]
    fn empty_and_single_are_trivially_sorted() {
        assert!(is_sorted::<i32>(&[]));
        assert!(is_sorted(&[42]));
    }

    #[test]
    fn adjacent_pairs_decide() {
        assert!(is_sorted(&[1, 2, 2, 3]));
        assert!(!is_sorted(&[2, 1]));
        assert!(!is_sorted(&[1, 3, 2, 4]));
    }

    #[test]
    fn respects_custom_comparator() {
        assert!(is_sorted_by(&[3, 2, 1], |a, b| b.cmp(a)));
        assert!(!is_sorted_by(&[1, 2, 3], |a, b| b.cmp(a)));
    }
}

mod tree_collaborator {
    use sort_basics_rs::bst::BinarySearchTree;

    #[test]
    fn keeps_duplicates() {
        let tree: BinarySearchTree<i32> = [4, 4, 2, 2, 1].into_iter().collect();
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.into_sorted_vec(), [1, 2, 2, 4, 4]);
    }

    #[test]
    fn empty_tree_drains_empty() {
        let tree: BinarySearchTree<i32> = BinarySearchTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.into_sorted_vec(), []);
    }

    #[test]
    fn in_order_traversal_is_sorted() {
        let tree: BinarySearchTree<i32> = [5, 3, 8, 1, 9, 2].into_iter().collect();
        assert_eq!(tree.into_sorted_vec(), [1, 2, 3, 5, 8, 9]);
    }
}

mod registry {
    use sort_basics_rs::order::is_sorted;
    use sort_basics_rs::registry;

    #[test]
    fn known_names_resolve_and_sort() {
        for name in registry::names() {
            let sort_fn = registry::lookup(name).unwrap();
            let mut v = vec![9, 1, 8, 2, 7];
            sort_fn(&mut v);
            assert!(is_sorted(&v), "{name} left items unsorted");
        }
    }

    #[test]
    fn unknown_name_is_a_listed_error() {
        let err = registry::lookup("bogo_sort").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("`bogo_sort` does not exist"));
        for name in registry::names() {
            assert!(msg.contains(name), "error message should list {name}");
        }
    }
}
