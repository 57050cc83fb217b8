//! Closed name-to-function dispatch for the CLI harness. The mapping is
//! populated once at startup; unknown selectors come back as a typed error
//! instead of a runtime name lookup.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::{merging, quadratic, quicksort, treesort};

/// Registered sorts are monomorphized over the harness's element type.
pub type SortFn = fn(&mut [i32]);

static REGISTRY: Lazy<BTreeMap<&'static str, SortFn>> = Lazy::new(|| {
    BTreeMap::from([
        ("bubble_sort", quadratic::bubble::sort as SortFn),
        ("selection_sort", quadratic::selection::sort as SortFn),
        ("insertion_sort", quadratic::insertion::sort as SortFn),
        ("split_sort_merge", merging::split_sort_merge::sort as SortFn),
        ("merge_sort", merging::merge_sort::sort as SortFn),
        ("quick_sort", quicksort::sort as SortFn),
        ("tree_sort", treesort::sort as SortFn),
    ])
});

#[derive(Debug, Error, PartialEq, Eq)]
#[error("sorting function `{name}` does not exist, available: {}", names().join(", "))]
pub struct UnknownSort {
    pub name: String,
}

pub fn lookup(name: &str) -> Result<SortFn, UnknownSort> {
    REGISTRY
        .get(name)
        .copied()
        .ok_or_else(|| UnknownSort { name: name.into() })
}

pub fn names() -> Vec<&'static str> {
    REGISTRY.keys().copied().collect()
}
