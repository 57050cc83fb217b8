//! Input pattern generators for tests and benchmarks. Every generator is
//! deterministic for a given process: the seed is picked once, and can be
//! pinned via the `OVERRIDE_SEED` env var to reproduce a failing run.

use std::env;
use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|seed| seed.parse().ok())
        .unwrap_or_else(|| thread_rng().gen())
});

pub fn random_seed() -> u64 {
    *SEED
}

fn rng(len: usize) -> StdRng {
    // Mix in len so different sizes in one run don't see prefixes of the
    // same stream.
    StdRng::seed_from_u64(SEED.wrapping_add(len as u64))
}

/// `len` values from the full i32 range.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = rng(len);
    (0..len).map(|_| rng.gen()).collect()
}

/// `len` values drawn uniformly from `range`. Narrow ranges produce heavy
/// duplication.
pub fn random_uniform(len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
    let mut rng = rng(len);
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// `len` values from a zipfian distribution over `1..=len` with the given
/// exponent. Skewed duplication, a few values dominate.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }
    let mut rng = rng(len);
    let dist = ZipfDistribution::new(len, exponent).unwrap();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mid = len / 2;
    let mut v: Vec<i32> = (0..mid as i32).collect();
    v.extend((mid as i32..len as i32).rev());
    v
}
