// src/mc/sampler.rs
//! Coprimality sampling
//!
//! Each trial draws one pair, evaluates its GCD and bumps the counter when
//! the GCD is 1. Trials are independent, so the count is a plain sum and the
//! parallel variant reduces per-chunk partial sums instead of sharing a
//! counter.

use crate::error::PiResult;
use crate::gcd::gcd;
use crate::rng::{PairSource, RngFactory};
use rayon::prelude::*;
use tracing::trace;

/// Trials per parallel work item. Fixed so a base seed maps to the same
/// chunk streams whatever the pool size.
pub const CHUNK_SIZE: u64 = 1 << 16;

/// Run `pairs` trials against `source` and return the number of coprime pairs
pub fn count_coprime_pairs<S: PairSource + ?Sized>(source: &mut S, pairs: u64) -> u64 {
    count_coprime_pairs_with(source, pairs, |_, _| {})
}

/// Same as [`count_coprime_pairs`], calling `observe(trial, running_count)`
/// after every trial
pub fn count_coprime_pairs_with<S, F>(source: &mut S, pairs: u64, mut observe: F) -> u64
where
    S: PairSource + ?Sized,
    F: FnMut(u64, u64),
{
    let mut sum_coprime = 0u64;

    for i in 0..pairs {
        let (rand1, rand2) = source.next_pair();
        let pair_gcd = gcd(rand1, rand2);

        if pair_gcd == 1 {
            sum_coprime += 1;
        }

        trace!(
            pair = i + 1,
            rand1,
            rand2,
            gcd = pair_gcd,
            coprime = sum_coprime,
            "pair generated"
        );
        observe(i, sum_coprime);
    }

    sum_coprime
}

/// Parallel sampling on the current rayon pool
///
/// Trials are split into [`CHUNK_SIZE`] chunks; chunk `k` draws from
/// `factory.create_std_rng(k)`.
pub fn count_coprime_pairs_parallel(
    factory: &RngFactory,
    pairs: u64,
    max_number: u64,
) -> PiResult<u64> {
    let chunks = pairs.div_ceil(CHUNK_SIZE);

    (0..chunks)
        .into_par_iter()
        .map(|chunk_id| -> PiResult<u64> {
            let start = chunk_id * CHUNK_SIZE;
            let len = CHUNK_SIZE.min(pairs - start);
            let mut generator = factory.create_generator(chunk_id, max_number)?;
            Ok(count_coprime_pairs(&mut generator, len))
        })
        .try_reduce(|| 0, |a, b| Ok(a + b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::UniformPairGenerator;

    struct Cycle {
        pairs: Vec<(u64, u64)>,
        next: usize,
    }

    impl PairSource for Cycle {
        fn next_pair(&mut self) -> (u64, u64) {
            let pair = self.pairs[self.next % self.pairs.len()];
            self.next += 1;
            pair
        }
    }

    #[test]
    fn test_counts_scripted_pairs() {
        let mut source = Cycle {
            pairs: vec![(3, 4), (6, 9), (5, 7), (10, 4)],
            next: 0,
        };
        assert_eq!(count_coprime_pairs(&mut source, 8), 4);
    }

    #[test]
    fn test_zero_trials() {
        let mut source = UniformPairGenerator::seeded(1, 100).unwrap();
        assert_eq!(count_coprime_pairs(&mut source, 0), 0);
    }

    #[test]
    fn test_count_monotone_and_bounded() {
        let mut source = UniformPairGenerator::seeded(5, 1000).unwrap();
        let mut last = 0;
        let pairs = 5_000;

        let total = count_coprime_pairs_with(&mut source, pairs, |trial, count| {
            assert!(count >= last, "count decreased at trial {}", trial);
            assert!(count <= trial + 1);
            last = count;
        });

        assert_eq!(total, last);
        assert!(total <= pairs);
    }

    #[test]
    fn test_parallel_handles_partial_chunk() {
        let factory = RngFactory::new(11);
        let pairs = CHUNK_SIZE + 17;

        let count = count_coprime_pairs_parallel(&factory, pairs, 1).unwrap();
        // max_number = 1 makes every pair (1, 1)
        assert_eq!(count, pairs);
    }

    #[test]
    fn test_parallel_matches_sequential_chunks() {
        let factory = RngFactory::new(123);
        let pairs = 2 * CHUNK_SIZE + 1000;

        let mut expected = 0;
        for chunk_id in 0..3 {
            let len = if chunk_id < 2 { CHUNK_SIZE } else { 1000 };
            let mut generator = factory.create_generator(chunk_id, 10_000).unwrap();
            expected += count_coprime_pairs(&mut generator, len);
        }

        let parallel = count_coprime_pairs_parallel(&factory, pairs, 10_000).unwrap();
        assert_eq!(parallel, expected);
    }

    #[test]
    fn test_parallel_rejects_zero_bound() {
        let factory = RngFactory::new(1);
        assert!(count_coprime_pairs_parallel(&factory, 100, 0).is_err());
    }
}
