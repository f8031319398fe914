// src/mc/mc_engine.rs
use crate::error::{validation::*, PiError, PiResult};
use crate::mc::estimator::Estimate;
use crate::mc::sampler::{count_coprime_pairs, count_coprime_pairs_parallel};
use crate::rng::{entropy_seed, PairSource, RngFactory, UniformPairGenerator};
use tracing::{debug, info};

/// Upper bound used when none is given: the largest signed 64-bit integer
pub const DEFAULT_MAX_NUMBER: u64 = i64::MAX as u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    pub pairs: u64,
    pub max_number: u64,
    /// Fixed seed for reproducible runs; drawn from OS entropy when `None`
    pub seed: Option<u64>,
    pub parallel: bool,
    /// Size of a dedicated rayon pool; the global pool when `None`
    pub threads: Option<usize>,
}

impl EstimatorConfig {
    /// Validate the estimation configuration
    pub fn validate(&self) -> PiResult<()> {
        validate_greater_than("pairs", saturating_i64(self.pairs), MIN_EXCLUSIVE)?;
        validate_greater_than("max_number", saturating_i64(self.max_number), MIN_EXCLUSIVE)?;

        if self.threads == Some(0) {
            return Err(PiError::InvalidConfiguration {
                field: "threads".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        EstimatorConfig {
            pairs: 1_000_000,
            max_number: DEFAULT_MAX_NUMBER,
            seed: None,
            parallel: false,
            threads: None,
        }
    }
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Estimate π from `cfg.pairs` random pairs
///
/// # Errors
///
/// Returns `PiError` for:
/// - configuration outside the accepted bounds
/// - a run that observed no coprime pair
/// - a thread pool that could not be built
pub fn estimate_pi_by_coprimes(cfg: &EstimatorConfig) -> PiResult<Estimate> {
    cfg.validate()?;
    info!(
        pairs = cfg.pairs,
        max_number = cfg.max_number,
        parallel = cfg.parallel,
        "starting estimation"
    );

    let coprime_count = if cfg.parallel {
        let factory = RngFactory::new(cfg.seed.unwrap_or_else(entropy_seed));
        debug!(base_seed = factory.base_seed(), "parallel sampling");

        match cfg.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| PiError::ThreadPool {
                        reason: e.to_string(),
                    })?;
                pool.install(|| count_coprime_pairs_parallel(&factory, cfg.pairs, cfg.max_number))?
            }
            None => count_coprime_pairs_parallel(&factory, cfg.pairs, cfg.max_number)?,
        }
    } else {
        let mut generator = match cfg.seed {
            Some(seed) => UniformPairGenerator::seeded(seed, cfg.max_number)?,
            None => UniformPairGenerator::from_entropy(cfg.max_number)?,
        };
        count_coprime_pairs(&mut generator, cfg.pairs)
    };

    let estimate = Estimate::from_counts(cfg.pairs, cfg.max_number, coprime_count)?;
    info!(
        coprime = coprime_count,
        pi = estimate.pi_estimate,
        "estimation complete"
    );
    Ok(estimate)
}

/// Estimate π from an injected pair source
///
/// `max_number` is only carried into the report; the source owns its range.
pub fn estimate_pi_with_source<S: PairSource + ?Sized>(
    source: &mut S,
    pairs: u64,
    max_number: u64,
) -> PiResult<Estimate> {
    validate_trials(pairs)?;
    let coprime_count = count_coprime_pairs(source, pairs);
    Estimate::from_counts(pairs, max_number, coprime_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = EstimatorConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.max_number, i64::MAX as u64);
    }

    #[test]
    fn test_pairs_boundary() {
        let eleven = EstimatorConfig {
            pairs: 11,
            ..Default::default()
        };
        assert!(eleven.validate().is_ok());

        let ten = EstimatorConfig {
            pairs: 10,
            ..Default::default()
        };
        let err = ten.validate().unwrap_err();
        assert_eq!(err.to_string(), "10 must be greater than 10.");
    }

    #[test]
    fn test_max_number_boundary() {
        let cfg = EstimatorConfig {
            max_number: 10,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(PiError::TooSmall { .. })));

        let cfg = EstimatorConfig {
            max_number: 11,
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_zero_threads_rejected() {
        let cfg = EstimatorConfig {
            threads: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(PiError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_seeded_run_is_reproducible() {
        let cfg = EstimatorConfig {
            pairs: 20_000,
            max_number: 1_000_000,
            seed: Some(42),
            ..Default::default()
        };

        let first = estimate_pi_by_coprimes(&cfg).unwrap();
        let second = estimate_pi_by_coprimes(&cfg).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_config_fails_before_sampling() {
        let cfg = EstimatorConfig {
            pairs: 5,
            ..Default::default()
        };
        assert!(estimate_pi_by_coprimes(&cfg).is_err());
    }
}
