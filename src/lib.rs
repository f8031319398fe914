//! # pi-coprime: Monte Carlo π from Co-prime Pairs
//!
//! Two integers drawn uniformly at random are co-prime with probability
//! `6 / π²`. Sampling pairs, counting the co-prime ones and inverting that
//! relation gives an estimate of π.
//!
//! ## Pipeline
//!
//! ```text
//! PairSource -> gcd -> sampler (count) -> estimator (π) -> report
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use pi_coprime::mc::mc_engine::{estimate_pi_by_coprimes, EstimatorConfig};
//!
//! let config = EstimatorConfig {
//!     pairs: 100_000,
//!     max_number: 1_000_000,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let estimate = estimate_pi_by_coprimes(&config).expect("Valid configuration");
//! println!("{}", estimate);
//! assert!((estimate.pi_estimate - std::f64::consts::PI).abs() < 0.1);
//! ```
//!
//! ## Deterministic runs
//!
//! Anything implementing [`rng::PairSource`] can drive the sampler, which is
//! how the tests replay fixed pair sequences.

// Module declarations
pub mod cli;
pub mod error;
pub mod gcd;
pub mod math_utils;
pub mod mc;
pub mod output;
pub mod report;
pub mod rng;

// Re-export commonly used types for convenience
pub use error::{PiError, PiResult};
pub use mc::estimator::Estimate;
pub use mc::mc_engine::{estimate_pi_by_coprimes, EstimatorConfig};
