// src/mc/estimator.rs
//! π from the coprime fraction
//!
//! # Math Framework
//!
//! The probability that two random positive integers are coprime is
//! ```text
//! P = 1 / ζ(2) = 6 / π²
//! ```
//! so with `C` coprime pairs out of `N` trials
//! ```text
//! π ≈ sqrt(6 / (C / N))
//! ```
//! `C = 0` leaves the estimate undefined and is reported as
//! [`PiError::DegenerateResult`] rather than an infinite value.

use crate::error::{validation::validate_trials, PiError, PiResult};
use std::f64::consts::PI;

/// Outcome of one estimation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub pairs: u64,
    pub max_number: u64,
    pub coprime_count: u64,
    pub coprime_fraction: f64,
    pub pi_estimate: f64,
    pub pi_reference: f64,
    pub percentage_difference: f64,
}

impl Estimate {
    /// Derive every reported value from the raw counts
    pub fn from_counts(pairs: u64, max_number: u64, coprime_count: u64) -> PiResult<Self> {
        let pi_estimate = estimate_pi(coprime_count, pairs)?;

        Ok(Self {
            pairs,
            max_number,
            coprime_count,
            coprime_fraction: coprime_count as f64 / pairs as f64,
            pi_estimate,
            pi_reference: PI,
            percentage_difference: percentage_difference(pi_estimate, PI),
        })
    }
}

/// `sqrt(6 / (coprime / trials))`
pub fn estimate_pi(coprime: u64, trials: u64) -> PiResult<f64> {
    validate_trials(trials)?;
    if coprime == 0 {
        return Err(PiError::DegenerateResult { trials });
    }

    let fraction = coprime as f64 / trials as f64;
    Ok((6.0 / fraction).sqrt())
}

/// `|m - n| / ((m + n) / 2) * 100`
pub fn percentage_difference(m: f64, n: f64) -> f64 {
    let avg = (m + n) / 2.0;
    (m - n).abs() / avg * 100.0
}
