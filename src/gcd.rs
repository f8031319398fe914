// src/gcd.rs
//! Greatest common divisor via Euclid's algorithm
//!
//! ```text
//! gcd(a, 0) = a
//! gcd(a, b) = gcd(b, a mod b)
//! ```
//!
//! Each step shrinks the second argument, so the loop runs O(log min(a, b))
//! times.

/// Greatest common divisor of `a` and `b`
///
/// If either argument is 0 the other is returned unchanged; `gcd(0, 0)` is 0.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
