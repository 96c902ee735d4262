//! Binomial distribution.

use crate::stats::combinatorics::{combination, ln_combination, MAX_FINITE_FACTORIAL};
use super::unimodal_cdf;
use crate::stats::distribution::{DiscreteDistribution, Distribution};
use crate::stats::error::{StatsError, StatsResult};

/// Binomial distribution: number of successes in n independent trials.
///
/// P(X = k) = C(n, k) p^k (1-p)^(n-k)  for k = 0, 1, ..., n
///
/// # Example
///
/// ```
/// use probcalc::stats::{Binomial, DiscreteDistribution};
///
/// let b = Binomial::new(10, 0.5).unwrap();
/// assert!((b.pmf(5) - 0.24609375).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial {
    /// Number of trials
    n: u64,
    /// Success probability
    p: f64,
}

impl Binomial {
    /// Create a binomial distribution with `n` trials and success probability `p`.
    ///
    /// # Errors
    ///
    /// Returns an error if `p` is outside [0, 1].
    pub fn new(n: u64, p: f64) -> StatsResult<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(StatsError::invalid(
                "p",
                p,
                "probability must be in [0, 1]",
            ));
        }
        Ok(Self { n, p })
    }

    /// Number of trials.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Success probability.
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Distribution for Binomial {
    fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    fn var(&self) -> f64 {
        self.n as f64 * self.p * (1.0 - self.p)
    }
}

impl DiscreteDistribution for Binomial {
    fn pmf(&self, k: u64) -> f64 {
        if k > self.n {
            return 0.0;
        }
        let q = 1.0 - self.p;
        let failures = self.n - k;
        if self.n <= MAX_FINITE_FACTORIAL {
            return combination(self.n, k) * self.p.powf(k as f64) * q.powf(failures as f64);
        }
        if self.p == 0.0 || q == 0.0 {
            let certain = if self.p == 0.0 { 0 } else { self.n };
            return if k == certain { 1.0 } else { 0.0 };
        }
        (ln_combination(self.n, k) + k as f64 * self.p.ln() + failures as f64 * q.ln()).exp()
    }

    fn cdf(&self, k: u64) -> f64 {
        if k >= self.n {
            return 1.0;
        }
        unimodal_cdf(self, k, self.mean())
    }

    fn min_val(&self) -> u64 {
        0
    }

    fn max_val(&self) -> Option<u64> {
        Some(self.n)
    }
}
