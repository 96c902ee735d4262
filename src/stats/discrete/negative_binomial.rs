//! Negative binomial distribution.

use super::{require_success_probability, unimodal_cdf};
use crate::stats::combinatorics::{combination, ln_combination, MAX_FINITE_FACTORIAL};
use crate::stats::distribution::{DiscreteDistribution, Distribution};
use crate::stats::error::{StatsError, StatsResult};

/// Negative binomial distribution counting failures before the r-th success.
///
/// P(X = k) = C(k+r-1, k) p^r (1-p)^k  for k = 0, 1, 2, ...
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegativeBinomial {
    r: u64,
    p: f64,
}

impl NegativeBinomial {
    /// Create a negative binomial distribution.
    ///
    /// # Errors
    ///
    /// Returns an error if `r` is zero or `p` is outside (0, 1].
    pub fn new(r: u64, p: f64) -> StatsResult<Self> {
        if r == 0 {
            return Err(StatsError::invalid(
                "r",
                0.0,
                "number of successes must be positive",
            ));
        }
        let p = require_success_probability(p)?;
        Ok(Self { r, p })
    }

    /// Required number of successes.
    pub fn r(&self) -> u64 {
        self.r
    }

    /// Success probability.
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Distribution for NegativeBinomial {
    fn mean(&self) -> f64 {
        self.r as f64 * (1.0 - self.p) / self.p
    }

    fn var(&self) -> f64 {
        self.r as f64 * (1.0 - self.p) / (self.p * self.p)
    }
}

impl DiscreteDistribution for NegativeBinomial {
    fn pmf(&self, k: u64) -> f64 {
        let q = 1.0 - self.p;
        if q == 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        let n = k.saturating_add(self.r - 1);
        if n <= MAX_FINITE_FACTORIAL {
            let direct = combination(n, k) * self.p.powf(self.r as f64) * q.powf(k as f64);
            if direct > 0.0 {
                return direct;
            }
        }
        (ln_combination(n, k) + self.r as f64 * self.p.ln() + k as f64 * q.ln()).exp()
    }

    fn cdf(&self, k: u64) -> f64 {
        unimodal_cdf(self, k, self.mean())
    }

    fn min_val(&self) -> u64 {
        0
    }

    fn max_val(&self) -> Option<u64> {
        None
    }
}
