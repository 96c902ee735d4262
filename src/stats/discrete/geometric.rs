//! Geometric distribution.

use super::require_success_probability;
use crate::stats::distribution::{DiscreteDistribution, Distribution};
use crate::stats::error::StatsResult;

/// Geometric distribution counting failures before the first success.
///
/// P(X = k) = (1-p)^k p  for k = 0, 1, 2, ...
///
/// The cdf is the closed form 1 - (1-p)^(k+1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometric {
    p: f64,
}

impl Geometric {
    /// Create a geometric distribution with success probability `p` in (0, 1].
    pub fn new(p: f64) -> StatsResult<Self> {
        let p = require_success_probability(p)?;
        Ok(Self { p })
    }

    /// Success probability.
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Distribution for Geometric {
    fn mean(&self) -> f64 {
        (1.0 - self.p) / self.p
    }

    fn var(&self) -> f64 {
        (1.0 - self.p) / (self.p * self.p)
    }
}

impl DiscreteDistribution for Geometric {
    fn pmf(&self, k: u64) -> f64 {
        (1.0 - self.p).powf(k as f64) * self.p
    }

    fn cdf(&self, k: u64) -> f64 {
        (1.0 - (1.0 - self.p).powf(k as f64 + 1.0)).clamp(0.0, 1.0)
    }

    fn min_val(&self) -> u64 {
        0
    }

    fn max_val(&self) -> Option<u64> {
        None
    }
}
