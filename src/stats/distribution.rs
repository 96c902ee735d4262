//! Distribution traits defining the common interface.
//!
//! Every distribution and nonparametric test statistic is an immutable value
//! object. Continuous families implement [`ContinuousDistribution`], discrete
//! families and test statistics implement [`DiscreteDistribution`]; both share
//! the moment accessors of [`Distribution`].

use crate::stats::StatsResult;
use serde::Serialize;

/// Mean, variance and standard deviation of a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Moments {
    pub mean: f64,
    pub variance: f64,
    pub sd: f64,
}

/// Common interface for all probability distributions.
pub trait Distribution {
    /// Get the mean of the distribution.
    fn mean(&self) -> f64;

    /// Get the variance of the distribution.
    fn var(&self) -> f64;

    /// Get the standard deviation of the distribution.
    fn std(&self) -> f64 {
        self.var().sqrt()
    }

    /// Closed-form moments record.
    fn moments(&self) -> Moments {
        Moments {
            mean: self.mean(),
            variance: self.var(),
            sd: self.std(),
        }
    }
}

/// Interface for continuous probability distributions.
///
/// # Methods
/// - `pdf(x)` - Probability density at x
/// - `cdf(x)` - Cumulative probability P(X ≤ x)
/// - `ppf(p)` - Quantile function (inverse CDF), failing outside [0, 1]
/// - `percentile(p)` - Quantile function returning `None` outside [0, 1]
///
/// # Example
///
/// ```
/// use probcalc::stats::{ContinuousDistribution, Exponential};
///
/// let e = Exponential::new(2.0).unwrap();
/// assert!((e.cdf(1.0) - (1.0 - (-2.0_f64).exp())).abs() < 1e-12);
/// assert!(e.percentile(1.5).is_none());
/// ```
pub trait ContinuousDistribution: Distribution {
    /// Probability density function.
    ///
    /// Returns the probability density at point `x`.
    fn pdf(&self, x: f64) -> f64;

    /// Log of the probability density function.
    fn log_pdf(&self, x: f64) -> f64 {
        self.pdf(x).ln()
    }

    /// Cumulative distribution function.
    ///
    /// Returns P(X ≤ x).
    fn cdf(&self, x: f64) -> f64;

    /// Survival function.
    ///
    /// Returns P(X > x) = 1 - CDF(x).
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Percent point function (quantile function / inverse CDF).
    ///
    /// Returns the value x such that P(X ≤ x) = p.
    fn ppf(&self, p: f64) -> StatsResult<f64>;

    /// Quantile lookup that yields no result for p outside [0, 1].
    fn percentile(&self, p: f64) -> Option<f64> {
        self.ppf(p).ok()
    }

    /// P(a < X ≤ b).
    fn prob_between(&self, a: f64, b: f64) -> f64 {
        (self.cdf(b) - self.cdf(a)).max(0.0)
    }
}

/// Interface for discrete probability distributions on the non-negative integers.
///
/// `min_val`/`max_val` are the inclusive support bounds; `max_val` is `None`
/// for distributions with unbounded support. Outside the support the pmf is
/// zero and the cdf is zero below the floor and one above the ceiling.
pub trait DiscreteDistribution: Distribution {
    /// Probability mass function P(X = k).
    fn pmf(&self, k: u64) -> f64;

    /// Cumulative distribution function P(X ≤ k).
    fn cdf(&self, k: u64) -> f64;

    /// Smallest value with (possibly) nonzero mass.
    fn min_val(&self) -> u64;

    /// Largest value with (possibly) nonzero mass, if bounded.
    fn max_val(&self) -> Option<u64>;

    /// Survival function P(X > k).
    fn sf(&self, k: u64) -> f64 {
        1.0 - self.cdf(k)
    }

    /// P(X ≥ k).
    fn prob_at_least(&self, k: u64) -> f64 {
        if k <= self.min_val() {
            1.0
        } else {
            (1.0 - self.cdf(k - 1)).clamp(0.0, 1.0)
        }
    }

    /// P(lo ≤ X ≤ hi).
    fn prob_between(&self, lo: u64, hi: u64) -> f64 {
        if lo > hi {
            return 0.0;
        }
        let below = if lo <= self.min_val() {
            0.0
        } else {
            self.cdf(lo - 1)
        };
        (self.cdf(hi) - below).clamp(0.0, 1.0)
    }
}

/// Sum `pmf` from `from` through `to`, clamped to [0, 1] against round-off.
pub(crate) fn summed_cdf<D: DiscreteDistribution + ?Sized>(dist: &D, from: u64, to: u64) -> f64 {
    let mut sum = 0.0;
    for i in from..=to {
        sum += dist.pmf(i);
    }
    sum.clamp(0.0, 1.0)
}
