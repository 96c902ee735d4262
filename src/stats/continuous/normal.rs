//! Normal (Gaussian) distribution.

use super::{require_positive, require_probability};
use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{StatsError, StatsResult};
use crate::stats::special::{self, INV_SQRT_2PI, LN_SQRT_2PI};

/// Normal (Gaussian) distribution.
///
/// The normal distribution with mean μ and standard deviation σ has PDF:
///
/// f(x) = (1 / (σ√(2π))) exp(-(x-μ)² / (2σ²))
///
/// # Examples
///
/// ```
/// use probcalc::stats::{ContinuousDistribution, Distribution, Normal};
///
/// let n = Normal::new(100.0, 15.0).unwrap();
/// assert!((n.cdf(100.0) - 0.5).abs() < 1e-12);
/// assert!((n.std() - 15.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    /// Mean (μ)
    mu: f64,
    /// Standard deviation (σ)
    sigma: f64,
}

impl Normal {
    /// Create a new normal distribution with given mean and standard deviation.
    ///
    /// # Errors
    ///
    /// Returns an error if `mu` is not finite or `sigma` is not positive.
    pub fn new(mu: f64, sigma: f64) -> StatsResult<Self> {
        if !mu.is_finite() {
            return Err(StatsError::invalid("mu", mu, "must be finite"));
        }
        let sigma = require_positive("sigma", sigma, "standard deviation")?;
        Ok(Self { mu, sigma })
    }

    /// Standard normal N(0, 1).
    pub fn standard() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
        }
    }

    /// Get the mean parameter.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Get the standard deviation parameter.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    fn standardize(&self, x: f64) -> f64 {
        (x - self.mu) / self.sigma
    }
}

impl Distribution for Normal {
    fn mean(&self) -> f64 {
        self.mu
    }

    fn var(&self) -> f64 {
        self.sigma * self.sigma
    }

    fn std(&self) -> f64 {
        self.sigma
    }
}

impl ContinuousDistribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        INV_SQRT_2PI * (-0.5 * z * z).exp() / self.sigma
    }

    fn log_pdf(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        -LN_SQRT_2PI - self.sigma.ln() - 0.5 * z * z
    }

    fn cdf(&self, x: f64) -> f64 {
        special::norm_cdf(self.standardize(x))
    }

    fn sf(&self, x: f64) -> f64 {
        special::norm_cdf(-self.standardize(x))
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        let p = require_probability(p)?;
        if p == 0.0 {
            return Ok(f64::NEG_INFINITY);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        Ok(self.mu + self.sigma * special::norm_ppf(p))
    }
}
