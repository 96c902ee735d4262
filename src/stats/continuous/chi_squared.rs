//! Chi-squared distribution.

use super::{require_positive, require_probability, Gamma};
use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::StatsResult;

/// Chi-squared distribution with k degrees of freedom.
///
/// A special case of the gamma distribution: χ²(k) = Gamma(k/2, rate 1/2).
#[derive(Debug, Clone, Copy)]
pub struct ChiSquared {
    k: f64,
    gamma: Gamma,
}

impl ChiSquared {
    /// Create a chi-squared distribution with `k` degrees of freedom.
    pub fn new(k: f64) -> StatsResult<Self> {
        let k = require_positive("df", k, "degrees of freedom")?;
        let gamma = Gamma::new(k / 2.0, 0.5)?;
        Ok(Self { k, gamma })
    }

    /// Degrees of freedom.
    pub fn df(&self) -> f64 {
        self.k
    }
}

impl Distribution for ChiSquared {
    fn mean(&self) -> f64 {
        self.k
    }

    fn var(&self) -> f64 {
        2.0 * self.k
    }
}

impl ContinuousDistribution for ChiSquared {
    fn pdf(&self, x: f64) -> f64 {
        self.gamma.pdf(x)
    }

    fn log_pdf(&self, x: f64) -> f64 {
        self.gamma.log_pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.gamma.cdf(x)
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        require_probability(p)?;
        self.gamma.ppf(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chi_squared_creation() {
        let c = ChiSquared::new(4.0).unwrap();
        assert_eq!(c.df(), 4.0);
        assert!(ChiSquared::new(0.0).is_err());
        assert!(ChiSquared::new(-3.0).is_err());
    }

    #[test]
    fn test_chi_squared_cdf() {
        // df = 2 is Exponential(1/2)
        let c = ChiSquared::new(2.0).unwrap();
        for x in [0.5, 1.0, 4.0] {
            assert!((c.cdf(x) - (1.0 - (-x / 2.0_f64).exp())).abs() < 1e-10);
        }
        assert_eq!(c.cdf(-1.0), 0.0);
    }

    #[test]
    fn test_chi_squared_critical_values() {
        let c = ChiSquared::new(1.0).unwrap();
        assert!((c.ppf(0.95).unwrap() - 3.841458820694124).abs() < 1e-8);

        let c = ChiSquared::new(10.0).unwrap();
        assert!((c.ppf(0.95).unwrap() - 18.307038053275146).abs() < 1e-8);
    }

    #[test]
    fn test_chi_squared_moments() {
        let c = ChiSquared::new(7.0).unwrap();
        assert_eq!(c.mean(), 7.0);
        assert_eq!(c.var(), 14.0);
    }
}
