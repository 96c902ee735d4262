//! Poisson distribution.

use super::unimodal_cdf;
use crate::stats::combinatorics::{factorial, log_factorial};
use crate::stats::continuous::require_positive;
use crate::stats::distribution::{DiscreteDistribution, Distribution};
use crate::stats::error::StatsResult;

/// Poisson distribution with rate λ.
///
/// P(X = k) = e^(-λ) λ^k / k!  for k = 0, 1, 2, ...
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    /// Create a Poisson distribution with rate `lambda`.
    pub fn new(lambda: f64) -> StatsResult<Self> {
        let lambda = require_positive("lambda", lambda, "rate")?;
        Ok(Self { lambda })
    }

    /// Rate parameter λ.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Distribution for Poisson {
    fn mean(&self) -> f64 {
        self.lambda
    }

    fn var(&self) -> f64 {
        self.lambda
    }
}

impl DiscreteDistribution for Poisson {
    fn pmf(&self, k: u64) -> f64 {
        let direct = (-self.lambda).exp() * self.lambda.powf(k as f64) / factorial(k);
        if direct.is_finite() && direct > 0.0 {
            return direct;
        }
        // e^-λ underflowed or λ^k / k! overflowed
        (-self.lambda + k as f64 * self.lambda.ln() - log_factorial(k)).exp()
    }

    fn cdf(&self, k: u64) -> f64 {
        unimodal_cdf(self, k, self.lambda)
    }

    fn min_val(&self) -> u64 {
        0
    }

    fn max_val(&self) -> Option<u64> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poisson_creation() {
        assert_eq!(Poisson::new(3.0).unwrap().lambda(), 3.0);
        assert!(Poisson::new(0.0).is_err());
        assert!(Poisson::new(-1.0).is_err());
    }

    #[test]
    fn test_poisson_pmf() {
        let p = Poisson::new(3.0).unwrap();
        let e3 = (-3.0_f64).exp();
        assert!((p.pmf(0) - e3).abs() < 1e-15);
        assert!((p.pmf(2) - 4.5 * e3).abs() < 1e-14);
    }

    #[test]
    fn test_poisson_cdf() {
        let p = Poisson::new(3.0).unwrap();
        // e^-3 (1 + 3 + 4.5)
        assert!((p.cdf(2) - 0.42319008112684353).abs() < 1e-12);
        assert!((p.prob_at_least(3) - (1.0 - 0.42319008112684353)).abs() < 1e-12);
        assert_eq!(p.max_val(), None);
    }

    #[test]
    fn test_poisson_large_lambda() {
        // e^-800 underflows; the log path must take over
        let p = Poisson::new(800.0).unwrap();
        assert!(p.pmf(800) > 0.0);
        assert!((p.cdf(2000) - 1.0).abs() < 1e-9);
        assert!((p.cdf(800) - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_poisson_cdf_large_rate() {
        let p = Poisson::new(1e5).unwrap();
        // P(X ≤ λ) ≈ 1/2 + 2 / (3 √(2πλ)) for integer λ
        let expected = 0.5 + 2.0 / (3.0 * (2.0 * std::f64::consts::PI * 1e5).sqrt());
        assert!((p.cdf(100_000) - expected).abs() < 1e-4);
        assert!(p.cdf(100_000) > 0.5);
        assert!(p.cdf(90_000) < 1e-100);
        assert!((p.cdf(u32::MAX as u64) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_poisson_moments() {
        let p = Poisson::new(2.5).unwrap();
        let mean: f64 = (0..100).map(|k| k as f64 * p.pmf(k)).sum();
        assert!((mean - p.mean()).abs() < 1e-10);
        assert!((p.std() - 2.5_f64.sqrt()).abs() < 1e-12);
    }
}
