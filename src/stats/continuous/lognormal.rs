//! Log-normal distribution.

use super::{require_positive, require_probability};
use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{StatsError, StatsResult};
use crate::stats::special::{self, LN_SQRT_2PI};

/// Log-normal distribution: ln(X) ~ N(μ, σ²).
///
/// Density and cdf are zero for x ≤ 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogNormal {
    mu: f64,
    sigma: f64,
}

impl LogNormal {
    /// Create a log-normal distribution from the mean and standard deviation
    /// of the underlying normal.
    pub fn new(mu: f64, sigma: f64) -> StatsResult<Self> {
        if !mu.is_finite() {
            return Err(StatsError::invalid("mu", mu, "must be finite"));
        }
        let sigma = require_positive("sigma", sigma, "standard deviation")?;
        Ok(Self { mu, sigma })
    }

    /// Mean of ln(X).
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Standard deviation of ln(X).
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Distribution for LogNormal {
    fn mean(&self) -> f64 {
        (self.mu + 0.5 * self.sigma * self.sigma).exp()
    }

    fn var(&self) -> f64 {
        let s2 = self.sigma * self.sigma;
        s2.exp_m1() * (2.0 * self.mu + s2).exp()
    }
}

impl ContinuousDistribution for LogNormal {
    fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else {
            self.log_pdf(x).exp()
        }
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return f64::NEG_INFINITY;
        }
        let z = (x.ln() - self.mu) / self.sigma;
        -LN_SQRT_2PI - self.sigma.ln() - x.ln() - 0.5 * z * z
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else {
            special::norm_cdf((x.ln() - self.mu) / self.sigma)
        }
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        let p = require_probability(p)?;
        if p == 0.0 {
            return Ok(0.0);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        Ok((self.mu + self.sigma * special::norm_ppf(p)).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Normal;

    #[test]
    fn test_lognormal_creation() {
        assert!(LogNormal::new(0.0, 1.0).is_ok());
        assert!(LogNormal::new(0.0, 0.0).is_err());
        assert!(LogNormal::new(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_lognormal_nonpositive() {
        let d = LogNormal::new(0.0, 1.0).unwrap();
        assert_eq!(d.pdf(0.0), 0.0);
        assert_eq!(d.pdf(-2.0), 0.0);
        assert_eq!(d.cdf(0.0), 0.0);
        assert_eq!(d.cdf(-2.0), 0.0);
    }

    #[test]
    fn test_lognormal_matches_normal_of_log() {
        let d = LogNormal::new(0.5, 0.8).unwrap();
        let n = Normal::new(0.5, 0.8).unwrap();
        for x in [0.2, 1.0, 2.5, 7.0] {
            assert!((d.cdf(x) - n.cdf(x.ln())).abs() < 1e-12);
            assert!((d.pdf(x) - n.pdf(x.ln()) / x).abs() < 1e-12);
        }
        // Median is e^μ
        assert!((d.ppf(0.5).unwrap() - 0.5_f64.exp()).abs() < 1e-9);
    }

    #[test]
    fn test_lognormal_moments() {
        let d = LogNormal::new(0.0, 1.0).unwrap();
        let e = std::f64::consts::E;
        assert!((d.mean() - e.sqrt()).abs() < 1e-12);
        assert!((d.var() - (e - 1.0) * e).abs() < 1e-10);
    }
}
