//! Fisher-Snedecor F distribution.

use super::{require_positive, require_probability};
use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::StatsResult;
use crate::stats::special;

/// F distribution with d1 (numerator) and d2 (denominator) degrees of freedom.
///
/// F(x) = I_{d1·x/(d1·x + d2)}(d1/2, d2/2)
#[derive(Debug, Clone, Copy)]
pub struct FDistribution {
    d1: f64,
    d2: f64,
    log_norm: f64,
}

impl FDistribution {
    /// Create an F distribution.
    pub fn new(d1: f64, d2: f64) -> StatsResult<Self> {
        let d1 = require_positive("df1", d1, "numerator degrees of freedom")?;
        let d2 = require_positive("df2", d2, "denominator degrees of freedom")?;
        let log_norm =
            (d1 / 2.0) * d1.ln() + (d2 / 2.0) * d2.ln() - special::lbeta(d1 / 2.0, d2 / 2.0);
        Ok(Self { d1, d2, log_norm })
    }

    /// Numerator degrees of freedom.
    pub fn dfn(&self) -> f64 {
        self.d1
    }

    /// Denominator degrees of freedom.
    pub fn dfd(&self) -> f64 {
        self.d2
    }
}

impl Distribution for FDistribution {
    fn mean(&self) -> f64 {
        if self.d2 > 2.0 {
            self.d2 / (self.d2 - 2.0)
        } else {
            f64::NAN
        }
    }

    fn var(&self) -> f64 {
        if self.d2 > 4.0 {
            let num = 2.0 * self.d2 * self.d2 * (self.d1 + self.d2 - 2.0);
            let denom = self.d1 * (self.d2 - 2.0).powi(2) * (self.d2 - 4.0);
            num / denom
        } else {
            f64::NAN
        }
    }
}

impl ContinuousDistribution for FDistribution {
    fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        self.log_pdf(x).exp()
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return f64::NEG_INFINITY;
        }
        let half_d1 = self.d1 / 2.0;
        let half_d2 = self.d2 / 2.0;
        self.log_norm + (half_d1 - 1.0) * x.ln()
            - (half_d1 + half_d2) * (self.d1 * x + self.d2).ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let y = self.d1 * x / (self.d1 * x + self.d2);
        special::betainc(self.d1 / 2.0, self.d2 / 2.0, y)
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        let p = require_probability(p)?;
        if p == 0.0 {
            return Ok(0.0);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        let y = special::betaincinv(self.d1 / 2.0, self.d2 / 2.0, p);
        Ok(self.d2 * y / (self.d1 * (1.0 - y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f_creation() {
        let f = FDistribution::new(5.0, 10.0).unwrap();
        assert_eq!(f.dfn(), 5.0);
        assert_eq!(f.dfd(), 10.0);
        assert!(FDistribution::new(0.0, 10.0).is_err());
        assert!(FDistribution::new(5.0, -1.0).is_err());
    }

    #[test]
    fn test_f_cdf() {
        // F(2, 2): cdf = x / (1 + x)
        let f = FDistribution::new(2.0, 2.0).unwrap();
        for x in [0.25, 1.0, 3.0] {
            assert!((f.cdf(x) - x / (1.0 + x)).abs() < 1e-10);
            assert!((f.pdf(x) - 1.0 / (1.0 + x).powi(2)).abs() < 1e-10);
        }
        assert_eq!(f.cdf(0.0), 0.0);
    }

    #[test]
    fn test_f_critical_value() {
        let f = FDistribution::new(5.0, 10.0).unwrap();
        assert!((f.ppf(0.95).unwrap() - 3.325834530413011).abs() < 1e-7);
        for p in [0.1, 0.5, 0.9] {
            assert!((f.cdf(f.ppf(p).unwrap()) - p).abs() < 1e-10);
        }
    }

    #[test]
    fn test_f_moments() {
        let f = FDistribution::new(5.0, 10.0).unwrap();
        assert!((f.mean() - 1.25).abs() < 1e-12);
        // 2·100·13 / (5·64·6)
        assert!((f.var() - 2600.0 / 1920.0).abs() < 1e-12);
        assert!(FDistribution::new(5.0, 2.0).unwrap().mean().is_nan());
    }
}
