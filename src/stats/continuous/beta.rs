//! Beta distribution.

use super::{require_positive, require_probability};
use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::StatsResult;
use crate::stats::special;

/// Beta distribution on [0, 1].
///
/// f(x) = x^(α-1) (1-x)^(β-1) / B(α, β)
///
/// The density is zero outside [0, 1]; the cdf is 0 below the interval and 1
/// above it.
#[derive(Debug, Clone, Copy)]
pub struct Beta {
    alpha: f64,
    beta: f64,
    /// ln B(α, β)
    log_beta: f64,
}

impl Beta {
    /// Create a new beta distribution with shape parameters α and β.
    pub fn new(alpha: f64, beta: f64) -> StatsResult<Self> {
        let alpha = require_positive("alpha", alpha, "shape")?;
        let beta = require_positive("beta", beta, "shape")?;
        Ok(Self {
            alpha,
            beta,
            log_beta: special::lbeta(alpha, beta),
        })
    }

    /// Get the first shape parameter α.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the second shape parameter β.
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl Distribution for Beta {
    fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    fn var(&self) -> f64 {
        let s = self.alpha + self.beta;
        self.alpha * self.beta / (s * s * (s + 1.0))
    }
}

impl ContinuousDistribution for Beta {
    fn pdf(&self, x: f64) -> f64 {
        if !(0.0..=1.0).contains(&x) {
            return 0.0;
        }
        if x == 0.0 {
            return if self.alpha < 1.0 {
                f64::INFINITY
            } else if self.alpha == 1.0 {
                self.beta
            } else {
                0.0
            };
        }
        if x == 1.0 {
            return if self.beta < 1.0 {
                f64::INFINITY
            } else if self.beta == 1.0 {
                self.alpha
            } else {
                0.0
            };
        }
        self.log_pdf(x).exp()
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x <= 0.0 || x >= 1.0 {
            return self.pdf(x).ln();
        }
        (self.alpha - 1.0) * x.ln() + (self.beta - 1.0) * (-x).ln_1p() - self.log_beta
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            1.0
        } else {
            special::betainc(self.alpha, self.beta, x)
        }
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        let p = require_probability(p)?;
        if p == 0.0 {
            return Ok(0.0);
        }
        if p == 1.0 {
            return Ok(1.0);
        }
        Ok(special::betaincinv(self.alpha, self.beta, p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beta_creation() {
        let b = Beta::new(2.0, 5.0).unwrap();
        assert_eq!(b.alpha(), 2.0);
        assert_eq!(b.beta(), 5.0);
        assert!(Beta::new(0.0, 1.0).is_err());
        assert!(Beta::new(1.0, -2.0).is_err());
    }

    #[test]
    fn test_beta_uniform_case() {
        // Beta(1, 1) is Uniform(0, 1)
        let b = Beta::new(1.0, 1.0).unwrap();
        for x in [0.1, 0.35, 0.8] {
            assert!((b.pdf(x) - 1.0).abs() < 1e-10);
            assert!((b.cdf(x) - x).abs() < 1e-10);
        }
    }

    #[test]
    fn test_beta_pdf_cdf() {
        // Beta(2, 3): pdf = 12 x (1-x)^2
        let b = Beta::new(2.0, 3.0).unwrap();
        let x: f64 = 0.4;
        assert!((b.pdf(x) - 12.0 * x * (1.0 - x).powi(2)).abs() < 1e-10);
        // cdf = 6x^2 - 8x^3 + 3x^4
        let expected = 6.0 * x.powi(2) - 8.0 * x.powi(3) + 3.0 * x.powi(4);
        assert!((b.cdf(x) - expected).abs() < 1e-10);
    }

    #[test]
    fn test_beta_outside_support() {
        let b = Beta::new(2.0, 3.0).unwrap();
        assert_eq!(b.pdf(-0.1), 0.0);
        assert_eq!(b.pdf(1.1), 0.0);
        assert_eq!(b.cdf(-0.1), 0.0);
        assert_eq!(b.cdf(1.5), 1.0);
    }

    #[test]
    fn test_beta_ppf() {
        let b = Beta::new(2.5, 1.5).unwrap();
        for p in [0.05, 0.3, 0.5, 0.9] {
            let x = b.ppf(p).unwrap();
            assert!((b.cdf(x) - p).abs() < 1e-9);
        }
        assert_eq!(b.ppf(1.0).unwrap(), 1.0);
        assert!(b.percentile(2.0).is_none());
    }

    #[test]
    fn test_beta_moments() {
        let b = Beta::new(2.0, 3.0).unwrap();
        assert!((b.mean() - 0.4).abs() < 1e-12);
        assert!((b.var() - 0.04).abs() < 1e-12);
    }
}
