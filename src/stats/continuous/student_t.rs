//! Student's t distribution.

use super::{require_positive, require_probability};
use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::StatsResult;
use crate::stats::special;
use std::f64::consts::PI;

/// Student's t distribution with ν degrees of freedom.
///
/// f(t) = Γ((ν+1)/2) / (√(νπ) Γ(ν/2)) · (1 + t²/ν)^(-(ν+1)/2)
///
/// The cdf and quantile go through the regularized incomplete beta function
/// I_{ν/(ν+t²)}(ν/2, 1/2).
#[derive(Debug, Clone, Copy)]
pub struct StudentT {
    nu: f64,
    log_norm: f64,
}

impl StudentT {
    /// Create a t distribution with `nu` degrees of freedom.
    pub fn new(nu: f64) -> StatsResult<Self> {
        let nu = require_positive("df", nu, "degrees of freedom")?;
        let log_norm =
            special::lgamma((nu + 1.0) / 2.0) - 0.5 * (nu * PI).ln() - special::lgamma(nu / 2.0);
        Ok(Self { nu, log_norm })
    }

    /// Degrees of freedom.
    pub fn df(&self) -> f64 {
        self.nu
    }
}

impl Distribution for StudentT {
    /// Zero for ν > 1, undefined otherwise.
    fn mean(&self) -> f64 {
        if self.nu > 1.0 {
            0.0
        } else {
            f64::NAN
        }
    }

    /// ν/(ν-2) for ν > 2, infinite for 1 < ν ≤ 2, undefined otherwise.
    fn var(&self) -> f64 {
        if self.nu > 2.0 {
            self.nu / (self.nu - 2.0)
        } else if self.nu > 1.0 {
            f64::INFINITY
        } else {
            f64::NAN
        }
    }
}

impl ContinuousDistribution for StudentT {
    fn pdf(&self, x: f64) -> f64 {
        self.log_pdf(x).exp()
    }

    fn log_pdf(&self, x: f64) -> f64 {
        self.log_norm - ((self.nu + 1.0) / 2.0) * (x * x / self.nu).ln_1p()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x == 0.0 {
            return 0.5;
        }
        let t = self.nu / (self.nu + x * x);
        let tail = 0.5 * special::betainc(self.nu / 2.0, 0.5, t);
        if x > 0.0 {
            1.0 - tail
        } else {
            tail
        }
    }

    fn sf(&self, x: f64) -> f64 {
        self.cdf(-x)
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        let p = require_probability(p)?;
        if p == 0.0 {
            return Ok(f64::NEG_INFINITY);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        if p == 0.5 {
            return Ok(0.0);
        }

        let (q, sign) = if p > 0.5 {
            (2.0 * (1.0 - p), 1.0)
        } else {
            (2.0 * p, -1.0)
        };
        let t = special::betaincinv(self.nu / 2.0, 0.5, q);
        Ok(sign * (self.nu * (1.0 / t - 1.0)).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_t_creation() {
        let t = StudentT::new(10.0).unwrap();
        assert_eq!(t.df(), 10.0);
        assert!(StudentT::new(0.0).is_err());
        assert!(StudentT::new(-1.0).is_err());
    }

    #[test]
    fn test_student_t_cauchy_case() {
        // ν = 1 is the standard Cauchy distribution
        let t = StudentT::new(1.0).unwrap();
        assert!((t.cdf(1.0) - 0.75).abs() < 1e-10);
        assert!((t.pdf(0.0) - 1.0 / PI).abs() < 1e-10);
        assert!(t.mean().is_nan());
    }

    #[test]
    fn test_student_t_symmetry() {
        let t = StudentT::new(5.0).unwrap();
        for x in [0.3, 1.0, 2.5] {
            assert!((t.pdf(x) - t.pdf(-x)).abs() < 1e-14);
            assert!((t.cdf(x) + t.cdf(-x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_student_t_critical_values() {
        let t = StudentT::new(10.0).unwrap();
        assert!((t.ppf(0.975).unwrap() - 2.2281388519649385).abs() < 1e-8);
        assert!((t.ppf(0.025).unwrap() + 2.2281388519649385).abs() < 1e-8);
        assert_eq!(t.ppf(0.5).unwrap(), 0.0);
        for p in [0.01, 0.2, 0.7, 0.95] {
            assert!((t.cdf(t.ppf(p).unwrap()) - p).abs() < 1e-10);
        }
    }

    #[test]
    fn test_student_t_moments() {
        let t = StudentT::new(10.0).unwrap();
        assert_eq!(t.mean(), 0.0);
        assert!((t.var() - 1.25).abs() < 1e-12);
        assert_eq!(StudentT::new(2.0).unwrap().var(), f64::INFINITY);
    }
}
