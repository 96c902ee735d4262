//! Pareto distribution.

use super::{require_positive, require_probability};
use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::StatsResult;

/// Pareto distribution (Type I).
///
/// f(x) = α x_m^α / x^(α+1)  for x ≥ x_m
///
/// where α > 0 is the shape and x_m > 0 the scale (support floor). The mean is
/// infinite for α ≤ 1 and the variance is infinite for α ≤ 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pareto {
    /// Shape parameter (α)
    shape: f64,
    /// Scale parameter (x_m)
    scale: f64,
}

impl Pareto {
    /// Create a new Pareto distribution.
    ///
    /// # Arguments
    ///
    /// * `shape` - Shape parameter α (must be > 0)
    /// * `scale` - Scale parameter x_m (must be > 0)
    pub fn new(shape: f64, scale: f64) -> StatsResult<Self> {
        let shape = require_positive("alpha", shape, "shape")?;
        let scale = require_positive("xm", scale, "scale")?;
        Ok(Self { shape, scale })
    }

    /// Get the shape parameter α.
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Get the scale parameter x_m.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Distribution for Pareto {
    fn mean(&self) -> f64 {
        if self.shape <= 1.0 {
            f64::INFINITY
        } else {
            self.shape * self.scale / (self.shape - 1.0)
        }
    }

    fn var(&self) -> f64 {
        if self.shape <= 2.0 {
            f64::INFINITY
        } else {
            let a = self.shape;
            self.scale * self.scale * a / ((a - 1.0) * (a - 1.0) * (a - 2.0))
        }
    }
}

impl ContinuousDistribution for Pareto {
    fn pdf(&self, x: f64) -> f64 {
        if x < self.scale {
            0.0
        } else {
            self.shape * self.scale.powf(self.shape) / x.powf(self.shape + 1.0)
        }
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x < self.scale {
            f64::NEG_INFINITY
        } else {
            self.shape.ln() + self.shape * self.scale.ln() - (self.shape + 1.0) * x.ln()
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < self.scale {
            0.0
        } else {
            1.0 - (self.scale / x).powf(self.shape)
        }
    }

    fn sf(&self, x: f64) -> f64 {
        if x < self.scale {
            1.0
        } else {
            (self.scale / x).powf(self.shape)
        }
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        let p = require_probability(p)?;
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        Ok(self.scale * (1.0 - p).powf(-1.0 / self.shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pareto_creation() {
        assert!(Pareto::new(2.0, 1.0).is_ok());
        assert!(Pareto::new(0.0, 1.0).is_err());
        assert!(Pareto::new(2.0, 0.0).is_err());
        assert!(Pareto::new(-1.0, 1.0).is_err());
    }

    #[test]
    fn test_pareto_pdf_cdf() {
        let p = Pareto::new(2.0, 1.0).unwrap();
        assert_eq!(p.pdf(0.5), 0.0);
        assert!((p.pdf(1.0) - 2.0).abs() < 1e-12);
        assert!((p.pdf(2.0) - 0.25).abs() < 1e-12);

        assert_eq!(p.cdf(0.5), 0.0);
        assert_eq!(p.cdf(1.0), 0.0);
        assert!((p.cdf(2.0) - 0.75).abs() < 1e-12);
        assert!((p.sf(2.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_pareto_ppf() {
        let p = Pareto::new(3.0, 2.0).unwrap();
        assert_eq!(p.ppf(0.0).unwrap(), 2.0);
        assert_eq!(p.ppf(1.0).unwrap(), f64::INFINITY);
        for x in [2.0, 2.5, 4.0, 10.0] {
            assert!((p.ppf(p.cdf(x)).unwrap() - x).abs() < 1e-9);
        }
    }

    #[test]
    fn test_pareto_infinite_moments() {
        let p = Pareto::new(1.0, 1.0).unwrap();
        assert_eq!(p.mean(), f64::INFINITY);
        assert_eq!(p.var(), f64::INFINITY);

        let p = Pareto::new(2.0, 1.0).unwrap();
        assert!((p.mean() - 2.0).abs() < 1e-12);
        assert_eq!(p.var(), f64::INFINITY);
        assert_eq!(p.std(), f64::INFINITY);
    }

    #[test]
    fn test_pareto_finite_moments() {
        let p = Pareto::new(3.0, 2.0).unwrap();
        assert!((p.mean() - 3.0).abs() < 1e-12);
        // 4 * 3 / (4 * 1) = 3
        assert!((p.var() - 3.0).abs() < 1e-12);
    }
}
