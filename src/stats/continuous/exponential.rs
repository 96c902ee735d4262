//! Exponential distribution.

use super::{require_positive, require_probability};
use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::StatsResult;

/// Waiting time of a Poisson process with rate λ.
///
/// f(x) = λ e^(-λx), F(x) = 1 - e^(-λx) and F⁻¹(p) = -ln(1-p)/λ on x ≥ 0.
/// Nothing here needs the special-function provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    /// Rate parameter (λ)
    lambda: f64,
}

impl Exponential {
    /// Exponential distribution with rate `lambda` (> 0).
    pub fn new(lambda: f64) -> StatsResult<Self> {
        let lambda = require_positive("lambda", lambda, "rate")?;
        Ok(Self { lambda })
    }

    /// Exponential distribution with mean `scale`.
    pub fn from_scale(scale: f64) -> StatsResult<Self> {
        let scale = require_positive("scale", scale, "scale")?;
        Self::new(1.0 / scale)
    }

    /// Get the rate parameter λ.
    pub fn rate(&self) -> f64 {
        self.lambda
    }

    /// Mean waiting time 1/λ.
    pub fn scale(&self) -> f64 {
        1.0 / self.lambda
    }
}

impl Distribution for Exponential {
    fn mean(&self) -> f64 {
        1.0 / self.lambda
    }

    fn var(&self) -> f64 {
        1.0 / (self.lambda * self.lambda)
    }
}

impl ContinuousDistribution for Exponential {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            self.lambda * (-self.lambda * x).exp()
        }
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            f64::NEG_INFINITY
        } else {
            self.lambda.ln() - self.lambda * x
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            // -expm1(-λx) keeps precision for small x
            -(-self.lambda * x).exp_m1()
        }
    }

    fn sf(&self, x: f64) -> f64 {
        if x < 0.0 {
            1.0
        } else {
            (-self.lambda * x).exp()
        }
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        let p = require_probability(p)?;
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        Ok(-(-p).ln_1p() / self.lambda)
    }
}
