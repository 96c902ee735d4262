//! Continuous probability distributions.
//!
//! Exponential, Pareto and Weibull are closed-form. The remaining families
//! evaluate through the special-function provider in [`crate::stats::special`].

mod beta;
mod chi_squared;
mod exponential;
mod f_distribution;
mod gamma;
mod lognormal;
mod normal;
mod pareto;
mod student_t;
mod weibull;

pub use beta::Beta;
pub use chi_squared::ChiSquared;
pub use exponential::Exponential;
pub use f_distribution::FDistribution;
pub use gamma::Gamma;
pub use lognormal::LogNormal;
pub use normal::Normal;
pub use pareto::Pareto;
pub use student_t::StudentT;
pub use weibull::Weibull;

use crate::stats::error::{StatsError, StatsResult};

/// Reject non-positive, NaN and infinite parameters.
pub(crate) fn require_positive(name: &str, value: f64, what: &str) -> StatsResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(StatsError::invalid(
            name,
            value,
            &format!("{} must be positive and finite", what),
        ))
    }
}

/// Reject probabilities outside [0, 1].
pub(crate) fn require_probability(p: f64) -> StatsResult<f64> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(StatsError::InvalidProbability { value: p })
    }
}
