//! Discrete probability distributions.
//!
//! Every pmf is built from [`crate::stats::combinatorics`]; cdfs are sums of
//! the pmf over the support except for the geometric closed form.

mod binomial;
mod geometric;
mod hypergeometric;
mod negative_binomial;
mod poisson;

pub use binomial::Binomial;
pub use geometric::Geometric;
pub use hypergeometric::Hypergeometric;
pub use negative_binomial::NegativeBinomial;
pub use poisson::Poisson;

use crate::stats::distribution::DiscreteDistribution;
use crate::stats::error::{StatsError, StatsResult};

/// Reject success probabilities outside (0, 1].
pub(crate) fn require_success_probability(p: f64) -> StatsResult<f64> {
    if p > 0.0 && p <= 1.0 {
        Ok(p)
    } else {
        Err(StatsError::invalid("p", p, "probability must be in (0, 1]"))
    }
}

/// Summed cdf for a unimodal distribution on [0, ∞) centred near `mode`.
///
/// The sum starts at the peak, or at `k` when that lies below it, and walks
/// outward. Each side stops once its terms no longer move the sum, so the
/// cost tracks the spread of the distribution rather than `k`.
pub(crate) fn unimodal_cdf<D: DiscreteDistribution + ?Sized>(dist: &D, k: u64, mode: f64) -> f64 {
    let negligible = |term: f64, sum: f64| term <= sum * f64::EPSILON * 1e-3;
    let start = if mode < k as f64 {
        mode.max(0.0) as u64
    } else {
        k
    };
    let mut sum = dist.pmf(start);
    for i in (0..start).rev() {
        let term = dist.pmf(i);
        sum += term;
        if negligible(term, sum) {
            break;
        }
    }
    if start < k {
        for i in start + 1..=k {
            let term = dist.pmf(i);
            sum += term;
            if i as f64 > mode && negligible(term, sum) {
                break;
            }
        }
    }
    sum.clamp(0.0, 1.0)
}
