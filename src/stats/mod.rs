//! Probability distributions and nonparametric test statistics.
//!
//! Every distribution is an immutable value built by a validating `new`
//! constructor and queried through the capability traits:
//!
//! - [`Distribution`] - mean, variance, standard deviation, [`Moments`]
//! - [`ContinuousDistribution`] - pdf, cdf, ppf / percentile
//! - [`DiscreteDistribution`] - pmf, cdf, support bounds, tail queries
//!
//! ```
//! use probcalc::stats::{Binomial, DiscreteDistribution, Distribution, MannWhitneyU};
//!
//! let b = Binomial::new(10, 0.3).unwrap();
//! assert!((b.mean() - 3.0).abs() < 1e-12);
//!
//! let mw = MannWhitneyU::new(3, 3).unwrap();
//! assert!((mw.pmf(0) - 0.05).abs() < 1e-15);
//! ```
//!
//! # Special functions
//!
//! Normal, log-normal, gamma, beta, chi-squared, t and F evaluate through the
//! process-wide provider in [`special`]. Call [`special::ensure_ready`] before
//! the first query if a provider failure must surface as an error rather
//! than as NaN results.

pub mod combinatorics;
pub mod special;

mod continuous;
mod discrete;
mod distribution;
mod error;
mod nonparametric;

// Public API: Distribution traits and types
pub use distribution::{ContinuousDistribution, DiscreteDistribution, Distribution, Moments};
pub use error::{StatsError, StatsResult};

// Public API: Continuous distributions
pub use continuous::{
    Beta, ChiSquared, Exponential, FDistribution, Gamma, LogNormal, Normal, Pareto, StudentT,
    Weibull,
};

// Public API: Discrete distributions
pub use discrete::{Binomial, Geometric, Hypergeometric, NegativeBinomial, Poisson};

// Public API: Nonparametric test statistics
pub use nonparametric::{
    MannWhitneyU, RunsTest, WilcoxonRankSum, WilcoxonSignedRank, RANK_SUM_EXACT_MAX,
};
