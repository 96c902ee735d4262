//! Wilcoxon rank-sum statistic.

use super::{require_sample_size, MannWhitneyU};
use crate::stats::distribution::{summed_cdf, DiscreteDistribution, Distribution};
use crate::stats::error::StatsResult;
use crate::stats::special;

/// Largest sample size for which the rank-sum cdf is summed exactly.
pub const RANK_SUM_EXACT_MAX: u64 = 8;

/// Null distribution of the Wilcoxon rank-sum statistic W, the sum of the
/// ranks of the first sample in the pooled ordering.
///
/// W = U + n1(n1+1)/2, so the pmf is the Mann-Whitney pmf shifted onto
/// [n1(n1+1)/2, n1(n1+2·n2+1)/2].
///
/// The cdf has two modes. While both samples have at most
/// [`RANK_SUM_EXACT_MAX`] observations it sums the exact pmf; beyond that it
/// uses the continuity-corrected normal approximation Φ((w + 0.5 - μ) / σ).
#[derive(Debug, Clone)]
pub struct WilcoxonRankSum {
    n1: u64,
    n2: u64,
    mann_whitney: MannWhitneyU,
}

impl WilcoxonRankSum {
    /// Create the distribution for samples of sizes `n1` and `n2`.
    ///
    /// # Errors
    ///
    /// Returns an error if either size is zero, or if the support bounds
    /// would not fit in `u64`.
    pub fn new(n1: u64, n2: u64) -> StatsResult<Self> {
        let n1 = require_sample_size("n1", n1)?;
        let n2 = require_sample_size("n2", n2)?;
        let mann_whitney = MannWhitneyU::new(n1, n2)?;
        let dist = Self {
            n1,
            n2,
            mann_whitney,
        };
        tracing::debug!(
            n1,
            n2,
            exact = dist.is_exact(),
            "rank-sum cdf mode selected"
        );
        Ok(dist)
    }

    /// First sample size.
    pub fn n1(&self) -> u64 {
        self.n1
    }

    /// Second sample size.
    pub fn n2(&self) -> u64 {
        self.n2
    }

    /// Whether `cdf` sums the exact pmf rather than approximating.
    pub fn is_exact(&self) -> bool {
        self.n1 <= RANK_SUM_EXACT_MAX && self.n2 <= RANK_SUM_EXACT_MAX
    }

    /// Mann-Whitney U corresponding to rank sum `w`.
    pub fn mann_whitney_u(&self, w: u64) -> Option<u64> {
        self.mann_whitney.rank_sum_to_u(w)
    }

    fn floor(&self) -> u64 {
        self.n1 * (self.n1 + 1) / 2
    }

    fn ceiling(&self) -> u64 {
        self.n1 * (self.n1 + 2 * self.n2 + 1) / 2
    }
}

impl Distribution for WilcoxonRankSum {
    fn mean(&self) -> f64 {
        let total = (self.n1 + self.n2) as f64;
        self.n1 as f64 * (total + 1.0) / 2.0
    }

    fn var(&self) -> f64 {
        let total = (self.n1 + self.n2) as f64;
        (self.n1 * self.n2) as f64 * (total + 1.0) / 12.0
    }
}

impl DiscreteDistribution for WilcoxonRankSum {
    fn pmf(&self, w: u64) -> f64 {
        match self.mann_whitney_u(w) {
            Some(u) => self.mann_whitney.pmf(u),
            None => 0.0,
        }
    }

    fn cdf(&self, w: u64) -> f64 {
        if w < self.floor() {
            return 0.0;
        }
        if w >= self.ceiling() {
            return 1.0;
        }
        if self.is_exact() {
            summed_cdf(self, self.floor(), w)
        } else {
            special::norm_cdf((w as f64 + 0.5 - self.mean()) / self.std())
        }
    }

    fn min_val(&self) -> u64 {
        self.floor()
    }

    fn max_val(&self) -> Option<u64> {
        Some(self.ceiling())
    }
}
