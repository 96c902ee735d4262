//! Wilcoxon signed-rank statistic.

use super::{count_ratio, require_sample_size};
use crate::stats::distribution::{summed_cdf, DiscreteDistribution, Distribution};
use crate::stats::error::StatsResult;
use crate::stats::special;
use once_cell::sync::OnceCell;

/// Null distribution of the Wilcoxon signed-rank statistic W for n pairs.
///
/// W is the sum of the ranks carrying a positive sign. Under the null
/// hypothesis every sign pattern is equally likely, so
///
/// P(W = x) = c(x, n) / 2^n
///
/// where c(x, n) counts the subsets of {1, ..., n} that sum to x.
///
/// # Example
///
/// ```
/// use probcalc::stats::{DiscreteDistribution, WilcoxonSignedRank};
///
/// let w = WilcoxonSignedRank::new(5).unwrap();
/// assert_eq!(w.max_val(), Some(15));
/// assert!((w.pmf(0) - 1.0 / 32.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub struct WilcoxonSignedRank {
    n: u64,
    /// c(x, n) for x in [0, n(n+1)/2]
    counts: OnceCell<Vec<f64>>,
}

impl WilcoxonSignedRank {
    /// Create the distribution for `n` matched pairs.
    pub fn new(n: u64) -> StatsResult<Self> {
        let n = require_sample_size("n", n)?;
        Ok(Self {
            n,
            counts: OnceCell::new(),
        })
    }

    /// Number of pairs.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Continuity-corrected normal approximation Φ((x + 0.5 - μ) / σ).
    pub fn normal_approx_cdf(&self, x: f64) -> f64 {
        special::norm_cdf((x + 0.5 - self.mean()) / self.std())
    }

    fn counts(&self) -> &[f64] {
        self.counts.get_or_init(|| {
            tracing::debug!(n = self.n, "building signed-rank count table");
            subset_sum_counts(self.n)
        })
    }
}

/// Number of subsets of {1, ..., n} with each possible sum.
///
/// 0/1 knapsack over the ranks: adding rank i either leaves a subset sum
/// unchanged or raises it by i, which is c(x, i) = c(x, i-1) + c(x-i, i-1).
fn subset_sum_counts(n: u64) -> Vec<f64> {
    let n = n as usize;
    let top = n * (n + 1) / 2;
    let mut counts = vec![0.0; top + 1];
    counts[0] = 1.0;
    for i in 1..=n {
        let reach = i * (i + 1) / 2;
        for x in (i..=reach).rev() {
            counts[x] += counts[x - i];
        }
    }
    counts
}

impl Distribution for WilcoxonSignedRank {
    fn mean(&self) -> f64 {
        let n = self.n as f64;
        n * (n + 1.0) / 4.0
    }

    fn var(&self) -> f64 {
        let n = self.n as f64;
        n * (n + 1.0) * (2.0 * n + 1.0) / 24.0
    }
}

impl DiscreteDistribution for WilcoxonSignedRank {
    fn pmf(&self, x: u64) -> f64 {
        match self.counts().get(x as usize) {
            Some(&c) => count_ratio(c, 2.0_f64.powf(self.n as f64)),
            None => 0.0,
        }
    }

    fn cdf(&self, x: u64) -> f64 {
        if x >= self.n * (self.n + 1) / 2 {
            return 1.0;
        }
        summed_cdf(self, 0, x)
    }

    fn min_val(&self) -> u64 {
        0
    }

    fn max_val(&self) -> Option<u64> {
        Some(self.n * (self.n + 1) / 2)
    }
}
