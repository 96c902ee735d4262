//! Mann-Whitney U statistic.

use super::{count_ratio, require_rank_sum_range, require_sample_size};
use crate::stats::combinatorics::combination;
use crate::stats::distribution::{summed_cdf, DiscreteDistribution, Distribution};
use crate::stats::error::StatsResult;
use once_cell::sync::OnceCell;

/// Null distribution of the Mann-Whitney U statistic for samples of size
/// n1 and n2.
///
/// P(U = u) = f(u, n1, n2) / C(n1 + n2, n1), where f counts the arrangements
/// of the two samples with exactly u (x, y) pairs in which y precedes x:
///
/// f(u, n1, n2) = f(u, n1, n2-1) + f(u-n2, n1-1, n2),  f(0, ·, ·) = 1
#[derive(Debug, Clone)]
pub struct MannWhitneyU {
    n1: u64,
    n2: u64,
    /// f(u, n1, n2) for u in [0, n1·n2]
    counts: OnceCell<Vec<f64>>,
}

impl MannWhitneyU {
    /// Create the distribution for two samples of sizes `n1` and `n2`.
    ///
    /// # Errors
    ///
    /// Returns an error if either size is zero, or if the matching rank sums
    /// would not fit in `u64`.
    pub fn new(n1: u64, n2: u64) -> StatsResult<Self> {
        let n1 = require_sample_size("n1", n1)?;
        let n2 = require_sample_size("n2", n2)?;
        require_rank_sum_range(n1, n2)?;
        Ok(Self {
            n1,
            n2,
            counts: OnceCell::new(),
        })
    }

    /// First sample size.
    pub fn n1(&self) -> u64 {
        self.n1
    }

    /// Second sample size.
    pub fn n2(&self) -> u64 {
        self.n2
    }

    /// Rank sum of the first sample corresponding to `u`.
    pub fn u_to_rank_sum(&self, u: u64) -> u64 {
        u.saturating_add(self.n1 * (self.n1 + 1) / 2)
    }

    /// U statistic for a first-sample rank sum; `None` below the smallest
    /// attainable rank sum n1(n1+1)/2.
    pub fn rank_sum_to_u(&self, rank_sum: u64) -> Option<u64> {
        rank_sum.checked_sub(self.n1 * (self.n1 + 1) / 2)
    }

    fn counts(&self) -> &[f64] {
        self.counts.get_or_init(|| {
            tracing::debug!(n1 = self.n1, n2 = self.n2, "building Mann-Whitney count table");
            arrangement_counts(self.n1, self.n2)
        })
    }
}

/// f(u, n1, n2) for every u, built row by row over the first sample size.
///
/// `prev[j]` holds f(·, i-1, j) and `cur[j]` holds f(·, i, j); each has
/// i·j + 1 entries since u never exceeds i·j.
fn arrangement_counts(n1: u64, n2: u64) -> Vec<f64> {
    let (n1, n2) = (n1 as usize, n2 as usize);
    let mut prev: Vec<Vec<f64>> = vec![vec![1.0]; n2 + 1];
    for i in 1..=n1 {
        let mut cur: Vec<Vec<f64>> = Vec::with_capacity(n2 + 1);
        cur.push(vec![1.0]);
        for j in 1..=n2 {
            let row: Vec<f64> = (0..=i * j)
                .map(|u| {
                    let shorter = cur[j - 1].get(u).copied().unwrap_or(0.0);
                    let fewer = if u >= j {
                        prev[j].get(u - j).copied().unwrap_or(0.0)
                    } else {
                        0.0
                    };
                    shorter + fewer
                })
                .collect();
            cur.push(row);
        }
        prev = cur;
    }
    prev.swap_remove(n2)
}

impl Distribution for MannWhitneyU {
    fn mean(&self) -> f64 {
        (self.n1 * self.n2) as f64 / 2.0
    }

    fn var(&self) -> f64 {
        let (n1, n2) = (self.n1 as f64, self.n2 as f64);
        n1 * n2 * (n1 + n2 + 1.0) / 12.0
    }
}

impl DiscreteDistribution for MannWhitneyU {
    fn pmf(&self, u: u64) -> f64 {
        if u > self.n1 * self.n2 {
            return 0.0;
        }
        let total = combination(self.n1 + self.n2, self.n1);
        match self.counts().get(u as usize) {
            Some(&c) => count_ratio(c, total),
            None => 0.0,
        }
    }

    fn cdf(&self, u: u64) -> f64 {
        if u >= self.n1 * self.n2 {
            return 1.0;
        }
        summed_cdf(self, 0, u)
    }

    fn min_val(&self) -> u64 {
        0
    }

    fn max_val(&self) -> Option<u64> {
        Some(self.n1 * self.n2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Direct transcription of the recursive count, for cross-checking.
    fn fnum(u: i64, n1: i64, n2: i64) -> u64 {
        if u < 0 || n1 < 0 || n2 < 0 || n1 * n2 < u {
            0
        } else if u == 0 {
            1
        } else {
            fnum(u, n1, n2 - 1) + fnum(u - n2, n1 - 1, n2)
        }
    }

    #[test]
    fn test_mann_whitney_creation() {
        let mw = MannWhitneyU::new(4, 6).unwrap();
        assert_eq!(mw.n1(), 4);
        assert_eq!(mw.n2(), 6);
        assert_eq!(mw.max_val(), Some(24));
        assert!(MannWhitneyU::new(0, 3).is_err());
        assert!(MannWhitneyU::new(3, 0).is_err());
    }

    #[test]
    fn test_mann_whitney_rejects_overflowing_sizes() {
        assert!(matches!(
            MannWhitneyU::new(3_000_000_000, 3_000_000_000),
            Err(crate::stats::StatsError::InvalidParameter { ref name, .. }) if name == "n1"
        ));
        // Large but representable sizes keep exact support bounds
        let mw = MannWhitneyU::new(1_000_000_000, 1_000_000_000).unwrap();
        assert_eq!(mw.max_val(), Some(1_000_000_000_000_000_000));
        assert_eq!(mw.u_to_rank_sum(0), 500_000_000_500_000_000);
    }

    #[test]
    fn test_counts_match_recursion() {
        for n1 in 1..=6u64 {
            for n2 in 1..=6u64 {
                let mw = MannWhitneyU::new(n1, n2).unwrap();
                for u in 0..=n1 * n2 {
                    assert_eq!(
                        mw.counts()[u as usize],
                        fnum(u as i64, n1 as i64, n2 as i64) as f64,
                        "f({}, {}, {})",
                        u,
                        n1,
                        n2
                    );
                }
            }
        }
    }

    #[test]
    fn test_mann_whitney_three_by_three() {
        let mw = MannWhitneyU::new(3, 3).unwrap();
        assert_eq!(mw.min_val(), 0);
        assert_eq!(mw.max_val(), Some(9));
        assert!((mw.pmf(0) - 0.05).abs() < 1e-15);
        let total: f64 = (0..=9).map(|u| mw.pmf(u)).sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert_eq!(mw.cdf(9), 1.0);
        assert_eq!(mw.pmf(10), 0.0);
    }

    #[test]
    fn test_mann_whitney_symmetry() {
        let mw = MannWhitneyU::new(5, 7).unwrap();
        for u in 0..=35 {
            assert!((mw.pmf(u) - mw.pmf(35 - u)).abs() < 1e-15);
        }
        // Swapping the samples leaves the distribution unchanged
        let swapped = MannWhitneyU::new(7, 5).unwrap();
        for u in 0..=35 {
            assert!((mw.pmf(u) - swapped.pmf(u)).abs() < 1e-15);
        }
    }

    #[test]
    fn test_mann_whitney_moments() {
        let mw = MannWhitneyU::new(4, 5).unwrap();
        let mean: f64 = (0..=20).map(|u| u as f64 * mw.pmf(u)).sum();
        let var: f64 = (0..=20).map(|u| (u as f64 - mean).powi(2) * mw.pmf(u)).sum();
        assert!((mw.mean() - 10.0).abs() < 1e-12);
        assert!((mean - mw.mean()).abs() < 1e-10);
        assert!((var - mw.var()).abs() < 1e-10);
    }

    #[test]
    fn test_rank_sum_bijection() {
        let mw = MannWhitneyU::new(4, 3).unwrap();
        assert_eq!(mw.u_to_rank_sum(0), 10);
        assert_eq!(mw.rank_sum_to_u(10), Some(0));
        assert_eq!(mw.rank_sum_to_u(9), None);
        for u in 0..=12 {
            assert_eq!(mw.rank_sum_to_u(mw.u_to_rank_sum(u)), Some(u));
        }
    }
}
