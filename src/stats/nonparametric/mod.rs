//! Null distributions of rank-based nonparametric test statistics.
//!
//! Each statistic is a [`DiscreteDistribution`](crate::stats::DiscreteDistribution)
//! with an exact combinatorial pmf. Count tables are built bottom-up on the
//! first exact query and kept inside the value, so repeated queries against
//! one distribution share a single table.

mod mann_whitney;
mod rank_sum;
mod runs;
mod signed_rank;

pub use mann_whitney::MannWhitneyU;
pub use rank_sum::{WilcoxonRankSum, RANK_SUM_EXACT_MAX};
pub use runs::RunsTest;
pub use signed_rank::WilcoxonSignedRank;

use crate::stats::error::{StatsError, StatsResult};

pub(crate) fn require_sample_size(name: &str, n: u64) -> StatsResult<u64> {
    if n == 0 {
        Err(StatsError::invalid(
            name,
            0.0,
            "sample size must be a positive integer",
        ))
    } else {
        Ok(n)
    }
}

/// Reject sample sizes whose largest rank sum n1(n1 + 2·n2 + 1)/2 does not
/// fit in `u64`. Every other support bound of the two-sample statistics is
/// smaller.
pub(crate) fn require_rank_sum_range(n1: u64, n2: u64) -> StatsResult<()> {
    let doubled_ceiling = n2
        .checked_mul(2)
        .and_then(|x| x.checked_add(n1))
        .and_then(|x| x.checked_add(1))
        .and_then(|x| x.checked_mul(n1));
    match doubled_ceiling {
        Some(_) => Ok(()),
        None => Err(StatsError::invalid(
            "n1",
            n1 as f64,
            "sample sizes are too large for 64-bit rank sums",
        )),
    }
}

/// Divide a count by a total, returning 0 when the total has overflowed.
///
/// The calculator's exact-size limits keep totals finite.
pub(crate) fn count_ratio(count: f64, total: f64) -> f64 {
    if total.is_finite() && total > 0.0 {
        count / total
    } else {
        0.0
    }
}
