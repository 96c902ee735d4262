//! Wald-Wolfowitz runs statistic.

use crate::stats::combinatorics::{combination, ln_combination};
use crate::stats::distribution::{summed_cdf, DiscreteDistribution, Distribution};
use crate::stats::error::{StatsError, StatsResult};

/// Null distribution of the number of runs R in a random arrangement of
/// n1 symbols of one kind and n2 of another.
///
/// With k = r/2 for even r:
///
/// P(R = r) = 2 C(n1-1, k-1) C(n2-1, k-1) / C(n1+n2, n1)
///
/// and with k = (r-1)/2 for odd r:
///
/// P(R = r) = [C(n1-1, k) C(n2-1, k-1) + C(n2-1, k) C(n1-1, k-1)] / C(n1+n2, n1)
///
/// Support bounds follow the classic table: a single run when either count
/// is zero, otherwise [2, 2·min + 2] for unequal counts and [2, 2·min + 1]
/// for equal counts. The upper bound sits one past the largest attainable
/// run count, where the pmf is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunsTest {
    n1: u64,
    n2: u64,
    xmin: u64,
    xmax: u64,
}

impl RunsTest {
    /// Create the distribution for `n1` and `n2` symbols; either may be zero.
    ///
    /// # Errors
    ///
    /// Returns an error if n1 + n2 + 2 does not fit in `u64`.
    pub fn new(n1: u64, n2: u64) -> StatsResult<Self> {
        if n1.checked_add(n2).and_then(|t| t.checked_add(2)).is_none() {
            return Err(StatsError::invalid(
                "n1",
                n1 as f64,
                "symbol counts are too large for 64-bit run counts",
            ));
        }
        let (xmin, xmax) = if n1 == 0 || n2 == 0 {
            (1, 1)
        } else if n1 != n2 {
            (2, 2 * n1.min(n2) + 2)
        } else {
            (2, 2 * n1 + 1)
        };
        Ok(Self { n1, n2, xmin, xmax })
    }

    /// Count of the first symbol.
    pub fn n1(&self) -> u64 {
        self.n1
    }

    /// Count of the second symbol.
    pub fn n2(&self) -> u64 {
        self.n2
    }

    fn is_degenerate(&self) -> bool {
        self.n1 == 0 || self.n2 == 0
    }
}

impl Distribution for RunsTest {
    fn mean(&self) -> f64 {
        if self.is_degenerate() {
            return 1.0;
        }
        let (n1, n2) = (self.n1 as f64, self.n2 as f64);
        2.0 * n1 * n2 / (n1 + n2) + 1.0
    }

    fn var(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let (n1, n2) = (self.n1 as f64, self.n2 as f64);
        let total = n1 + n2;
        2.0 * n1 * n2 * (2.0 * n1 * n2 - total) / (total * total * (total - 1.0))
    }
}

impl DiscreteDistribution for RunsTest {
    fn pmf(&self, r: u64) -> f64 {
        if r < self.xmin || r > self.xmax {
            return 0.0;
        }
        if self.is_degenerate() {
            return 1.0;
        }
        let (a, b) = (self.n1 - 1, self.n2 - 1);
        let arrangements = combination(self.n1 + self.n2, self.n1);
        if arrangements.is_finite() {
            return if r % 2 == 0 {
                let k = r / 2;
                2.0 * combination(a, k - 1) * combination(b, k - 1) / arrangements
            } else {
                let k = (r - 1) / 2;
                (combination(a, k) * combination(b, k - 1)
                    + combination(b, k) * combination(a, k - 1))
                    / arrangements
            };
        }
        // C(n1+n2, n1) overflowed; every term is taken as a log ratio to it
        let ln_arrangements = ln_combination(self.n1 + self.n2, self.n1);
        let ratio = |i: u64, j: u64| {
            (ln_combination(a, i) + ln_combination(b, j) - ln_arrangements).exp()
        };
        if r % 2 == 0 {
            let k = r / 2;
            2.0 * ratio(k - 1, k - 1)
        } else {
            let k = (r - 1) / 2;
            ratio(k, k - 1) + ratio(k - 1, k)
        }
    }

    fn cdf(&self, r: u64) -> f64 {
        if r < self.xmin {
            return 0.0;
        }
        if r >= self.xmax {
            return 1.0;
        }
        summed_cdf(self, self.xmin, r)
    }

    fn min_val(&self) -> u64 {
        self.xmin
    }

    fn max_val(&self) -> Option<u64> {
        Some(self.xmax)
    }
}
