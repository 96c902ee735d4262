//! Hypergeometric distribution.

use super::unimodal_cdf;
use crate::stats::combinatorics::{combination, ln_combination};
use crate::stats::distribution::{DiscreteDistribution, Distribution};
use crate::stats::error::{StatsError, StatsResult};

/// Hypergeometric distribution: successes in `n` draws without replacement
/// from a population of `N` items containing `M` successes.
///
/// P(X = k) = C(M, k) C(N-M, n-k) / C(N, n)
///
/// Support is [max(0, n+M-N), min(n, M)].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hypergeometric {
    /// Population size (N)
    population: u64,
    /// Success states in the population (M)
    successes: u64,
    /// Number of draws (n)
    draws: u64,
}

impl Hypergeometric {
    /// Create a hypergeometric distribution.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty, or if `successes` or
    /// `draws` exceed the population.
    pub fn new(population: u64, successes: u64, draws: u64) -> StatsResult<Self> {
        if population == 0 {
            return Err(StatsError::invalid(
                "N",
                0.0,
                "population size must be positive",
            ));
        }
        if successes > population {
            return Err(StatsError::invalid(
                "M",
                successes as f64,
                "success states must not exceed the population size",
            ));
        }
        if draws > population {
            return Err(StatsError::invalid(
                "n",
                draws as f64,
                "number of draws must not exceed the population size",
            ));
        }
        Ok(Self {
            population,
            successes,
            draws,
        })
    }

    /// Population size N.
    pub fn population(&self) -> u64 {
        self.population
    }

    /// Success states M.
    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// Number of draws n.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl Distribution for Hypergeometric {
    fn mean(&self) -> f64 {
        self.draws as f64 * self.successes as f64 / self.population as f64
    }

    fn var(&self) -> f64 {
        if self.population == 1 {
            return 0.0;
        }
        let n = self.draws as f64;
        let big_n = self.population as f64;
        let frac = self.successes as f64 / big_n;
        n * frac * (1.0 - frac) * (big_n - n) / (big_n - 1.0)
    }
}

impl DiscreteDistribution for Hypergeometric {
    fn pmf(&self, k: u64) -> f64 {
        if k < self.min_val() || k > self.draws.min(self.successes) {
            return 0.0;
        }
        let failures = self.population - self.successes;
        let rest = self.draws - k;
        let total = combination(self.population, self.draws);
        if total.is_finite() {
            return combination(self.successes, k) * combination(failures, rest) / total;
        }
        (ln_combination(self.successes, k) + ln_combination(failures, rest)
            - ln_combination(self.population, self.draws))
        .exp()
    }

    fn cdf(&self, k: u64) -> f64 {
        let lo = self.min_val();
        let hi = self.draws.min(self.successes);
        if k < lo {
            return 0.0;
        }
        if k >= hi {
            return 1.0;
        }
        unimodal_cdf(self, k, self.mean())
    }

    fn min_val(&self) -> u64 {
        (self.draws + self.successes).saturating_sub(self.population)
    }

    fn max_val(&self) -> Option<u64> {
        Some(self.draws.min(self.successes))
    }
}
