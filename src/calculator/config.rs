//! Per-calculator limits.

use crate::stats::{StatsError, StatsResult};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};

/// Largest accepted `exact_sample_max`. C(n1 + n2, n1) is finite in `f64`
/// for samples of up to 514 each.
pub const EXACT_SAMPLE_LIMIT: u64 = 514;

/// Largest accepted `signed_rank_max_n`. 2^n is finite in `f64` through 1023.
pub const SIGNED_RANK_LIMIT: u64 = 1023;

/// Limits applied while validating requests.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// signed_rank_max_n = 30
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Largest number of pairs accepted by the signed-rank operations.
    pub signed_rank_max_n: u64,
    /// Largest sample size accepted by the Mann-Whitney operations and by
    /// exact rank-sum pmf queries.
    pub exact_sample_max: u64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            signed_rank_max_n: 25,
            exact_sample_max: 100,
        }
    }
}

impl CalculatorConfig {
    /// Parse a TOML document, filling missing keys with defaults.
    ///
    /// Limits past [`EXACT_SAMPLE_LIMIT`] or [`SIGNED_RANK_LIMIT`] are
    /// rejected.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(source)?;
        config.validate().map_err(toml::de::Error::custom)?;
        Ok(config)
    }

    /// Check that exact pmfs stay representable under these limits.
    pub fn validate(&self) -> StatsResult<()> {
        let limits = [
            ("signed_rank_max_n", self.signed_rank_max_n, SIGNED_RANK_LIMIT),
            ("exact_sample_max", self.exact_sample_max, EXACT_SAMPLE_LIMIT),
        ];
        for (name, value, limit) in limits {
            if value > limit {
                return Err(StatsError::invalid(
                    name,
                    value as f64,
                    &format!("must not exceed {}", limit),
                ));
            }
        }
        Ok(())
    }

    /// The same limits, lowered to the largest accepted values.
    pub(super) fn clamped(self) -> Self {
        Self {
            signed_rank_max_n: self.signed_rank_max_n.min(SIGNED_RANK_LIMIT),
            exact_sample_max: self.exact_sample_max.min(EXACT_SAMPLE_LIMIT),
        }
    }
}
