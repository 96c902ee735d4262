//! Request and result shapes.

use crate::stats::{Moments, StatsError, StatsResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named operation plus its numeric parameters.
///
/// Query values use the same keys across families: `x1` and `x2` for points
/// and interval bounds, `p` for percentile probabilities and `alpha` for
/// significance levels. Distribution parameters keep their usual symbols
/// (`mu`, `sigma`, `lambda`, `n1`, `df`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcRequest {
    pub operation: String,
    #[serde(default)]
    pub params: BTreeMap<String, f64>,
}

impl CalcRequest {
    /// Create a request with no parameters.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            params: BTreeMap::new(),
        }
    }

    /// Add or replace a parameter.
    pub fn param(mut self, name: impl Into<String>, value: f64) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    pub(crate) fn params(&self) -> Params<'_> {
        Params(&self.params)
    }
}

/// Inclusive support bounds reported with a result.
///
/// An unbounded side is infinite, which serializes to JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Support {
    pub min: f64,
    pub max: f64,
}

/// The same statistic expressed on a related scale, e.g. a Mann-Whitney U
/// value together with its rank sum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equivalent {
    pub name: String,
    pub value: f64,
}

/// Outcome of a calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalcResult {
    /// A single number, e.g. a one-sided critical value.
    Value { value: f64 },
    /// Lower and upper values, e.g. two-sided critical values.
    Pair { lower: f64, upper: f64 },
    /// One- and two-sided p-values of a symmetric statistic.
    Tails { one_tail: f64, two_tail: f64 },
    /// A probability or quantile together with the distribution's moments.
    Detailed {
        value: f64,
        moments: Moments,
        #[serde(skip_serializing_if = "Option::is_none")]
        support: Option<Support>,
        #[serde(skip_serializing_if = "Option::is_none")]
        equivalent: Option<Equivalent>,
    },
}

/// Typed lookups over request parameters.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Params<'a>(&'a BTreeMap<String, f64>);

impl<'a> Params<'a> {
    /// A finite real value.
    pub fn real(&self, name: &str) -> StatsResult<f64> {
        let value = *self.0.get(name).ok_or_else(|| StatsError::MissingParameter {
            name: name.to_string(),
        })?;
        if !value.is_finite() {
            return Err(StatsError::invalid(name, value, "must be a finite number"));
        }
        Ok(value)
    }

    /// A non-negative whole number.
    pub fn count(&self, name: &str) -> StatsResult<u64> {
        let value = self.real(name)?;
        if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
            return Err(StatsError::invalid(
                name,
                value,
                "must be a non-negative integer",
            ));
        }
        Ok(value as u64)
    }

    /// A whole number of at least one.
    pub fn positive_count(&self, name: &str) -> StatsResult<u64> {
        let n = self.count(name)?;
        if n == 0 {
            return Err(StatsError::invalid(name, 0.0, "must be a positive integer"));
        }
        Ok(n)
    }

    /// A positive real value.
    pub fn positive(&self, name: &str) -> StatsResult<f64> {
        let value = self.real(name)?;
        if value <= 0.0 {
            return Err(StatsError::invalid(name, value, "must be positive"));
        }
        Ok(value)
    }

    /// A probability strictly between 0 and 1.
    pub fn open_probability(&self, name: &str) -> StatsResult<f64> {
        let value = self.real(name)?;
        if value <= 0.0 || value >= 1.0 {
            return Err(StatsError::invalid(
                name,
                value,
                "must lie strictly between 0 and 1",
            ));
        }
        Ok(value)
    }

    /// A probability in [0, 1].
    pub fn probability(&self, name: &str) -> StatsResult<f64> {
        let value = self.real(name)?;
        if !(0.0..=1.0).contains(&value) {
            return Err(StatsError::invalid(name, value, "must lie in [0, 1]"));
        }
        Ok(value)
    }
}
