//! probcalc - probability distributions, exact nonparametric test
//! distributions and critical values.
//!
//! The crate has two layers:
//!
//! - [`stats`] - the numerical core: continuous and discrete distributions,
//!   the null distributions of the Wilcoxon signed-rank, Mann-Whitney U,
//!   Wilcoxon rank-sum and runs statistics, the combinatorics kernel and the
//!   special-function provider.
//! - [`calculator`] - a request-level façade that parses a named operation
//!   plus numeric parameters, validates them and returns a structured result.
//!
//! # Example
//!
//! ```
//! use probcalc::calculator::{CalcRequest, CalcResult, Calculator};
//!
//! let calc = Calculator::default();
//! let request = CalcRequest::new("binomial exact")
//!     .param("n", 10.0)
//!     .param("p", 0.5)
//!     .param("x1", 5.0);
//!
//! match calc.evaluate(&request).unwrap() {
//!     CalcResult::Detailed { value, .. } => assert!((value - 0.24609375).abs() < 1e-12),
//!     other => panic!("unexpected result {:?}", other),
//! }
//! ```

pub mod calculator;
pub mod stats;
