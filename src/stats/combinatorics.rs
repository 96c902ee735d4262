//! Factorials and binomial coefficients.
//!
//! Every discrete pmf and every exact nonparametric pmf is built from these
//! primitives. All results are `f64`: `factorial` is exact through 22! and
//! finite through 170!, beyond which it returns `f64::INFINITY`. Callers that
//! may exceed that range should work in log space with [`log_factorial`] or
//! [`ln_combination`], which take constant time for any argument.

use statrs::function::factorial::{ln_binomial, ln_factorial};

/// Largest `n` for which `n!` is finite in `f64`.
pub const MAX_FINITE_FACTORIAL: u64 = 170;

/// C(n, k) with k ≤ n/2 is at least 2^k, so it overflows `f64` from here on.
const MIN_OVERFLOWING_K: u64 = 1024;

/// n! as a floating-point product.
pub fn factorial(n: u64) -> f64 {
    if n > MAX_FINITE_FACTORIAL {
        return f64::INFINITY;
    }
    (2..=n).fold(1.0, |acc, i| acc * i as f64)
}

/// ln(n!), from the factorial table through 170 and ln Γ(n + 1) beyond.
pub fn log_factorial(n: u64) -> f64 {
    ln_factorial(n)
}

/// Binomial coefficient C(n, k).
///
/// Returns 1 for `k == 0` or `k == n` and 0 for `k > n`. The multiplicative
/// form keeps every partial product an integer, so the result is exact while
/// it stays below 2^53. Coefficients past the `f64` range are
/// `f64::INFINITY`.
pub fn combination(n: u64, k: u64) -> f64 {
    if k == 0 || k == n {
        return 1.0;
    }
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    if k >= MIN_OVERFLOWING_K {
        return f64::INFINITY;
    }
    let mut c = 1.0;
    for i in 1..=k {
        c = c * (n - k + i) as f64 / i as f64;
    }
    c
}

/// ln C(n, k); `f64::NEG_INFINITY` for `k > n`.
///
/// Small k sums the multiplicative form term by term, which keeps full
/// precision for large n; otherwise three log-factorials are combined.
pub fn ln_combination(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    if k == 0 || k == n {
        return 0.0;
    }
    let k = k.min(n - k);
    if k > MAX_FINITE_FACTORIAL {
        return ln_binomial(n, k);
    }
    (1..=k)
        .map(|i| ((n - k + i) as f64).ln() - (i as f64).ln())
        .sum()
}
