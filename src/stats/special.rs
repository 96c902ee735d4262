//! Special functions used by the continuous distributions.
//!
//! Incomplete gamma/beta functions, the complementary error function and
//! their inverses come from a [`SpecialFunctions`] provider. The provider is
//! resolved once per process: the first query (or an explicit
//! [`install_provider`]) fixes it, and concurrent first queries coalesce into
//! a single initialization. The default provider is [`StatrsProvider`].
//!
//! The Lanczos gamma function used by closed-form families lives here as
//! well, but never goes through the provider.

use crate::stats::error::{StatsError, StatsResult};
use once_cell::sync::OnceCell;
use statrs::function::{beta as statrs_beta, erf as statrs_erf, gamma as statrs_gamma};
use std::f64::consts::{PI, SQRT_2};
use std::fmt;

/// Standard normal PDF constant: 1/sqrt(2π)
pub const INV_SQRT_2PI: f64 = 0.3989422804014327;

/// ln(sqrt(2π))
pub const LN_SQRT_2PI: f64 = 0.9189385332046727;

/// Source of the special functions the continuous families delegate to.
///
/// Implementations must be pure: the same inputs always give the same output.
/// `gammainc`/`betainc` are regularized lower incomplete functions and must be
/// non-decreasing in `x`; the inverses must be their left-inverses in `p`.
pub trait SpecialFunctions: Send + Sync + fmt::Debug {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Reports whether the provider can serve queries.
    fn ready(&self) -> Result<(), String> {
        Ok(())
    }

    /// ln Γ(x) for x > 0.
    fn ln_gamma(&self, x: f64) -> f64;

    /// Complementary error function.
    fn erfc(&self, x: f64) -> f64;

    /// Inverse of `erfc` on (0, 2).
    fn erfc_inv(&self, x: f64) -> f64;

    /// Regularized lower incomplete gamma function P(a, x).
    fn gammainc(&self, a: f64, x: f64) -> f64;

    /// x such that P(a, x) = p.
    fn gammaincinv(&self, a: f64, p: f64) -> f64;

    /// Regularized incomplete beta function I_x(a, b).
    fn betainc(&self, a: f64, b: f64, x: f64) -> f64;

    /// x such that I_x(a, b) = p.
    fn betaincinv(&self, a: f64, b: f64, p: f64) -> f64;
}

/// Provider backed by the `statrs` special-function module.
///
/// `statrs` supplies the forward functions; the inverses are solved here with
/// a bracketed Newton iteration on top of them.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatrsProvider;

impl SpecialFunctions for StatrsProvider {
    fn name(&self) -> &'static str {
        "statrs"
    }

    fn ln_gamma(&self, x: f64) -> f64 {
        statrs_gamma::ln_gamma(x)
    }

    fn erfc(&self, x: f64) -> f64 {
        statrs_erf::erfc(x)
    }

    fn erfc_inv(&self, x: f64) -> f64 {
        statrs_erf::erfc_inv(x)
    }

    fn gammainc(&self, a: f64, x: f64) -> f64 {
        if a.is_nan() || x.is_nan() || a <= 0.0 {
            return f64::NAN;
        }
        if x <= 0.0 {
            return 0.0;
        }
        if x.is_infinite() {
            return 1.0;
        }
        statrs_gamma::gamma_lr(a, x)
    }

    fn gammaincinv(&self, a: f64, p: f64) -> f64 {
        if a.is_nan() || p.is_nan() || a <= 0.0 {
            return f64::NAN;
        }
        if p <= 0.0 {
            return 0.0;
        }
        if p >= 1.0 {
            return f64::INFINITY;
        }

        // Grow an upper bracket until it contains the quantile
        let mut lo = 0.0;
        let mut hi = a.max(1.0);
        while self.gammainc(a, hi) < p {
            lo = hi;
            hi *= 2.0;
            if !hi.is_finite() {
                return f64::INFINITY;
            }
        }

        let log_norm = -self.ln_gamma(a);
        let density = |x: f64| (log_norm + (a - 1.0) * x.ln() - x).exp();
        bracketed_newton(|x| self.gammainc(a, x), density, p, lo, hi)
    }

    fn betainc(&self, a: f64, b: f64, x: f64) -> f64 {
        if a.is_nan() || b.is_nan() || x.is_nan() || a <= 0.0 || b <= 0.0 {
            return f64::NAN;
        }
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        statrs_beta::beta_reg(a, b, x)
    }

    fn betaincinv(&self, a: f64, b: f64, p: f64) -> f64 {
        if a.is_nan() || b.is_nan() || p.is_nan() || a <= 0.0 || b <= 0.0 {
            return f64::NAN;
        }
        if p <= 0.0 {
            return 0.0;
        }
        if p >= 1.0 {
            return 1.0;
        }

        let log_norm = self.ln_gamma(a + b) - self.ln_gamma(a) - self.ln_gamma(b);
        let density = |x: f64| (log_norm + (a - 1.0) * x.ln() + (b - 1.0) * (-x).ln_1p()).exp();
        // statrs::function::beta::inv_beta_reg loses relative accuracy near 0 and 1
        bracketed_newton(|x| self.betainc(a, b, x), density, p, 0.0, 1.0)
    }
}

/// Solve `cdf(x) = p` for a non-decreasing `cdf` with `cdf(lo) ≤ p ≤ cdf(hi)`.
///
/// Newton steps that leave the current bracket fall back to bisection, so the
/// iteration always converges.
fn bracketed_newton<F, D>(cdf: F, density: D, p: f64, mut lo: f64, mut hi: f64) -> f64
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    const MAX_ITERS: usize = 200;
    const REL_TOL: f64 = 1e-14;

    let mut x = 0.5 * (lo + hi);
    for _ in 0..MAX_ITERS {
        let f = cdf(x) - p;
        if f == 0.0 {
            return x;
        }
        if f < 0.0 {
            lo = x;
        } else {
            hi = x;
        }

        let d = density(x);
        let mut next = if d.is_finite() && d > 0.0 {
            x - f / d
        } else {
            f64::NAN
        };
        if !(next > lo && next < hi) {
            next = 0.5 * (lo + hi);
        }

        if (next - x).abs() <= REL_TOL * next.abs() || hi - lo <= REL_TOL * hi {
            return next;
        }
        x = next;
    }
    x
}

static PROVIDER: OnceCell<Box<dyn SpecialFunctions>> = OnceCell::new();

/// The process-wide provider, resolving the default on first use.
pub fn provider() -> &'static dyn SpecialFunctions {
    PROVIDER
        .get_or_init(|| {
            tracing::debug!(provider = "statrs", "resolving default special-function provider");
            Box::new(StatrsProvider)
        })
        .as_ref()
}

/// Install a provider before any continuous-distribution query runs.
///
/// Fails once a provider has been resolved, whether installed explicitly or
/// defaulted by an earlier query.
pub fn install_provider(candidate: Box<dyn SpecialFunctions>) -> StatsResult<()> {
    let name = candidate.name();
    PROVIDER
        .set(candidate)
        .map_err(|_| StatsError::ProviderUnavailable {
            reason: format!(
                "cannot install '{}': provider '{}' is already in use",
                name,
                provider().name()
            ),
        })?;
    tracing::debug!(provider = name, "installed special-function provider");
    Ok(())
}

/// Check that the process-wide provider can serve queries.
pub fn ensure_ready() -> StatsResult<()> {
    check_ready(provider())
}

/// Check a specific provider, mapping its failure to `ProviderUnavailable`.
pub fn check_ready(candidate: &dyn SpecialFunctions) -> StatsResult<()> {
    candidate.ready().map_err(|reason| {
        tracing::warn!(provider = candidate.name(), %reason, "special-function provider unavailable");
        StatsError::ProviderUnavailable { reason }
    })
}

/// Standard normal CDF: Φ(x)
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * provider().erfc(-x / SQRT_2)
}

/// Standard normal quantile function: Φ⁻¹(p)
pub fn norm_ppf(p: f64) -> f64 {
    -SQRT_2 * provider().erfc_inv(2.0 * p)
}

/// Log-gamma function.
pub fn lgamma(x: f64) -> f64 {
    provider().ln_gamma(x)
}

/// Log-beta function.
pub fn lbeta(a: f64, b: f64) -> f64 {
    lgamma(a) + lgamma(b) - lgamma(a + b)
}

/// Regularized lower incomplete gamma function: P(a, x) = γ(a,x)/Γ(a)
pub fn gammainc(a: f64, x: f64) -> f64 {
    provider().gammainc(a, x)
}

/// Inverse of the regularized lower incomplete gamma function.
pub fn gammaincinv(a: f64, p: f64) -> f64 {
    provider().gammaincinv(a, p)
}

/// Regularized incomplete beta function: I_x(a, b)
pub fn betainc(a: f64, b: f64, x: f64) -> f64 {
    provider().betainc(a, b, x)
}

/// Inverse regularized incomplete beta function.
pub fn betaincinv(a: f64, b: f64, p: f64) -> f64 {
    provider().betaincinv(a, b, p)
}

const LANCZOS_G: f64 = 7.0;

const LANCZOS_COEF: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Gamma function via the Lanczos approximation (g = 7, n = 9).
///
/// Arguments above 1 are reduced with Γ(z) = (z-1)·Γ(z-1) and arguments below
/// 0.5 use the reflection formula Γ(z)Γ(1-z) = π / sin(πz). Relative error is
/// around 1e-15 for positive arguments; poles return a non-finite value.
pub fn lanczos_gamma(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    if z < 0.5 {
        return PI / ((PI * z).sin() * lanczos_gamma(1.0 - z));
    }

    let mut scale = 1.0;
    let mut z = z;
    while z > 1.0 {
        z -= 1.0;
        scale *= z;
        if !scale.is_finite() {
            return f64::INFINITY;
        }
    }

    if z == 1.0 {
        return scale;
    }
    if z == 0.5 {
        return scale * PI.sqrt();
    }

    let z = z - 1.0;
    let mut sum = LANCZOS_COEF[0];
    for (i, &c) in LANCZOS_COEF.iter().enumerate().skip(1) {
        sum += c / (z + i as f64);
    }
    let t = z + LANCZOS_G + 0.5;
    scale * (2.0 * PI).sqrt() * t.powf(z + 0.5) * (-t).exp() * sum
}
