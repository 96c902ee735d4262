//! Operation names understood by the calculator.
//!
//! An operation is written as a family followed by a query, separated by
//! whitespace: `"binomial exact"`, `"normal between"`,
//! `"wilcoxon-signed less-equal"`, `"t critical two-tail"`, `"z p-value"`.
//! Matching is case-insensitive.

use crate::stats::StatsError;
use std::fmt;
use std::str::FromStr;

/// Continuous families with pdf/cdf/percentile queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinuousFamily {
    Normal,
    Exponential,
    Gamma,
    Beta,
    LogNormal,
    Pareto,
    Weibull,
}

/// Queries against a continuous distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinuousQuery {
    /// Density at `x1`.
    Pdf,
    /// P(X < x1).
    LessThan,
    /// P(X > x1).
    GreaterThan,
    /// P(x1 < X < x2).
    Between,
    /// x such that P(X ≤ x) = p.
    Percentile,
}

/// Discrete families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscreteFamily {
    Binomial,
    Poisson,
    Geometric,
    Hypergeometric,
    NegativeBinomial,
}

/// Queries against a discrete distribution or test statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountQuery {
    /// P(X = x1).
    Exact,
    /// P(X ≤ x1).
    LessEqual,
    /// P(X ≥ x1).
    GreaterEqual,
    /// P(x1 ≤ X ≤ x2).
    Between,
}

/// Rank-based test statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankTest {
    SignedRank,
    MannWhitney,
    RankSum,
    Runs,
}

/// Reference distributions for critical values and p-values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatistic {
    Z,
    T,
    ChiSquare,
    F,
}

/// Rejection region of a critical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tail {
    #[default]
    Right,
    Left,
    TwoTail,
}

/// A parsed calculator operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Continuous(ContinuousFamily, ContinuousQuery),
    Discrete(DiscreteFamily, CountQuery),
    Rank(RankTest, CountQuery),
    Critical(TestStatistic, Tail),
    PValue(TestStatistic),
}

impl ContinuousFamily {
    fn parse(token: &str) -> Option<Self> {
        Some(match token {
            "normal" => Self::Normal,
            "exponential" => Self::Exponential,
            "gamma" => Self::Gamma,
            "beta" => Self::Beta,
            "lognormal" | "log-normal" => Self::LogNormal,
            "pareto" => Self::Pareto,
            "weibull" => Self::Weibull,
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Exponential => "exponential",
            Self::Gamma => "gamma",
            Self::Beta => "beta",
            Self::LogNormal => "lognormal",
            Self::Pareto => "pareto",
            Self::Weibull => "weibull",
        }
    }
}

impl ContinuousQuery {
    fn parse(token: &str) -> Option<Self> {
        Some(match token {
            "pdf" => Self::Pdf,
            "less-than" | "cdf" => Self::LessThan,
            "greater-than" => Self::GreaterThan,
            "between" => Self::Between,
            "percentile" => Self::Percentile,
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::LessThan => "less-than",
            Self::GreaterThan => "greater-than",
            Self::Between => "between",
            Self::Percentile => "percentile",
        }
    }
}

impl DiscreteFamily {
    fn parse(token: &str) -> Option<Self> {
        Some(match token {
            "binomial" => Self::Binomial,
            "poisson" => Self::Poisson,
            "geometric" => Self::Geometric,
            "hypergeometric" => Self::Hypergeometric,
            "negative-binomial" | "negbinom" => Self::NegativeBinomial,
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Binomial => "binomial",
            Self::Poisson => "poisson",
            Self::Geometric => "geometric",
            Self::Hypergeometric => "hypergeometric",
            Self::NegativeBinomial => "negative-binomial",
        }
    }
}

impl CountQuery {
    fn parse(token: &str) -> Option<Self> {
        Some(match token {
            "exact" => Self::Exact,
            "less-equal" => Self::LessEqual,
            "greater-equal" => Self::GreaterEqual,
            "between" => Self::Between,
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::LessEqual => "less-equal",
            Self::GreaterEqual => "greater-equal",
            Self::Between => "between",
        }
    }
}

impl RankTest {
    fn parse(token: &str) -> Option<Self> {
        Some(match token {
            "wilcoxon-signed" | "signed-rank" => Self::SignedRank,
            "mann-whitney" => Self::MannWhitney,
            "wilcoxon-rank-sum" | "rank-sum" => Self::RankSum,
            "runs" => Self::Runs,
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SignedRank => "wilcoxon-signed",
            Self::MannWhitney => "mann-whitney",
            Self::RankSum => "wilcoxon-rank-sum",
            Self::Runs => "runs",
        }
    }
}

impl TestStatistic {
    fn parse(token: &str) -> Option<Self> {
        Some(match token {
            "z" => Self::Z,
            "t" => Self::T,
            "chi-square" | "chi-squared" => Self::ChiSquare,
            "f" => Self::F,
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Z => "z",
            Self::T => "t",
            Self::ChiSquare => "chi-square",
            Self::F => "f",
        }
    }
}

impl Tail {
    fn parse(token: &str) -> Option<Self> {
        Some(match token {
            "right" => Self::Right,
            "left" => Self::Left,
            "two-tail" | "two-tailed" => Self::TwoTail,
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::TwoTail => "two-tail",
        }
    }
}

impl Operation {
    fn parse_tokens(tokens: &[&str]) -> Option<Self> {
        match *tokens {
            [family, query] => {
                if let Some(family) = ContinuousFamily::parse(family) {
                    return Some(Self::Continuous(family, ContinuousQuery::parse(query)?));
                }
                if let Some(family) = DiscreteFamily::parse(family) {
                    return Some(Self::Discrete(family, CountQuery::parse(query)?));
                }
                if let Some(test) = RankTest::parse(family) {
                    return match CountQuery::parse(query)? {
                        CountQuery::Between => None,
                        query => Some(Self::Rank(test, query)),
                    };
                }
                let statistic = TestStatistic::parse(family)?;
                match query {
                    "critical" => Some(Self::Critical(statistic, Tail::default())),
                    "p-value" => Some(Self::PValue(statistic)),
                    _ => None,
                }
            }
            [statistic, "critical", tail] => Some(Self::Critical(
                TestStatistic::parse(statistic)?,
                Tail::parse(tail)?,
            )),
            _ => None,
        }
    }
}

impl FromStr for Operation {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();
        Self::parse_tokens(&tokens).ok_or_else(|| StatsError::UnknownOperation {
            operation: s.to_string(),
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continuous(family, query) => write!(f, "{} {}", family.name(), query.name()),
            Self::Discrete(family, query) => write!(f, "{} {}", family.name(), query.name()),
            Self::Rank(test, query) => write!(f, "{} {}", test.name(), query.name()),
            Self::Critical(statistic, tail) => {
                write!(f, "{} critical {}", statistic.name(), tail.name())
            }
            Self::PValue(statistic) => write!(f, "{} p-value", statistic.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_distribution_queries() {
        assert_eq!(
            "binomial exact".parse::<Operation>().unwrap(),
            Operation::Discrete(DiscreteFamily::Binomial, CountQuery::Exact)
        );
        assert_eq!(
            "Normal  Between".parse::<Operation>().unwrap(),
            Operation::Continuous(ContinuousFamily::Normal, ContinuousQuery::Between)
        );
        assert_eq!(
            "lognormal cdf".parse::<Operation>().unwrap(),
            Operation::Continuous(ContinuousFamily::LogNormal, ContinuousQuery::LessThan)
        );
        assert_eq!(
            "wilcoxon-signed less-equal".parse::<Operation>().unwrap(),
            Operation::Rank(RankTest::SignedRank, CountQuery::LessEqual)
        );
    }

    #[test]
    fn test_parse_critical_and_p_values() {
        assert_eq!(
            "t critical two-tail".parse::<Operation>().unwrap(),
            Operation::Critical(TestStatistic::T, Tail::TwoTail)
        );
        assert_eq!(
            "chi-square critical".parse::<Operation>().unwrap(),
            Operation::Critical(TestStatistic::ChiSquare, Tail::Right)
        );
        assert_eq!(
            "z p-value".parse::<Operation>().unwrap(),
            Operation::PValue(TestStatistic::Z)
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for bad in [
            "",
            "binomial",
            "binomial percentile",
            "runs between",
            "cauchy pdf",
            "z critical sideways",
            "normal pdf extra",
        ] {
            assert_eq!(
                bad.parse::<Operation>(),
                Err(StatsError::UnknownOperation {
                    operation: bad.to_string()
                }),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_display_round_trips() {
        for name in [
            "normal percentile",
            "negative-binomial between",
            "mann-whitney greater-equal",
            "f critical left",
            "t p-value",
        ] {
            let op: Operation = name.parse().unwrap();
            assert_eq!(op.to_string(), name);
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }
}
