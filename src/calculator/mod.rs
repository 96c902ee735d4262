//! Request-level calculator.
//!
//! A [`CalcRequest`] names an [`Operation`] and carries numeric parameters.
//! [`Calculator::evaluate`] validates the parameters, builds the distribution
//! and answers the query. Validation failures name the offending field; a
//! point outside the support is [`StatsError::OutOfRange`] and an interval
//! with its bounds out of order is [`StatsError::InvalidRange`].
//!
//! Operations that need the special-function provider check it first and
//! fail with [`StatsError::ProviderUnavailable`] without a partial result.

mod config;
mod operation;
mod request;

pub use config::{CalculatorConfig, EXACT_SAMPLE_LIMIT, SIGNED_RANK_LIMIT};
pub use operation::{
    ContinuousFamily, ContinuousQuery, CountQuery, DiscreteFamily, Operation, RankTest, Tail,
    TestStatistic,
};
pub use request::{CalcRequest, CalcResult, Equivalent, Support};

use crate::stats::special;
use crate::stats::{
    Beta, Binomial, ChiSquared, ContinuousDistribution, DiscreteDistribution, Exponential,
    FDistribution, Gamma, Geometric, Hypergeometric, LogNormal, MannWhitneyU, NegativeBinomial,
    Normal, Pareto, Poisson, RunsTest, StatsError, StatsResult, StudentT, Weibull,
    WilcoxonRankSum, WilcoxonSignedRank,
};
use request::Params;

/// Evaluates calculation requests under a fixed [`CalculatorConfig`].
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    /// Limits past the representable range are lowered to it.
    pub fn new(config: CalculatorConfig) -> Self {
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "lowering calculator limits");
        }
        Self {
            config: config.clamped(),
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Parse the operation name and evaluate the request.
    pub fn evaluate(&self, request: &CalcRequest) -> StatsResult<CalcResult> {
        let operation: Operation = request.operation.parse()?;
        tracing::debug!(%operation, params = request.params.len(), "evaluating request");
        self.evaluate_operation(operation, request.params())
    }

    fn evaluate_operation(
        &self,
        operation: Operation,
        params: Params<'_>,
    ) -> StatsResult<CalcResult> {
        match operation {
            Operation::Continuous(family, query) => continuous(family, query, params),
            Operation::Discrete(family, query) => discrete(family, query, params),
            Operation::Rank(test, query) => self.rank(test, query, params),
            Operation::Critical(statistic, tail) => critical(statistic, tail, params),
            Operation::PValue(statistic) => p_value(statistic, params),
        }
    }

    fn rank(
        &self,
        test: RankTest,
        query: CountQuery,
        params: Params<'_>,
    ) -> StatsResult<CalcResult> {
        match test {
            RankTest::SignedRank => {
                let n = params.positive_count("n")?;
                if n > self.config.signed_rank_max_n {
                    return Err(too_large("n", n, self.config.signed_rank_max_n));
                }
                let dist = WilcoxonSignedRank::new(n)?;
                count_result(&dist, query, params, |_| None)
            }
            RankTest::MannWhitney => {
                let n1 = self.exact_sample("n1", params)?;
                let n2 = self.exact_sample("n2", params)?;
                let dist = MannWhitneyU::new(n1, n2)?;
                count_result(&dist, query, params, |u| {
                    Some(Equivalent {
                        name: "w".to_string(),
                        value: dist.u_to_rank_sum(u) as f64,
                    })
                })
            }
            RankTest::RankSum => {
                let n1 = params.positive_count("n1")?;
                let n2 = params.positive_count("n2")?;
                let dist = WilcoxonRankSum::new(n1, n2)?;
                if query == CountQuery::Exact {
                    for (name, n) in [("n1", n1), ("n2", n2)] {
                        if n > self.config.exact_sample_max {
                            return Err(too_large(name, n, self.config.exact_sample_max));
                        }
                    }
                } else if !dist.is_exact() {
                    special::ensure_ready()?;
                }
                count_result(&dist, query, params, |w| {
                    dist.mann_whitney_u(w).map(|u| Equivalent {
                        name: "u".to_string(),
                        value: u as f64,
                    })
                })
            }
            RankTest::Runs => {
                let dist = RunsTest::new(params.count("n1")?, params.count("n2")?)?;
                count_result(&dist, query, params, |_| None)
            }
        }
    }

    fn exact_sample(&self, name: &str, params: Params<'_>) -> StatsResult<u64> {
        let n = params.positive_count(name)?;
        if n > self.config.exact_sample_max {
            return Err(too_large(name, n, self.config.exact_sample_max));
        }
        Ok(n)
    }
}

fn too_large(name: &str, n: u64, max: u64) -> StatsError {
    StatsError::invalid(
        name,
        n as f64,
        &format!("exceeds the supported sample size of {}", max),
    )
}

/// Admissible query points of a continuous family.
#[derive(Debug, Clone, Copy)]
struct Domain {
    min: f64,
    max: f64,
    open_min: bool,
}

impl Domain {
    const REAL_LINE: Domain = Domain {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
        open_min: false,
    };

    fn at_least(min: f64) -> Self {
        Self {
            min,
            max: f64::INFINITY,
            open_min: false,
        }
    }

    fn check(&self, name: &str, x: f64) -> StatsResult<f64> {
        let below = if self.open_min {
            x <= self.min
        } else {
            x < self.min
        };
        if below || x > self.max {
            return Err(StatsError::OutOfRange {
                name: name.to_string(),
                value: x,
                min: self.min,
                max: self.max,
            });
        }
        Ok(x)
    }

    fn support(&self) -> Support {
        Support {
            min: self.min,
            max: self.max,
        }
    }
}

fn with_domain<D: ContinuousDistribution + 'static>(
    dist: D,
    domain: Domain,
) -> (Box<dyn ContinuousDistribution>, Domain) {
    (Box::new(dist), domain)
}

fn build_continuous(
    family: ContinuousFamily,
    params: Params<'_>,
) -> StatsResult<(Box<dyn ContinuousDistribution>, Domain)> {
    Ok(match family {
        ContinuousFamily::Normal => {
            special::ensure_ready()?;
            let dist = Normal::new(params.real("mu")?, params.positive("sigma")?)?;
            with_domain(dist, Domain::REAL_LINE)
        }
        ContinuousFamily::Exponential => {
            let dist = Exponential::new(params.positive("lambda")?)?;
            with_domain(dist, Domain::at_least(0.0))
        }
        ContinuousFamily::Gamma => {
            special::ensure_ready()?;
            let shape = params.positive("alpha")?;
            let dist = Gamma::from_shape_scale(shape, params.positive("beta")?)?;
            with_domain(dist, Domain::at_least(0.0))
        }
        ContinuousFamily::Beta => {
            special::ensure_ready()?;
            let dist = Beta::new(params.positive("alpha")?, params.positive("beta")?)?;
            let domain = Domain {
                min: 0.0,
                max: 1.0,
                open_min: false,
            };
            with_domain(dist, domain)
        }
        ContinuousFamily::LogNormal => {
            special::ensure_ready()?;
            let dist = LogNormal::new(params.real("mu")?, params.positive("sigma")?)?;
            let domain = Domain {
                open_min: true,
                ..Domain::at_least(0.0)
            };
            with_domain(dist, domain)
        }
        ContinuousFamily::Pareto => {
            let xm = params.positive("xm")?;
            let dist = Pareto::new(params.positive("alpha")?, xm)?;
            with_domain(dist, Domain::at_least(xm))
        }
        ContinuousFamily::Weibull => {
            let dist = Weibull::new(params.positive("k")?, params.positive("lambda")?)?;
            with_domain(dist, Domain::at_least(0.0))
        }
    })
}

fn continuous(
    family: ContinuousFamily,
    query: ContinuousQuery,
    params: Params<'_>,
) -> StatsResult<CalcResult> {
    let (dist, domain) = build_continuous(family, params)?;
    let value = match query {
        ContinuousQuery::Pdf => dist.pdf(domain.check("x1", params.real("x1")?)?),
        ContinuousQuery::LessThan => dist.cdf(domain.check("x1", params.real("x1")?)?),
        ContinuousQuery::GreaterThan => dist.sf(domain.check("x1", params.real("x1")?)?),
        ContinuousQuery::Between => {
            let x1 = domain.check("x1", params.real("x1")?)?;
            let x2 = domain.check("x2", params.real("x2")?)?;
            if x1 >= x2 {
                return Err(StatsError::InvalidRange {
                    lower: x1,
                    upper: x2,
                    strict: true,
                });
            }
            dist.prob_between(x1, x2)
        }
        ContinuousQuery::Percentile => {
            let p = params.open_probability("p")?;
            dist.percentile(p)
                .ok_or(StatsError::InvalidProbability { value: p })?
        }
    };
    Ok(CalcResult::Detailed {
        value,
        moments: dist.moments(),
        support: Some(domain.support()),
        equivalent: None,
    })
}

fn build_discrete(
    family: DiscreteFamily,
    params: Params<'_>,
) -> StatsResult<Box<dyn DiscreteDistribution>> {
    let dist: Box<dyn DiscreteDistribution> = match family {
        DiscreteFamily::Binomial => Box::new(Binomial::new(
            params.positive_count("n")?,
            params.probability("p")?,
        )?),
        DiscreteFamily::Poisson => Box::new(Poisson::new(params.positive("lambda")?)?),
        DiscreteFamily::Geometric => Box::new(Geometric::new(params.open_probability("p")?)?),
        DiscreteFamily::Hypergeometric => {
            let population = params.positive_count("N")?;
            let successes = params.count("M")?;
            let draws = params.positive_count("n")?;
            Box::new(Hypergeometric::new(population, successes, draws)?)
        }
        DiscreteFamily::NegativeBinomial => Box::new(NegativeBinomial::new(
            params.positive_count("r")?,
            params.open_probability("p")?,
        )?),
    };
    Ok(dist)
}

fn discrete(
    family: DiscreteFamily,
    query: CountQuery,
    params: Params<'_>,
) -> StatsResult<CalcResult> {
    let dist = build_discrete(family, params)?;
    count_result(dist.as_ref(), query, params, |_| None)
}

/// A count parameter checked against the support of `dist`.
fn support_point<D: DiscreteDistribution + ?Sized>(
    dist: &D,
    name: &str,
    params: Params<'_>,
) -> StatsResult<u64> {
    let x = params.count(name)?;
    let max = dist.max_val();
    if x < dist.min_val() || max.is_some_and(|max| x > max) {
        return Err(StatsError::OutOfRange {
            name: name.to_string(),
            value: x as f64,
            min: dist.min_val() as f64,
            max: max.map_or(f64::INFINITY, |max| max as f64),
        });
    }
    Ok(x)
}

/// Answer a count query and attach moments, support and the statistic on
/// its related scale (if `equivalent` knows one).
fn count_result<D, F>(
    dist: &D,
    query: CountQuery,
    params: Params<'_>,
    equivalent: F,
) -> StatsResult<CalcResult>
where
    D: DiscreteDistribution + ?Sized,
    F: Fn(u64) -> Option<Equivalent>,
{
    let x1 = support_point(dist, "x1", params)?;
    let value = match query {
        CountQuery::Exact => dist.pmf(x1),
        CountQuery::LessEqual => dist.cdf(x1),
        CountQuery::GreaterEqual => dist.prob_at_least(x1),
        CountQuery::Between => {
            let x2 = support_point(dist, "x2", params)?;
            if x1 > x2 {
                return Err(StatsError::InvalidRange {
                    lower: x1 as f64,
                    upper: x2 as f64,
                    strict: false,
                });
            }
            dist.prob_between(x1, x2)
        }
    };
    Ok(CalcResult::Detailed {
        value,
        moments: dist.moments(),
        support: Some(Support {
            min: dist.min_val() as f64,
            max: dist.max_val().map_or(f64::INFINITY, |max| max as f64),
        }),
        equivalent: equivalent(x1),
    })
}

fn reference_distribution(
    statistic: TestStatistic,
    params: Params<'_>,
) -> StatsResult<Box<dyn ContinuousDistribution>> {
    special::ensure_ready()?;
    let dist: Box<dyn ContinuousDistribution> = match statistic {
        TestStatistic::Z => Box::new(Normal::standard()),
        TestStatistic::T => Box::new(StudentT::new(params.positive_count("df")? as f64)?),
        TestStatistic::ChiSquare => {
            Box::new(ChiSquared::new(params.positive_count("df")? as f64)?)
        }
        TestStatistic::F => Box::new(FDistribution::new(
            params.positive_count("df1")? as f64,
            params.positive_count("df2")? as f64,
        )?),
    };
    Ok(dist)
}

fn critical(statistic: TestStatistic, tail: Tail, params: Params<'_>) -> StatsResult<CalcResult> {
    let alpha = params.open_probability("alpha")?;
    let dist = reference_distribution(statistic, params)?;
    Ok(match tail {
        Tail::Right => CalcResult::Value {
            value: dist.ppf(1.0 - alpha)?,
        },
        Tail::Left => CalcResult::Value {
            value: dist.ppf(alpha)?,
        },
        Tail::TwoTail => CalcResult::Pair {
            lower: dist.ppf(alpha / 2.0)?,
            upper: dist.ppf(1.0 - alpha / 2.0)?,
        },
    })
}

fn p_value(statistic: TestStatistic, params: Params<'_>) -> StatsResult<CalcResult> {
    let x = params.real("x1")?;
    let dist = reference_distribution(statistic, params)?;
    Ok(match statistic {
        TestStatistic::Z | TestStatistic::T => {
            let one_tail = dist.sf(x.abs());
            CalcResult::Tails {
                one_tail,
                two_tail: 2.0 * one_tail,
            }
        }
        TestStatistic::ChiSquare | TestStatistic::F => CalcResult::Value {
            value: dist.sf(Domain::at_least(0.0).check("x1", x)?),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(result: CalcResult) -> f64 {
        match result {
            CalcResult::Detailed { value, .. } | CalcResult::Value { value } => value,
            other => panic!("expected a single value, got {:?}", other),
        }
    }

    fn eval(request: CalcRequest) -> StatsResult<CalcResult> {
        Calculator::default().evaluate(&request)
    }

    #[test]
    fn test_binomial_exact() {
        let result = eval(
            CalcRequest::new("binomial exact")
                .param("n", 10.0)
                .param("p", 0.5)
                .param("x1", 5.0),
        )
        .unwrap();
        match result {
            CalcResult::Detailed {
                value,
                moments,
                support,
                equivalent,
            } => {
                assert!((value - 0.24609375).abs() < 1e-12);
                assert!((moments.mean - 5.0).abs() < 1e-12);
                assert!((moments.variance - 2.5).abs() < 1e-12);
                assert_eq!(support, Some(Support { min: 0.0, max: 10.0 }));
                assert!(equivalent.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_discrete_between_and_ranges() {
        let base = CalcRequest::new("poisson between").param("lambda", 3.0);
        let value = value_of(eval(base.clone().param("x1", 0.0).param("x2", 2.0)).unwrap());
        assert!((value - 0.42319008112684353).abs() < 1e-12);

        let value = value_of(eval(base.clone().param("x1", 2.0).param("x2", 2.0)).unwrap());
        assert!((value - 4.5 * (-3.0_f64).exp()).abs() < 1e-12);

        assert_eq!(
            eval(base.clone().param("x1", 3.0).param("x2", 2.0)),
            Err(StatsError::InvalidRange {
                lower: 3.0,
                upper: 2.0,
                strict: false,
            })
        );
        assert_eq!(
            eval(base.param("x1", 1.0)),
            Err(StatsError::MissingParameter {
                name: "x2".to_string()
            })
        );
    }

    #[test]
    fn test_discrete_out_of_support() {
        let err = eval(
            CalcRequest::new("binomial less-equal")
                .param("n", 10.0)
                .param("p", 0.3)
                .param("x1", 11.0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            StatsError::OutOfRange {
                name: "x1".to_string(),
                value: 11.0,
                min: 0.0,
                max: 10.0
            }
        );

        // support [max(0, n + M - N), min(n, M)] = [2, 5]
        let hyper = CalcRequest::new("hypergeometric exact")
            .param("N", 10.0)
            .param("M", 5.0)
            .param("n", 7.0);
        assert!(matches!(
            eval(hyper.clone().param("x1", 1.0)),
            Err(StatsError::OutOfRange { .. })
        ));
        assert!(value_of(eval(hyper.param("x1", 2.0)).unwrap()) > 0.0);
    }

    #[test]
    fn test_discrete_parameter_validation_names_field() {
        let err = eval(
            CalcRequest::new("binomial exact")
                .param("n", 10.5)
                .param("p", 0.5)
                .param("x1", 1.0),
        )
        .unwrap_err();
        assert!(matches!(err, StatsError::InvalidParameter { ref name, .. } if name == "n"));

        let err = eval(
            CalcRequest::new("geometric exact")
                .param("p", 1.0)
                .param("x1", 1.0),
        )
        .unwrap_err();
        assert!(matches!(err, StatsError::InvalidParameter { ref name, .. } if name == "p"));

        let err = eval(
            CalcRequest::new("hypergeometric exact")
                .param("N", 5.0)
                .param("M", 6.0)
                .param("n", 2.0)
                .param("x1", 1.0),
        )
        .unwrap_err();
        assert!(matches!(err, StatsError::InvalidParameter { ref name, .. } if name == "M"));
    }

    #[test]
    fn test_geometric_greater_equal() {
        let value = value_of(
            eval(
                CalcRequest::new("geometric greater-equal")
                    .param("p", 0.25)
                    .param("x1", 3.0),
            )
            .unwrap(),
        );
        assert!((value - 0.75_f64.powi(3)).abs() < 1e-12);
    }

    #[test]
    fn test_continuous_queries() {
        let exp = CalcRequest::new("exponential less-than").param("lambda", 2.0);
        let value = value_of(eval(exp.clone().param("x1", 1.0)).unwrap());
        assert!((value - (1.0 - (-2.0_f64).exp())).abs() < 1e-12);

        let exp = CalcRequest {
            operation: "exponential percentile".to_string(),
            ..exp
        };
        let value = value_of(eval(exp.clone().param("p", 0.5)).unwrap());
        assert!((value - 2.0_f64.ln() / 2.0).abs() < 1e-12);

        for p in [0.0, 1.0, 1.5] {
            assert!(matches!(
                eval(exp.clone().param("p", p)),
                Err(StatsError::InvalidParameter { ref name, .. }) if name == "p"
            ));
        }
    }

    #[test]
    fn test_continuous_domain_checks() {
        let weibull = CalcRequest::new("weibull pdf")
            .param("k", 1.5)
            .param("lambda", 1.0);
        assert!(matches!(
            eval(weibull.param("x1", -0.5)),
            Err(StatsError::OutOfRange { ref name, .. }) if name == "x1"
        ));

        let pareto = CalcRequest::new("pareto less-than")
            .param("xm", 2.0)
            .param("alpha", 3.0);
        assert!(matches!(
            eval(pareto.clone().param("x1", 1.0)),
            Err(StatsError::OutOfRange { min, .. }) if min == 2.0
        ));
        let value = value_of(eval(pareto.param("x1", 4.0)).unwrap());
        assert!((value - (1.0 - 0.125)).abs() < 1e-12);

        let between = CalcRequest::new("exponential between")
            .param("lambda", 1.0)
            .param("x1", 2.0)
            .param("x2", 2.0);
        assert_eq!(
            eval(between),
            Err(StatsError::InvalidRange {
                lower: 2.0,
                upper: 2.0,
                strict: true,
            })
        );
    }

    #[test]
    fn test_pareto_infinite_moments_survive() {
        let result = eval(
            CalcRequest::new("pareto pdf")
                .param("xm", 1.0)
                .param("alpha", 1.0)
                .param("x1", 2.0),
        )
        .unwrap();
        match result {
            CalcResult::Detailed { moments, .. } => {
                assert_eq!(moments.mean, f64::INFINITY);
                assert_eq!(moments.variance, f64::INFINITY);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_signed_rank_cap() {
        let req = CalcRequest::new("wilcoxon-signed less-equal").param("x1", 3.0);
        // n = 5: subsets of {1..5} with sum ≤ 3 are {}, {1}, {2}, {3}, {1,2}
        let value = value_of(eval(req.clone().param("n", 5.0)).unwrap());
        assert!((value - 5.0 / 32.0).abs() < 1e-12);

        assert!(matches!(
            eval(req.clone().param("n", 26.0)),
            Err(StatsError::InvalidParameter { ref name, .. }) if name == "n"
        ));

        let relaxed = Calculator::new(CalculatorConfig {
            signed_rank_max_n: 30,
            ..CalculatorConfig::default()
        });
        assert!(relaxed.evaluate(&req.param("n", 26.0)).is_ok());
    }

    #[test]
    fn test_mann_whitney_reports_rank_sum() {
        let result = eval(
            CalcRequest::new("mann-whitney exact")
                .param("n1", 3.0)
                .param("n2", 3.0)
                .param("x1", 0.0),
        )
        .unwrap();
        match result {
            CalcResult::Detailed {
                value, equivalent, ..
            } => {
                assert!((value - 0.05).abs() < 1e-12);
                assert_eq!(
                    equivalent,
                    Some(Equivalent {
                        name: "w".to_string(),
                        value: 6.0
                    })
                );
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_rank_sum_exact_cap_only_for_pmf() {
        let calc = Calculator::new(CalculatorConfig {
            exact_sample_max: 10,
            ..CalculatorConfig::default()
        });
        let exact = CalcRequest::new("wilcoxon-rank-sum exact")
            .param("n1", 12.0)
            .param("n2", 4.0)
            .param("x1", 90.0);
        assert!(matches!(
            calc.evaluate(&exact),
            Err(StatsError::InvalidParameter { ref name, .. }) if name == "n1"
        ));

        let cdf = CalcRequest {
            operation: "wilcoxon-rank-sum less-equal".to_string(),
            ..exact
        };
        let value = value_of(calc.evaluate(&cdf).unwrap());
        assert!(value > 0.0 && value < 1.0);
    }

    #[test]
    fn test_oversized_limits_are_lowered() {
        let calc = Calculator::new(CalculatorConfig {
            signed_rank_max_n: 25,
            exact_sample_max: 10_000,
        });
        assert_eq!(calc.config().exact_sample_max, EXACT_SAMPLE_LIMIT);
        let request = CalcRequest::new("mann-whitney exact")
            .param("n1", 515.0)
            .param("n2", 3.0)
            .param("x1", 0.0);
        assert!(matches!(
            calc.evaluate(&request),
            Err(StatsError::InvalidParameter { ref name, .. }) if name == "n1"
        ));
    }

    #[test]
    fn test_runs_degenerate() {
        let result = eval(
            CalcRequest::new("runs exact")
                .param("n1", 0.0)
                .param("n2", 4.0)
                .param("x1", 1.0),
        )
        .unwrap();
        assert_eq!(value_of(result), 1.0);
    }

    #[test]
    fn test_critical_values() {
        let z = CalcRequest::new("z critical two-tail").param("alpha", 0.05);
        match eval(z).unwrap() {
            CalcResult::Pair { lower, upper } => {
                assert!((upper - 1.959963984540054).abs() < 1e-8);
                assert!((lower + upper).abs() < 1e-10);
            }
            other => panic!("unexpected {:?}", other),
        }

        let chi = CalcRequest::new("chi-square critical")
            .param("alpha", 0.05)
            .param("df", 1.0);
        assert!((value_of(eval(chi).unwrap()) - 3.841458820694124).abs() < 1e-7);

        let t = CalcRequest::new("t critical left")
            .param("alpha", 0.025)
            .param("df", 10.0);
        assert!((value_of(eval(t).unwrap()) + 2.2281388519649385).abs() < 1e-7);

        let bad = CalcRequest::new("f critical")
            .param("alpha", 1.0)
            .param("df1", 5.0)
            .param("df2", 10.0);
        assert!(matches!(
            eval(bad),
            Err(StatsError::InvalidParameter { ref name, .. }) if name == "alpha"
        ));
    }

    #[test]
    fn test_p_values() {
        match eval(CalcRequest::new("z p-value").param("x1", -1.959963984540054)).unwrap() {
            CalcResult::Tails { one_tail, two_tail } => {
                assert!((one_tail - 0.025).abs() < 1e-9);
                assert!((two_tail - 2.0 * one_tail).abs() < 1e-15);
            }
            other => panic!("unexpected {:?}", other),
        }

        let chi = CalcRequest::new("chi-square p-value").param("df", 2.0);
        let value = value_of(eval(chi.clone().param("x1", 2.0)).unwrap());
        assert!((value - (-1.0_f64).exp()).abs() < 1e-10);
        assert!(matches!(
            eval(chi.param("x1", -1.0)),
            Err(StatsError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_unknown_operation() {
        assert_eq!(
            eval(CalcRequest::new("cauchy pdf")),
            Err(StatsError::UnknownOperation {
                operation: "cauchy pdf".to_string()
            })
        );
    }
}
