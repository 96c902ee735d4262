//! probcalc CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use probcalc::calculator::{CalcRequest, Calculator, CalculatorConfig};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "probcalc")]
#[command(about = "probcalc - distribution probabilities, quantiles and critical values")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    /// Calculator limits (TOML). Defaults apply to missing keys.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single operation, e.g. `calc "binomial exact" -p n=10 -p p=0.5 -p x1=5`
    Calc {
        /// Operation name ("normal between", "t critical two-tail", ...)
        operation: String,

        /// Parameter as name=value; repeat for each parameter
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, f64)>,
    },

    /// Evaluate a JSON array of requests
    Batch {
        /// Input file: [{"operation": ..., "params": {...}}, ...]
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CalculatorConfig::default(),
    };
    let calc = Calculator::new(config);

    match cli.command {
        Commands::Calc { operation, params } => cmd_calc(&calc, operation, params),
        Commands::Batch { input, output } => cmd_batch(&calc, &input, output.as_ref()),
    }
}

fn parse_param(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value for '{}': {}", name, e))?;
    Ok((name.trim().to_string(), value))
}

fn load_config(path: &Path) -> Result<CalculatorConfig> {
    tracing::info!(path = %path.display(), "loading config");
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = CalculatorConfig::from_toml_str(&source)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn cmd_calc(calc: &Calculator, operation: String, params: Vec<(String, f64)>) -> Result<()> {
    let request = params
        .into_iter()
        .fold(CalcRequest::new(operation), |req, (name, value)| req.param(name, value));
    let result = calc
        .evaluate(&request)
        .with_context(|| format!("evaluating '{}'", request.operation))?;
    write_json(None, serde_json::to_value(result)?)
}

fn cmd_batch(calc: &Calculator, input: &Path, output: Option<&PathBuf>) -> Result<()> {
    tracing::info!(path = %input.display(), "loading requests");
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("reading requests {}", input.display()))?;
    let requests: Vec<CalcRequest> = serde_json::from_str(&json)?;

    let mut failures = 0usize;
    let results: Vec<serde_json::Value> = requests
        .iter()
        .map(|request| match calc.evaluate(request) {
            Ok(result) => serde_json::json!({
                "operation": request.operation,
                "result": result,
            }),
            Err(err) => {
                failures += 1;
                tracing::warn!(operation = %request.operation, error = %err, "request failed");
                serde_json::json!({
                    "operation": request.operation,
                    "error": err.to_string(),
                })
            }
        })
        .collect();
    tracing::info!(requests = results.len(), failures, "batch evaluated");

    write_json(output, serde_json::Value::Array(results))
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
