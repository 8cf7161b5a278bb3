//! Shipping fee CLI
//!
//! Commands:
//!   quote     - Price one package
//!   schedule  - Print the fee schedule as JSON
//!   version   - Print the version

use shipping_fee_core::{fee_schedule, FeeCalculator, FeeError, FeeRates, QuoteOutcome};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "quote" => cmd_quote(&args[2..]),
        "schedule" => cmd_schedule(&args[2..]),
        "version" | "--version" | "-v" => {
            println!("shipping-fee {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Log to stderr, filtered by RUST_LOG (default: warn)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!(
        r#"
shipping-fee - Tiered shipping fee calculator

USAGE:
    shipping-fee <COMMAND> [OPTIONS]

COMMANDS:
    quote <WEIGHT> <ZONE> [--insured] [--rates FILE] [--json]
                                     Price one package
    schedule [--rates FILE]          Print the fee schedule as JSON
    version                          Print version
    help                             Print this message

ZONES:
    Domestic, International, Express (case-sensitive)

OPTIONS:
    --insured        Apply the insurance surcharge
    --rates FILE     Load a JSON rate card instead of the built-in one
    --json           Print {{ "fee": ..., "error": ... }} instead of a plain fee
"#
    );
}

/// Parsed arguments of the `quote` command
#[derive(Debug, Clone, PartialEq)]
struct QuoteArgs {
    weight: f64,
    zone: String,
    insured: bool,
    rates_path: Option<PathBuf>,
    json_output: bool,
}

fn parse_quote_args(args: &[String]) -> Result<QuoteArgs> {
    const USAGE: &str =
        "Usage: shipping-fee quote <WEIGHT> <ZONE> [--insured] [--rates FILE] [--json]";

    let mut positional = Vec::new();
    let mut insured = false;
    let mut json_output = false;
    let mut rates_path = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--insured" => insured = true,
            "--json" => json_output = true,
            "--rates" => {
                let path = iter.next().ok_or("--rates requires a file path")?;
                rates_path = Some(PathBuf::from(path));
            }
            _ => positional.push(arg),
        }
    }

    let [weight, zone] = positional.as_slice() else {
        return Err(USAGE.into());
    };
    let weight: f64 = weight
        .parse()
        .map_err(|_| format!("Weight must be a number, got '{}'", weight))?;

    Ok(QuoteArgs {
        weight,
        zone: zone.to_string(),
        insured,
        rates_path,
        json_output,
    })
}

fn parse_rates_path(args: &[String]) -> Result<Option<PathBuf>> {
    match args {
        [] => Ok(None),
        [flag, path] if flag == "--rates" => Ok(Some(PathBuf::from(path))),
        _ => Err("Usage: shipping-fee schedule [--rates FILE]".into()),
    }
}

fn load_rates(path: &Option<PathBuf>) -> Result<FeeRates> {
    match path {
        Some(path) => Ok(FeeRates::from_json_file(path)?),
        None => Ok(FeeRates::default()),
    }
}

fn cmd_quote(args: &[String]) -> Result<()> {
    let args = parse_quote_args(args)?;
    let calculator = FeeCalculator::new(load_rates(&args.rates_path)?)?;
    debug!(weight = args.weight, zone = %args.zone, insured = args.insured, "quoting");

    let (body, error) = render_quote(&calculator, &args)?;
    if !body.is_empty() {
        println!("{}", body);
    }
    match error {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Stdout text for a quote, plus the validation error that fails the command
///
/// With `--json` the outcome is rendered even on failure (fee 0). Without it,
/// a failed quote prints nothing to stdout.
fn render_quote(calculator: &FeeCalculator, args: &QuoteArgs) -> Result<(String, Option<FeeError>)> {
    let result = calculator.calculate(args.weight, &args.zone, args.insured);

    let body = if args.json_output {
        serde_json::to_string_pretty(&QuoteOutcome::from(result.clone()))?
    } else {
        match &result {
            Ok(fee) => format!("{:.4}", fee),
            Err(_) => String::new(),
        }
    };

    Ok((body, result.err()))
}

fn cmd_schedule(args: &[String]) -> Result<()> {
    let calculator = FeeCalculator::new(load_rates(&parse_rates_path(args)?)?)?;
    let doc = fee_schedule(calculator.rates());
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
