//! Command-line arguments and logging setup.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::OutputFormat;

/// Exact fraction calculator.
///
/// With five operands, evaluates `NUM1/DEN1 OP NUM2/DEN2` once and prints
/// the result. With none, reads one request per line from stdin.
#[derive(Debug, Parser)]
#[command(name = "quotient", version, about)]
pub struct Cli {
    /// Request fields: NUM1 DEN1 OP NUM2 DEN2, where OP is one of + - * /
    #[arg(value_name = "FIELD", num_args = 0..=5, allow_negative_numbers = true)]
    pub fields: Vec<String>,

    /// Output format for results
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Digits after the decimal point for `--format decimal`
    #[arg(short, long, default_value_t = 10)]
    pub precision: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log directive for the verbosity count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Installs a stderr `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the `-v` flags.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    // A subscriber installed earlier (e.g. by a test harness) keeps working.
    if let Err(e) = installed {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}
