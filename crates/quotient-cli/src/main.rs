use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use quotient_cli::config::{init_logging, Cli};
use quotient_cli::{calculate, run_interactive};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    if cli.fields.is_empty() {
        let stdin = io::stdin();
        return match run_interactive(stdin.lock(), io::stdout().lock(), cli.format, cli.precision) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let fields: Vec<&str> = cli.fields.iter().map(String::as_str).collect();
    match calculate(&fields, cli.format, cli.precision) {
        Ok(text) => {
            let mut stdout = io::stdout().lock();
            if writeln!(stdout, "{text}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
