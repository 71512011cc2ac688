//! Binary entry point for noun-sieve.
//!
//! Filters Korean sentences on stdin down to their general nouns and
//! foreign-script tokens, one JSON object per line on stdout.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use noun_sieve::cli::output::{OutputFormat, format_error};
use noun_sieve::cli::{Cli, Commands, execute, filter_stdio, init_logging};
use noun_sieve::pipeline::Termination;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);
    let format = OutputFormat::parse(&cli.format);

    let result = if cli.command_or_default() == Commands::Filter {
        filter_stdio(&cli).map(|summary| match summary.termination {
            Termination::EndOfInput | Termination::OutputClosed => ExitCode::SUCCESS,
        })
    } else {
        execute(&cli).map(|output| {
            if !output.is_empty() {
                // Handle broken pipe gracefully (e.g., when piped to `head`)
                if let Err(e) = write!(io::stdout(), "{output}")
                    && e.kind() != io::ErrorKind::BrokenPipe
                {
                    eprintln!("Error writing to stdout: {e}");
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        })
    };

    result.unwrap_or_else(|e| {
        let error_output = format_error(&e, format);
        match format {
            // Filter output is data only, so its errors always go to stderr.
            OutputFormat::Json if cli.command_or_default() != Commands::Filter => {
                println!("{error_output}");
            }
            _ => eprintln!("Error: {error_output}"),
        }
        ExitCode::FAILURE
    })
}
