//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::analyzer::{StopwordSet, create_tokenizer};
use crate::cli::output::{OutputFormat, format_stopwords, format_tokens};
use crate::cli::parser::{Cli, Commands};
use crate::core::TagFilter;
use crate::error::{Error, Result};
use crate::pipeline::{FilterLoop, RunSummary};
use log::info;
use std::io::{self, BufRead, Write};

/// Initializes the `env_logger` backend from the verbosity flag.
///
/// `RUST_LOG` takes precedence over `-v`. Log output goes to stderr.
pub fn init_logging(cli: &Cli) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();
}

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success. The `filter` command writes its
/// lines directly to stdout and returns an empty string.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match cli.command_or_default() {
        Commands::Filter => filter_stdio(cli).map(|_| String::new()),
        Commands::Tokenize { sentence } => cmd_tokenize(cli, &sentence, format),
        Commands::Stopwords => cmd_stopwords(cli, format),
    }
}

/// Runs the filter loop over locked stdin and stdout.
///
/// # Errors
///
/// Returns an error if setup fails or the loop hits a fatal error.
pub fn filter_stdio(cli: &Cli) -> Result<RunSummary> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_filter(cli, stdin.lock(), stdout.lock())
}

/// Builds the configured collaborators and runs the filter loop.
///
/// The analyzer is started before the first line is read, so a missing
/// analyzer fails without consuming input.
///
/// # Errors
///
/// Returns an error if the tag policy is empty, the stopword file or
/// analyzer cannot be loaded, or the loop hits a fatal error.
pub fn run_filter<R: BufRead, W: Write>(cli: &Cli, input: R, output: W) -> Result<RunSummary> {
    let filter = build_tag_filter(cli)?;
    let stopwords = build_stopwords(cli)?;
    let config = cli.analyzer_config()?;
    let tokenizer = create_tokenizer(&config)?;
    info!(
        "{} analyzer ready ({} stopwords, keep prefixes {:?}, exact {:?})",
        tokenizer.name(),
        stopwords.len(),
        filter.prefixes(),
        filter.exact()
    );

    let filter_loop = FilterLoop::new(tokenizer.as_ref(), &stopwords, &filter, cli.line_encoder());
    let summary = filter_loop.run(input, output)?;
    info!(
        "{:?} after {} lines, {} forms kept",
        summary.termination, summary.lines, summary.kept
    );
    Ok(summary)
}

/// Builds the effective stopword set from the flags.
///
/// # Errors
///
/// Returns an error if the `--stopwords` file cannot be read.
pub fn build_stopwords(cli: &Cli) -> Result<StopwordSet> {
    let mut stopwords = if cli.no_default_stopwords {
        StopwordSet::empty()
    } else {
        StopwordSet::default()
    };
    if let Some(path) = &cli.stopwords {
        let added = stopwords.extend_from_file(path)?;
        info!("added {added} stopwords from {}", path.display());
    }
    Ok(stopwords)
}

/// Builds the tag filter, rejecting a policy that keeps nothing.
fn build_tag_filter(cli: &Cli) -> Result<TagFilter> {
    let filter = cli.tag_filter();
    if filter.prefixes().is_empty() && filter.exact().is_empty() {
        return Err(Error::Config {
            message: "--no-default-tags requires at least one --prefix-tag or --exact-tag"
                .to_string(),
        });
    }
    Ok(filter)
}

fn cmd_tokenize(cli: &Cli, sentence: &str, format: OutputFormat) -> Result<String> {
    let filter = build_tag_filter(cli)?;
    let stopwords = build_stopwords(cli)?;
    let tokenizer = create_tokenizer(&cli.analyzer_config()?)?;
    let tokens = tokenizer.tokenize(sentence, &stopwords)?;
    Ok(format_tokens(&tokens, &filter, format))
}

fn cmd_stopwords(cli: &Cli, format: OutputFormat) -> Result<String> {
    let stopwords = build_stopwords(cli)?;
    Ok(format_stopwords(&stopwords.entries(), format))
}
