//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats. The `filter` command does not go
//! through here; its lines are written by [`crate::pipeline::FilterLoop`].

use crate::core::{TagFilter, Token};
use crate::error::Error;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

#[derive(Serialize)]
struct TokenRow<'a> {
    form: &'a str,
    tag: &'a str,
    kept: bool,
}

/// Formats the tokens of one sentence, marking those the filter keeps.
#[must_use]
pub fn format_tokens(tokens: &[Token], filter: &TagFilter, format: OutputFormat) -> String {
    let rows: Vec<TokenRow<'_>> = tokens
        .iter()
        .map(|t| TokenRow {
            form: &t.form,
            tag: &t.tag,
            kept: filter.keeps(&t.tag),
        })
        .collect();

    match format {
        OutputFormat::Text => format_tokens_text(&rows),
        OutputFormat::Json => format_json(&rows),
    }
}

fn format_tokens_text(rows: &[TokenRow<'_>]) -> String {
    if rows.is_empty() {
        return "No tokens.\n".to_string();
    }

    let width = rows
        .iter()
        .map(|r| r.form.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut output = String::new();
    let _ = writeln!(output, "{:<width$}  {:<12} Kept", "Form", "Tag");
    output.push_str(&"-".repeat(width + 19));
    output.push('\n');
    for row in rows {
        let _ = writeln!(
            output,
            "{:<width$}  {:<12} {}",
            row.form,
            row.tag,
            if row.kept { "yes" } else { "" }
        );
    }
    output
}

/// Formats the effective stopword list.
#[must_use]
pub fn format_stopwords(entries: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if entries.is_empty() {
                return "No stopwords.\n".to_string();
            }
            let mut output = String::new();
            for entry in entries {
                let _ = writeln!(output, "{entry}");
            }
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct StopwordList<'a> {
                count: usize,
                stopwords: &'a [String],
            }
            format_json(&StopwordList {
                count: entries.len(),
                stopwords: entries,
            })
        }
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorBody {
                success: bool,
                error: String,
            }
            format_json(&ErrorBody {
                success: false,
                error: error.to_string(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
