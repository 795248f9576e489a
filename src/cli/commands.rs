//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use miette::{NamedSource, Report};
use serde::Serialize;

use crate::config::{ColorMode, HighlightConfig};
use crate::highlight;
use crate::report::{self, CheckOutcome, CheckReport};
use lumen_syntax::lexer::{self, Token};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (10 MB).
///
/// The whole buffer is held in memory and re-scanned once per category.
const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Path that selects standard input.
const STDIN_PATH: &str = "-";

// ============================================================================
// Input
// ============================================================================

/// Name used for `path` in messages and diagnostics.
pub fn display_name(path: &Path) -> String {
    if path.as_os_str() == STDIN_PATH {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Read a source file (or stdin for `-`) with a size limit.
///
/// # Errors
///
/// Returns an error if:
/// - The input cannot be read (I/O error, invalid UTF-8)
/// - The input exceeds `MAX_SOURCE_SIZE` (10 MB)
pub fn read_source(path: &Path) -> CliResult<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut source = String::new();
        io::stdin()
            .take(MAX_SOURCE_SIZE + 1)
            .read_to_string(&mut source)
            .map_err(|e| CliError::failure(format!("Error reading stdin: {}", e)))?;
        if source.len() as u64 > MAX_SOURCE_SIZE {
            return Err(CliError::failure(format!(
                "Input on stdin is too large (max {} bytes)",
                MAX_SOURCE_SIZE
            )));
        }
        return Ok(source);
    }

    let name = path.display();
    let metadata = fs::metadata(path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", name, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            name,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", name, e)))
}

// ============================================================================
// Commands
// ============================================================================

/// Check a file: print the highlighted source, the diagnostic, and the status line.
///
/// Exits with `ExitCode::FAILURE` when the outcome is not clean.
pub fn check_file(path: &Path, json: bool, color: ColorMode) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let name = display_name(path);
    let report = report::check(&source);

    if json {
        println!("{}", check_json(&name, &report)?);
    } else {
        let config = HighlightConfig::new().with_color(color);
        let highlighted = highlight::render_ansi(&source, &report.tokens, report.outcome.error_span(), &config);
        print!("{}", highlighted);
        if !source.is_empty() && !source.ends_with('\n') {
            println!();
        }
        if let CheckOutcome::SyntaxError(err) = &report.outcome {
            let diagnostic = Report::new(err.error.clone().with_end_of_input(source.len()))
                .with_source_code(NamedSource::new(name.clone(), source.clone()));
            eprintln!("{:?}", diagnostic);
        }
        println!("{}: {}", name, report.status_text());
    }

    Ok(exit_code_for(&report.outcome))
}

/// Tokenize a file and print one token per line, or a JSON array.
pub fn tokens_file(path: &Path, json: bool) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let tokens = lexer::tokenize(&source);

    if json {
        let out = serde_json::to_string_pretty(&tokens)
            .map_err(|e| CliError::failure(format!("Error serializing tokens: {}", e)))?;
        println!("{}", out);
    } else {
        print!("{}", token_lines(&tokens));
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Output formatting
// ============================================================================

#[derive(Serialize)]
struct CheckJson<'a> {
    file: &'a str,
    message: String,
    #[serde(flatten)]
    report: &'a CheckReport,
}

/// The `--json` form of a check report.
fn check_json(name: &str, report: &CheckReport) -> CliResult<String> {
    let json = CheckJson {
        file: name,
        message: report.status_text(),
        report,
    };
    serde_json::to_string_pretty(&json).map_err(|e| CliError::failure(format!("Error serializing report: {}", e)))
}

/// One `start..end category "text"` line per token.
fn token_lines(tokens: &[Token]) -> String {
    let mut out = String::new();
    for tok in tokens {
        out.push_str(&format!("{}..{} {} {:?}\n", tok.start(), tok.end(), tok.category, tok.text));
    }
    out
}

fn exit_code_for(outcome: &CheckOutcome) -> ExitCode {
    if outcome.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
