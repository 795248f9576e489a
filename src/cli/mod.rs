//! CLI module for Lumen
//!
//! This module provides the command-line interface for the syntax checker.
//!
//! ## Commands
//!
//! - `check <file>` - Highlight the source and report the first syntax error (default action)
//! - `tokens <file>` - Print the token sequence
//!
//! A `<file>` of `-` reads standard input.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::config::ColorMode;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Lumen syntax checker
#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(version = VERSION)]
#[command(about = "Syntax checker and highlighter for the Lumen toy language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Highlight the source and report the first syntax error
    Check {
        /// Source file to check (`-` for stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// When to color the highlighted source
        #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
        color: ColorMode,
    },

    /// Print the token sequence
    Tokens {
        /// Source file to tokenize (`-` for stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print the tokens as a JSON array
        #[arg(long)]
        json: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::tokens_file(&file, false);
    }

    match cli.command {
        Some(Command::Check { file, json, color }) => commands::check_file(&file, json, color),
        Some(Command::Tokens { file, json }) => commands::tokens_file(&file, json),
        None => {
            // Default: check the file if provided
            if let Some(file) = cli.file {
                commands::check_file(&file, false, ColorMode::Auto)
            } else {
                Err(CliError::failure("Error: no input file (try `lumen --help`)"))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default_file() {
        let cli = Cli::try_parse_from(["lumen", "main.lum"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, Some(PathBuf::from("main.lum")));
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["lumen", "check", "main.lum", "--json", "--color", "never"]).unwrap();
        if let Some(Command::Check { file, json, color }) = cli.command {
            assert_eq!(file, PathBuf::from("main.lum"));
            assert!(json);
            assert_eq!(color, ColorMode::Never);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_check_defaults() {
        let cli = Cli::try_parse_from(["lumen", "check", "-"]).unwrap();
        if let Some(Command::Check { file, json, color }) = cli.command {
            assert_eq!(file, PathBuf::from("-"));
            assert!(!json);
            assert_eq!(color, ColorMode::Auto);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::try_parse_from(["lumen", "tokens", "main.lum", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Tokens { json: true, .. })));
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["lumen", "--lex", "main.lum"]).unwrap();
        assert!(cli.lex_file.is_some());
    }

    #[test]
    fn test_cli_rejects_unknown_color() {
        assert!(Cli::try_parse_from(["lumen", "check", "main.lum", "--color", "sometimes"]).is_err());
    }

    #[test]
    fn test_cli_lex_conflicts_with_file() {
        assert!(Cli::try_parse_from(["lumen", "--lex", "a.lum", "b.lum"]).is_err());
    }

    #[test]
    fn test_cli_error_displays_message() {
        let err = CliError::failure("Cannot access file 'a.lum'");
        assert_eq!(err.to_string(), "Cannot access file 'a.lum'");
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }

    #[test]
    fn test_execute_without_input_fails() {
        let cli = Cli::try_parse_from(["lumen"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }
}
