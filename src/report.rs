//! Check results for hosts.
//!
//! [`check`] runs the tokenizer and the parser over one buffer and folds the outcome into a
//! [`CheckReport`]: the tokens to highlight plus one of three outcomes (clean, a syntax error with
//! its location, or an unknown error). Hosts re-run it after every edit.
//!
//! ## Notes
//! - The pipeline never crashes the host. A panic escaping the tokenizer or parser is caught,
//!   logged, and reported as [`CheckOutcome::Unknown`].
//! - Lines and columns are 1-based. Columns count characters, not bytes.

use std::any::Any;
use std::fmt;
use std::panic::{self, UnwindSafe};

use serde::Serialize;

use lumen_syntax::diagnostics::{ParseError, ParseErrorKind};
use lumen_syntax::lexer::{self, Token};
use lumen_syntax::parser;
use lumen_syntax::span::Span;

/// Status text shown when the buffer parses.
pub const CLEAN_STATUS: &str = "No syntax errors.";

/// Tokens plus outcome for one buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub tokens: Vec<Token>,
    pub outcome: CheckOutcome,
}

impl CheckReport {
    pub fn status_text(&self) -> String {
        self.outcome.status_text()
    }
}

/// How a check ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    Clean,
    SyntaxError(SyntaxErrorReport),
    /// Something other than a grammar violation went wrong.
    Unknown { message: String },
}

impl CheckOutcome {
    pub fn is_clean(&self) -> bool {
        matches!(self, CheckOutcome::Clean)
    }

    /// The one-line status a host shows next to the buffer.
    pub fn status_text(&self) -> String {
        match self {
            CheckOutcome::Clean => CLEAN_STATUS.to_string(),
            CheckOutcome::SyntaxError(report) => report.to_string(),
            CheckOutcome::Unknown { message } => format!("Unknown error: {message}"),
        }
    }

    /// Span of the token to mark as erroneous, if the outcome has one.
    pub fn error_span(&self) -> Option<Span> {
        match self {
            CheckOutcome::SyntaxError(report) => report.location.span(),
            CheckOutcome::Clean | CheckOutcome::Unknown { .. } => None,
        }
    }
}

/// A grammar violation resolved against the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxErrorReport {
    pub message: String,
    pub kind: ParseErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub location: ErrorLocation,
    /// The parser's error, kept for miette rendering.
    #[serde(skip)]
    pub error: ParseError,
}

impl SyntaxErrorReport {
    /// Resolve `error` against `source`.
    pub fn new(source: &str, error: ParseError) -> Self {
        let location = match error.span() {
            Some(span) => {
                let (line, column) = line_column(source, span.start);
                ErrorLocation::Token { span, line, column }
            }
            None => {
                let (line, column) = line_column(source, source.len());
                ErrorLocation::EndOfInput {
                    offset: source.len(),
                    line,
                    column,
                }
            }
        };
        Self {
            message: error.message.clone(),
            kind: error.kind,
            hint: error.hint.clone(),
            location,
            error,
        }
    }
}

impl fmt::Display for SyntaxErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.location)
    }
}

/// Where a syntax error sits in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "at", rename_all = "snake_case")]
pub enum ErrorLocation {
    /// Anchored to the offending token.
    Token { span: Span, line: usize, column: usize },
    /// The input ended early; `offset` is the source length.
    EndOfInput { offset: usize, line: usize, column: usize },
}

impl ErrorLocation {
    pub fn span(&self) -> Option<Span> {
        match self {
            ErrorLocation::Token { span, .. } => Some(*span),
            ErrorLocation::EndOfInput { .. } => None,
        }
    }

    pub fn line_column(&self) -> (usize, usize) {
        match *self {
            ErrorLocation::Token { line, column, .. } | ErrorLocation::EndOfInput { line, column, .. } => {
                (line, column)
            }
        }
    }
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorLocation::Token { line, column, .. } => write!(f, "line {line}, column {column}"),
            ErrorLocation::EndOfInput { line, column, .. } => {
                write!(f, "end of input (line {line}, column {column})")
            }
        }
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Tokenize and parse `source`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn check(source: &str) -> CheckReport {
    let tokens = match guarded("tokenize", || lexer::tokenize(source)) {
        Ok(tokens) => tokens,
        Err(message) => {
            return CheckReport {
                tokens: Vec::new(),
                outcome: CheckOutcome::Unknown { message },
            };
        }
    };
    let outcome = check_tokens(source, &tokens);
    CheckReport { tokens, outcome }
}

/// Parse an already tokenized buffer. `source` is only used to resolve the error location.
pub fn check_tokens(source: &str, tokens: &[Token]) -> CheckOutcome {
    match guarded("parse", || parser::parse(tokens)) {
        Ok(Ok(())) => CheckOutcome::Clean,
        Ok(Err(err)) => CheckOutcome::SyntaxError(SyntaxErrorReport::new(source, err)),
        Err(message) => CheckOutcome::Unknown { message },
    }
}

/// Run one pipeline stage, turning a panic into an error message.
fn guarded<T>(stage: &'static str, f: impl FnOnce() -> T + UnwindSafe) -> Result<T, String> {
    panic::catch_unwind(f).map_err(|payload| {
        let message = panic_message(payload.as_ref());
        tracing::error!(stage, %message, "syntax check panicked");
        message
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "internal error".to_string()
    }
}

/// 1-based (line, column) of byte `offset`, counting columns in characters.
pub fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let mut line = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    let column = source
        .get(line_start..offset)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(offset - line_start);
    (line, column + 1)
}
