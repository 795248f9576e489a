#![forbid(unsafe_code)]
//! Lumen syntax checker
//!
//! Lumen is a small C-like toy language. This crate is the host around the `lumen_syntax`
//! frontend: it runs the tokenizer and parser over a buffer, turns the outcome into a report an
//! editor or terminal can display, and renders highlighted source.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation. `report::check` still catches such a panic and reports it as an unknown error.
//!
//! ## Example
//!
//! ```
//! use lumen::report::{CheckOutcome, check};
//!
//! let report = check("let variable x = 1; x = x + 2;");
//! assert_eq!(report.outcome, CheckOutcome::Clean);
//! assert_eq!(report.tokens.len(), 10);
//! ```

pub mod cli;
pub mod config;
pub mod highlight;
pub mod report;

pub use lumen_syntax::diagnostics;
pub use lumen_syntax::lexer;
pub use lumen_syntax::parser;
pub use lumen_syntax::symbols;

pub use config::{ColorMode, HighlightConfig, Theme};
pub use highlight::{Segment, render_ansi, segments};
pub use report::{CheckOutcome, CheckReport, ErrorLocation, SyntaxErrorReport, check, check_tokens};
