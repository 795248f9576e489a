//! Lumen language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: token categories, reserved
//! keywords, operators and brackets.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings via
//! the registry tables, so the grammar can switch over closed enums instead of comparing strings.
//!
//! ## Notes
//! - Registries are **pure**: no token types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use
//!   (highlighting, diagnostics, regex construction).
//!
//! ## Examples
//! ```rust
//! use lumen_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("let"), Some(KeywordId::Let));
//! assert_eq!(keywords::as_str(KeywordId::Let), "let");
//! ```

pub mod brackets;
pub mod categories;
pub mod keywords;
pub mod operators;
