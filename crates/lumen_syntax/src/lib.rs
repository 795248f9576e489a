//! Shared syntax frontend for the Lumen toy language: tokenizer, overlap resolver, symbol table,
//! recursive-descent parser and parse diagnostics.
//!
//! A host editor calls [`lexer::tokenize`] and [`parser::parse`] on the whole buffer after every
//! change. Both are pure: nothing is cached or shared between calls apart from the immutable
//! category catalogue.
//!
//! ## Notes
//! - This crate is “syntax-only”: there is no evaluator and no type checking. The only semantic
//!   check is whether an assigned identifier was declared earlier in the same parse.
//! - Vocabulary identity (categories, keywords, operators, brackets) comes from
//!   `lumen_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use lumen_syntax::{lexer, parser};
//!
//! let tokens = lexer::tokenize("let variable x = 1; x = x + 2;");
//! assert!(parser::parse(&tokens).is_ok());
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod symbols;
pub mod token_helpers;

pub use diagnostics::{ParseError, ParseErrorKind};
pub use lexer::{Token, TokenCategory, tokenize};
pub use parser::parse;
pub use span::Span;
pub use symbols::SymbolTable;
