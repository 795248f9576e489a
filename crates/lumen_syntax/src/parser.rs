//! Recursive-descent parser for the Lumen toy language
//!
//! Consumes a token sequence produced by `lumen_syntax::lexer` against a fixed grammar:
//!
//! ```text
//! program      := statement*
//! statement    := declaration | ifStatement | returnStatement | assignment
//! declaration  := 'let' ( variableDecl | functionDecl )
//! variableDecl := 'variable' IDENT ('=' expression)? ';'?
//! functionDecl := 'function' IDENT '(' ')' ( '{' statement* '}' )?
//! ifStatement  := 'if' '(' expression ')' '{' statement* '}' ('else' '{' statement* '}')?
//! returnStatement := 'return' expression ';'?
//! assignment   := IDENT '=' expression ';'?
//! expression   := term (('+'|'-') term)*
//! term         := factor (('*'|'/') factor)*
//! factor       := LITERAL | IDENT | '(' expression ')'
//! ```
//!
//! The parser accepts or rejects; it builds no tree. It stops at the first error.
//!
//! ## Examples
//!
//! ```rust
//! use lumen_syntax::{lexer, parser, ParseErrorKind};
//!
//! let tokens = lexer::tokenize("y = 1;");
//! let err = parser::parse(&tokens).unwrap_err();
//! assert_eq!(err.kind, ParseErrorKind::UndeclaredVariable);
//! assert_eq!(err.token.map(|t| t.text), Some("y".to_string()));
//! ```

use crate::diagnostics::{Expectation, ParseError};
use crate::lexer::{Token, TokenCategory};
use crate::symbols::SymbolTable;
use lumen_core::lang::brackets::{self, BracketId};
use lumen_core::lang::keywords::{self, KeywordId};
use lumen_core::lang::operators::{self, OperatorId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while keeping
// each grammar area in its own file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
