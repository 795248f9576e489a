//! Parse errors for Lumen.
//!
//! The parser stops at the first grammar violation and returns one [`ParseError`]. Every error is
//! either anchored to the offending token or marks the end of input (`token == None`), so a host
//! can always highlight something.
//!
//! Errors integrate with [`miette`] for rendering: the token span is the primary label, and a
//! short hint is attached where one helps.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use std::fmt;

use miette::{Diagnostic, SourceSpan};
use serde::Serialize;
use thiserror::Error;

use crate::lexer::{Token, TokenCategory};
use crate::span::Span;

const STATEMENT_HINT: &str = "statements start with 'let', 'if', 'return' or a declared variable name";

/// The kind of grammar violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    /// The current token has the wrong category or text.
    ExpectedToken,
    /// The token sequence ended while a rule still needed input.
    UnexpectedEof,
    /// A statement starts with a keyword that has no statement rule.
    UnknownKeyword,
    /// A statement starts with a token that is neither a keyword nor an identifier.
    UnexpectedToken,
    /// `let` is followed by something other than `variable` or `function`.
    ExpectedDeclarator,
    /// An assignment targets a name that was never declared.
    UndeclaredVariable,
    /// A factor is not a literal, an identifier or a parenthesized expression.
    InvalidExpression,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParseErrorKind::ExpectedToken => "expected token",
            ParseErrorKind::UnexpectedEof => "unexpected end of input",
            ParseErrorKind::UnknownKeyword => "unknown keyword",
            ParseErrorKind::UnexpectedToken => "unexpected token",
            ParseErrorKind::ExpectedDeclarator => "expected declarator",
            ParseErrorKind::UndeclaredVariable => "undeclared variable",
            ParseErrorKind::InvalidExpression => "invalid expression",
        };
        f.write_str(s)
    }
}

/// What `consume` was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expectation {
    pub category: TokenCategory,
    pub text: Option<&'static str>,
}

impl Expectation {
    pub fn new(category: TokenCategory, text: Option<&'static str>) -> Self {
        Self { category, text }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text {
            Some(text) => write!(f, "{} '{}'", self.category, text),
            None => write!(f, "{}", self.category),
        }
    }
}

/// A grammar violation, anchored to a token or to the end of input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(lumen::syntax))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    /// The offending token; `None` only for end-of-input errors.
    pub token: Option<Token>,
    #[label("here")]
    label: Option<SourceSpan>,
    #[help]
    pub hint: Option<String>,
}

impl ParseError {
    fn new(kind: ParseErrorKind, message: String, token: Option<&Token>) -> Self {
        Self {
            kind,
            message,
            label: token.map(|t| t.span.into()),
            token: token.cloned(),
            hint: None,
        }
    }

    /// Attach a hint rendered under the diagnostic.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Point an end-of-input error at `offset` (usually the source length) for rendering.
    ///
    /// Token-anchored errors are returned unchanged.
    pub fn with_end_of_input(mut self, offset: usize) -> Self {
        if self.token.is_none() {
            self.label = Some(Span::point(offset).into());
        }
        self
    }

    /// Span of the offending token, if any.
    pub fn span(&self) -> Option<Span> {
        self.token.as_ref().map(|t| t.span)
    }

    pub fn is_end_of_input(&self) -> bool {
        self.token.is_none()
    }

    // ========================================================================
    // Constructors
    // ========================================================================

    /// `found` does not match the expected category or text.
    pub fn expected(expected: Expectation, found: &Token) -> Self {
        let message = if found.category != expected.category {
            format!("Expected {}, found {} '{}'", expected.category, found.category, found.text)
        } else {
            format!("Expected '{}', found '{}'", expected.text.unwrap_or_default(), found.text)
        };
        Self::new(ParseErrorKind::ExpectedToken, message, Some(found))
    }

    /// The token sequence ended while `what` was still required.
    pub fn unexpected_eof(what: impl fmt::Display) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof,
            format!("Expected {what}, but reached end of input"),
            None,
        )
    }

    pub fn unknown_keyword(token: &Token) -> Self {
        Self::new(
            ParseErrorKind::UnknownKeyword,
            format!("Unknown keyword '{}'", token.text),
            Some(token),
        )
        .with_hint(STATEMENT_HINT)
    }

    pub fn unexpected_token(token: &Token) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken,
            format!("Unexpected token '{}'", token.text),
            Some(token),
        )
        .with_hint(STATEMENT_HINT)
    }

    pub fn expected_declarator(token: &Token) -> Self {
        Self::new(
            ParseErrorKind::ExpectedDeclarator,
            format!("Expected 'variable' or 'function' after 'let', found '{}'", token.text),
            Some(token),
        )
    }

    pub fn undeclared_variable(token: &Token) -> Self {
        Self::new(
            ParseErrorKind::UndeclaredVariable,
            format!("Variable '{}' is not declared", token.text),
            Some(token),
        )
        .with_hint(format!("declare it first with `let variable {}`", token.text))
    }

    pub fn invalid_expression(token: &Token) -> Self {
        Self::new(
            ParseErrorKind::InvalidExpression,
            format!("Invalid expression: unexpected '{}'", token.text),
            Some(token),
        )
        .with_hint("an expression operand is a literal, a name or a parenthesized expression")
    }
}
