//! Token types for the Lumen lexer.
//!
//! A [`Token`] is a classified slice of the source: its byte span, the matched text and its
//! [`TokenCategory`]. Gaps between tokens (whitespace, `;`, unknown characters) are not tokens.
//!
//! ## Notes
//! - Tokens serialize as `{"start", "end", "text", "type"}` so hosts can style them by tag.
//! - Use `crate::token_helpers` for ID-based matching (keywords, operators, brackets).

use serde::{Deserialize, Serialize};

use crate::span::Span;

pub use lumen_core::TokenCategory;

/// A classified span of source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    #[serde(flatten)]
    pub span: Span,
    pub text: String,
    #[serde(rename = "type")]
    pub category: TokenCategory,
}

impl Token {
    /// Construct a new token.
    pub fn new(category: TokenCategory, span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            text: text.into(),
            category,
        }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }
}
