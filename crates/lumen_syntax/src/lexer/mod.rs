//! Lexer for the Lumen toy language
//!
//! Tokenization happens in two passes:
//! - **Classification**: every category pattern is run over the whole text. The result is a flat
//!   multiset of candidate tokens that may overlap across categories (`if` is both a keyword and
//!   an identifier match).
//! - **Resolution**: candidates are reduced to an ascending, non-overlapping sequence
//!   (see [`resolve`]).
//!
//! Tokenizing never fails. Characters no pattern recognizes (whitespace, `;`, `#`, …) are left as
//! gaps between tokens, and renderers copy them through from the source.
//!
//! ## Module Structure
//!
//! - `tokens` - Token type
//! - `patterns` - The category catalogue (compiled regexes, priority order)
//! - `resolve` - Overlap resolution

pub mod patterns;
pub mod resolve;
pub mod tokens;

pub use resolve::resolve_overlaps;
pub use tokens::{Token, TokenCategory};

use crate::span::Span;
use patterns::CategoryPattern;

/// Lexer over one source buffer.
pub struct Lexer<'a> {
    source: &'a str,
    catalogue: &'static [CategoryPattern],
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            catalogue: patterns::catalogue(),
        }
    }

    /// Run every category pattern over the whole text and collect candidate tokens.
    ///
    /// ## Notes
    /// - Matches of one pattern never overlap each other; matches of different patterns may.
    /// - Empty matches are dropped. `find_iter` steps past an empty match, so the scan always
    ///   makes forward progress.
    pub fn classify(&self) -> Vec<Token> {
        let mut candidates = Vec::new();
        for pattern in self.catalogue {
            let before = candidates.len();
            for m in pattern.regex.find_iter(self.source) {
                if m.start() == m.end() {
                    continue;
                }
                candidates.push(Token::new(pattern.category, Span::new(m.start(), m.end()), m.as_str()));
            }
            tracing::trace!(
                category = %pattern.category,
                matches = candidates.len() - before,
                "classified category"
            );
        }
        candidates
    }

    /// Classify and resolve overlaps into the final token sequence.
    pub fn tokenize(self) -> Vec<Token> {
        resolve_overlaps(self.classify())
    }
}

/// Tokenize a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
///
/// ## Returns
/// - An ascending, non-overlapping token sequence whose spans all lie within `source`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
