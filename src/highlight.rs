//! Source highlighting.
//!
//! A token sequence covers only part of the text; everything between tokens (whitespace, `;`,
//! unknown characters) is a gap. [`segments`] walks the source once and yields gaps and tokens in
//! order, marking the token a syntax error points at. Renderers style the segments and copy gaps
//! through unchanged.

use lumen_syntax::lexer::Token;
use lumen_syntax::span::Span;

use crate::config::HighlightConfig;

/// A slice of the source, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text between tokens
    Gap(&'a str),
    Token(&'a Token),
    /// The token whose span equals the error span
    Error(&'a Token),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Segment::Gap(text) => text,
            Segment::Token(token) | Segment::Error(token) => &token.text,
        }
    }
}

/// Split `source` into gap and token segments.
///
/// ## Notes
/// - A token is marked [`Segment::Error`] iff its span equals `error_span` exactly.
/// - Tokens that do not fit the source (out of range, out of order, or with text that differs from
///   the source slice) are skipped and their text is emitted as a gap, so the segment texts always
///   concatenate back to `source`.
pub fn segments<'a>(source: &'a str, tokens: &'a [Token], error_span: Option<Span>) -> Vec<Segment<'a>> {
    let mut out = Vec::with_capacity(tokens.len() * 2 + 1);
    let mut cursor = 0;

    for token in tokens {
        let Span { start, end } = token.span;
        if start < cursor || source.get(start..end) != Some(token.text.as_str()) {
            tracing::debug!(start, end, cursor, "skipping token that does not fit the source");
            continue;
        }
        if start > cursor {
            out.push(Segment::Gap(&source[cursor..start]));
        }
        if error_span == Some(token.span) {
            out.push(Segment::Error(token));
        } else {
            out.push(Segment::Token(token));
        }
        cursor = end;
    }

    if cursor < source.len() {
        out.push(Segment::Gap(&source[cursor..]));
    }
    out
}

/// Render `source` with each token wrapped in its category's ANSI style.
///
/// Returns the source unchanged when `config` resolves to no color.
pub fn render_ansi(source: &str, tokens: &[Token], error_span: Option<Span>, config: &HighlightConfig) -> String {
    if !config.use_color() {
        return source.to_string();
    }

    let theme = &config.theme;
    let mut out = String::with_capacity(source.len() * 2);
    for segment in segments(source, tokens, error_span) {
        match segment {
            Segment::Gap(text) => out.push_str(text),
            Segment::Token(token) => theme.style_for(token.category).paint_into(&mut out, &token.text),
            Segment::Error(token) => theme.error.paint_into(&mut out, &token.text),
        }
    }
    out
}
