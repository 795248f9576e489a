//! Overlap resolution: reduce candidate matches to a non-overlapping token sequence.
//!
//! Candidates are ordered by ascending start, longer match first on a shared start. The sort is
//! stable, so an exact span tie keeps catalogue order and the higher-priority category wins. A
//! greedy left-to-right scan then keeps a candidate only if it starts at or after the end of the
//! last kept token. This is leftmost-longest interval selection without backtracking.

use super::tokens::Token;

/// Reduce possibly-overlapping candidates to an ascending, non-overlapping sequence.
///
/// ## Parameters
/// - `candidates`: classifier output, in catalogue priority order per category.
///
/// ## Returns
/// - Tokens sorted by start with `next.start >= prev.end` for every adjacent pair.
pub fn resolve_overlaps(mut candidates: Vec<Token>) -> Vec<Token> {
    candidates.sort_by(|a, b| a.start().cmp(&b.start()).then_with(|| b.end().cmp(&a.end())));

    let mut kept: Vec<Token> = Vec::with_capacity(candidates.len());
    let mut last_end = 0;
    let mut discarded = 0usize;
    for token in candidates {
        if token.start() >= last_end {
            last_end = token.end();
            kept.push(token);
        } else {
            tracing::trace!(
                start = token.start(),
                end = token.end(),
                category = %token.category,
                "discarding overlapped candidate"
            );
            discarded += 1;
        }
    }
    tracing::debug!(kept = kept.len(), discarded, "resolved token overlaps");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenCategory;
    use crate::span::Span;

    fn tok(category: TokenCategory, start: usize, end: usize, text: &str) -> Token {
        Token::new(category, Span::new(start, end), text)
    }

    #[test]
    fn test_exact_tie_keeps_first_candidate() {
        let out = resolve_overlaps(vec![
            tok(TokenCategory::Keyword, 0, 3, "let"),
            tok(TokenCategory::Identifier, 0, 3, "let"),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].category, TokenCategory::Keyword);
    }

    #[test]
    fn test_longer_match_wins_on_shared_start() {
        let out = resolve_overlaps(vec![
            tok(TokenCategory::Operator, 0, 1, "="),
            tok(TokenCategory::Operator, 0, 2, "=="),
        ]);
        assert_eq!(out, vec![tok(TokenCategory::Operator, 0, 2, "==")]);
    }

    #[test]
    fn test_leftmost_wins_over_longer_later_match() {
        // "ab" at 0..2 beats "bcd" at 1..4 even though it is shorter.
        let out = resolve_overlaps(vec![
            tok(TokenCategory::Identifier, 1, 4, "bcd"),
            tok(TokenCategory::Identifier, 0, 2, "ab"),
            tok(TokenCategory::Identifier, 4, 5, "e"),
        ]);
        let spans: Vec<_> = out.iter().map(|t| (t.start(), t.end())).collect();
        assert_eq!(spans, vec![(0, 2), (4, 5)]);
    }

    #[test]
    fn test_adjacent_tokens_are_both_kept() {
        let out = resolve_overlaps(vec![
            tok(TokenCategory::Bracket, 1, 2, ")"),
            tok(TokenCategory::Bracket, 0, 1, "("),
        ]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].text, "(");
    }

    #[test]
    fn test_empty_input() {
        assert!(resolve_overlaps(Vec::new()).is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn candidate() -> impl Strategy<Value = Token> {
            (0usize..40, 1usize..8).prop_map(|(start, len)| tok(TokenCategory::Identifier, start, start + len, "x"))
        }

        proptest! {
            #[test]
            fn resolved_tokens_are_ascending_and_disjoint(candidates in prop::collection::vec(candidate(), 0..30)) {
                let out = resolve_overlaps(candidates);
                for pair in out.windows(2) {
                    prop_assert!(pair[0].end() <= pair[1].start());
                }
            }

            #[test]
            fn leftmost_candidate_always_survives(candidates in prop::collection::vec(candidate(), 1..30)) {
                let first = candidates.iter().map(Token::start).min();
                let out = resolve_overlaps(candidates);
                prop_assert_eq!(out.first().map(Token::start), first);
            }
        }
    }
}
