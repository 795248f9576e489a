//! Property-based tests for the Lumen tokenizer, parser and highlighter
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use lumen::highlight::{Segment, segments};
use lumen::report::{self, CheckOutcome};
use lumen_syntax::diagnostics::ParseErrorKind;
use lumen_syntax::lexer::tokenize;
use lumen_syntax::parser::parse;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Source-like text: vocabulary fragments, punctuation and whitespace glued together.
fn source_strategy() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("let ".to_string()),
        Just("variable ".to_string()),
        Just("function ".to_string()),
        Just("if".to_string()),
        Just("else".to_string()),
        Just("return ".to_string()),
        Just("= ".to_string()),
        Just("==".to_string()),
        Just("+".to_string()),
        Just("*".to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        Just(";".to_string()),
        Just("\"".to_string()),
        Just("'".to_string()),
        Just("\n".to_string()),
        "[a-z_][a-z0-9_]{0,6}",
        "[0-9]{1,3}(\\.[0-9]{1,2})?",
        "[ \t]{1,3}",
    ];
    prop::collection::vec(fragment, 0..40).prop_map(|parts| parts.concat())
}

fn operand_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("1".to_string()), Just("'s'".to_string()), Just("2.5".to_string())]
}

/// Programs the grammar accepts: declarations followed by assignments to declared names.
fn valid_program_strategy() -> impl Strategy<Value = String> {
    let name = "[a-z][a-z0-9]{0,5}".prop_filter("not a keyword", |n| {
        lumen_core::lang::keywords::from_str(n).is_none()
    });
    (prop::collection::vec((name, operand_strategy()), 1..6), prop::collection::vec(operand_strategy(), 1..4)).prop_map(
        |(decls, operands)| {
            let mut out = String::new();
            for (name, value) in &decls {
                out.push_str(&format!("let variable {name} = {value};\n"));
            }
            let (target, _) = &decls[0];
            out.push_str(&format!("{target} = ({target} + {})", operands.join(" * ")));
            out
        },
    )
}

// =============================================================================
// Tokenizer Properties
// =============================================================================

proptest! {
    /// Property: tokenizing never panics, on any input
    #[test]
    fn tokenize_is_total(source in any::<String>()) {
        let _ = tokenize(&source);
    }

    /// Property: every token lies within the source and carries its slice
    #[test]
    fn tokens_are_in_bounds(source in source_strategy()) {
        for tok in tokenize(&source) {
            prop_assert!(tok.start() < tok.end());
            prop_assert!(tok.end() <= source.len());
            prop_assert_eq!(&source[tok.start()..tok.end()], tok.text.as_str());
        }
    }

    /// Property: tokens are ascending and never overlap
    #[test]
    fn tokens_are_ordered_and_disjoint(source in source_strategy()) {
        let tokens = tokenize(&source);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].start());
        }
    }

    /// Property: tokens plus gaps reproduce the source
    #[test]
    fn segments_round_trip(source in source_strategy()) {
        let tokens = tokenize(&source);
        let joined: String = segments(&source, &tokens, None).iter().map(Segment::text).collect();
        prop_assert_eq!(joined, source);
    }
}

// =============================================================================
// Parser Properties
// =============================================================================

proptest! {
    /// Property: parsing terminates and gives the same answer twice
    #[test]
    fn parse_is_idempotent(source in source_strategy()) {
        let tokens = tokenize(&source);
        prop_assert_eq!(parse(&tokens), parse(&tokens));
    }

    /// Property: every error is token-anchored or end-of-input
    #[test]
    fn errors_are_anchored(source in source_strategy()) {
        let tokens = tokenize(&source);
        if let Err(err) = parse(&tokens) {
            match &err.token {
                Some(tok) => {
                    prop_assert!(tokens.contains(tok));
                }
                None => {
                    prop_assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);
                }
            }
        }
    }

    /// Property: declared-then-assigned programs check clean
    #[test]
    fn generated_programs_check_clean(source in valid_program_strategy()) {
        prop_assert_eq!(report::check(&source).outcome, CheckOutcome::Clean);
    }

    /// Property: assigning an undeclared name is always rejected at that name
    #[test]
    fn undeclared_assignment_is_rejected(source in valid_program_strategy()) {
        let source = format!("{source}\nzz9undeclared = 1");
        let outcome = report::check(&source).outcome;
        let CheckOutcome::SyntaxError(err) = outcome else {
            return Err(TestCaseError::fail("expected a syntax error"));
        };
        prop_assert_eq!(err.kind, ParseErrorKind::UndeclaredVariable);
        let span = err.location.span().expect("anchored");
        prop_assert_eq!(&source[span.start..span.end], "zz9undeclared");
    }

    /// Property: at most one segment is marked as the error
    #[test]
    fn at_most_one_error_segment(source in source_strategy()) {
        let report = report::check(&source);
        let marked = segments(&source, &report.tokens, report.outcome.error_span())
            .iter()
            .filter(|s| matches!(s, Segment::Error(_)))
            .count();
        prop_assert!(marked <= 1);
        if report.outcome.error_span().is_some() {
            prop_assert_eq!(marked, 1);
        }
    }
}
