//! Operator vocabulary.
//!
//! The lexer treats any maximal run of [`OPERATOR_CHARS`] as one operator token, so a run like
//! `=-` is a single token that matches no entry here. The parser only accepts spellings that
//! resolve to an [`OperatorId`].
//!
//! ## Examples
//! ```rust
//! use lumen_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("=="), Some(OperatorId::EqEq));
//! assert_eq!(operators::from_str("=-"), None);
//! assert_eq!(operators::precedence(OperatorId::Star), Some(2));
//! ```

/// Every character that may appear in an operator run.
pub const OPERATOR_CHARS: &str = "+-*/=<>!";

/// Stable identifier for every operator spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Assignment / unary
    Eq,
    Not,

    // Statement terminator (only in hand-built token sequences; `;` is never lexed)
    Semicolon,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub canonical: &'static str,
    /// Binary precedence in the expression grammar (higher binds tighter), if the grammar uses it.
    pub precedence: Option<u8>,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    info(OperatorId::Plus, "+", Some(1)),
    info(OperatorId::Minus, "-", Some(1)),
    info(OperatorId::Star, "*", Some(2)),
    info(OperatorId::Slash, "/", Some(2)),
    info(OperatorId::EqEq, "==", None),
    info(OperatorId::NotEq, "!=", None),
    info(OperatorId::Lt, "<", None),
    info(OperatorId::LtEq, "<=", None),
    info(OperatorId::Gt, ">", None),
    info(OperatorId::GtEq, ">=", None),
    info(OperatorId::Eq, "=", None),
    info(OperatorId::Not, "!", None),
    info(OperatorId::Semicolon, ";", None),
];

/// Return the canonical spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical
}

/// Return the registry entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id`.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: every OperatorId has an OPERATORS entry")
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.canonical == s).map(|o| o.id)
}

/// Binary precedence of an operator, if the expression grammar uses it.
pub fn precedence(id: OperatorId) -> Option<u8> {
    info_for(id).precedence
}

/// Return `true` if `c` can appear in an operator run.
pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(c)
}

const fn info(id: OperatorId, canonical: &'static str, precedence: Option<u8>) -> OperatorInfo {
    OperatorInfo {
        id,
        canonical,
        precedence,
    }
}
