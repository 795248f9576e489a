//! Define the reserved keyword vocabulary for Lumen.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) recording canonical spellings,
//! categories and how the grammar uses each word.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Some words are reserved without any grammar rule (`for`, `while`, `const`, `var`, `class`).
//!   They still classify as keywords, and the parser rejects them as unknown statement keywords.
//!
//! ## Examples
//! ```rust
//! use lumen_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("variable"), Some(KeywordId::Variable));
//! assert_eq!(keywords::from_str("Variable"), None);
//! assert_eq!(keywords::as_str(KeywordId::Function), "function");
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow
    If,
    Else,
    Return,

    // Loops (reserved)
    For,
    While,

    // Declarations
    Let,
    Variable,
    Function,
    Const,
    Var,
    Class,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Loop,
    Declaration,
}

/// How the grammar uses a keyword.
///
/// ## Notes
/// - `Statement` keywords may start a statement.
/// - `Declarator` keywords may only follow `let`.
/// - `Clause` keywords continue a statement (`else`).
/// - `Reserved` keywords have no grammar rule yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordUsage {
    Statement,
    Declarator,
    Clause,
    Reserved,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub usage: KeywordUsage,
}

/// Registry of all keywords.
///
/// ## Notes
/// - Ordering is not semantically meaningful; it is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::If, "if", KeywordCategory::ControlFlow, KeywordUsage::Statement),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow, KeywordUsage::Clause),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow, KeywordUsage::Statement),
    info(KeywordId::For, "for", KeywordCategory::Loop, KeywordUsage::Reserved),
    info(KeywordId::While, "while", KeywordCategory::Loop, KeywordUsage::Reserved),
    info(KeywordId::Let, "let", KeywordCategory::Declaration, KeywordUsage::Statement),
    info(KeywordId::Variable, "variable", KeywordCategory::Declaration, KeywordUsage::Declarator),
    info(KeywordId::Function, "function", KeywordCategory::Declaration, KeywordUsage::Declarator),
    info(KeywordId::Const, "const", KeywordCategory::Declaration, KeywordUsage::Reserved),
    info(KeywordId::Var, "var", KeywordCategory::Declaration, KeywordUsage::Reserved),
    info(KeywordId::Class, "class", KeywordCategory::Declaration, KeywordUsage::Reserved),
];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the registry entry for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (a bug caught by the registry guardrail tests).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a KEYWORDS entry")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is a reserved word.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Iterate over every canonical spelling, in registry order.
pub fn spellings() -> impl Iterator<Item = &'static str> {
    KEYWORDS.iter().map(|k| k.canonical)
}

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory, usage: KeywordUsage) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        usage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_keywords() {
        let statements: Vec<_> = KEYWORDS
            .iter()
            .filter(|k| k.usage == KeywordUsage::Statement)
            .map(|k| k.canonical)
            .collect();
        assert_eq!(statements, vec!["if", "return", "let"]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("LET"), None);
        assert_eq!(from_str("let"), Some(KeywordId::Let));
    }
}
