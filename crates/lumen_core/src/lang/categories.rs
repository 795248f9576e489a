//! Token categories and their priority order.
//!
//! Every token the lexer emits belongs to exactly one [`TokenCategory`]. The tag strings returned
//! by [`as_str`] are the contract consumed by renderers for styling, so they must never change.
//!
//! ## Examples
//! ```rust
//! use lumen_core::lang::categories::{self, TokenCategory};
//!
//! assert_eq!(categories::as_str(TokenCategory::Bracket), "bracket");
//! assert_eq!(categories::from_str("identifier"), Some(TokenCategory::Identifier));
//! assert_eq!(categories::CATEGORIES[0].id, TokenCategory::Keyword);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of lexical categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Keyword,
    Operator,
    Literal,
    Bracket,
    Identifier,
}

/// Metadata for a category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub id: TokenCategory,
    /// Stable tag used by renderers (CSS class, theme key, JSON `type` field).
    pub tag: &'static str,
    /// Human-readable description for diagnostics and docs.
    pub description: &'static str,
}

/// Registry of all categories in lexer priority order.
///
/// ## Notes
/// - The order is semantically meaningful: on an exact span tie between two candidate matches,
///   the category listed first wins.
pub const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo {
        id: TokenCategory::Keyword,
        tag: "keyword",
        description: "reserved word",
    },
    CategoryInfo {
        id: TokenCategory::Operator,
        tag: "operator",
        description: "run of arithmetic, comparison or assignment symbols",
    },
    CategoryInfo {
        id: TokenCategory::Literal,
        tag: "literal",
        description: "quoted string or number",
    },
    CategoryInfo {
        id: TokenCategory::Bracket,
        tag: "bracket",
        description: "parenthesis, bracket or brace",
    },
    CategoryInfo {
        id: TokenCategory::Identifier,
        tag: "identifier",
        description: "name",
    },
];

/// Return the stable tag for a category.
pub fn as_str(id: TokenCategory) -> &'static str {
    info_for(id).tag
}

/// Lookup a category by its tag.
pub fn from_str(tag: &str) -> Option<TokenCategory> {
    CATEGORIES.iter().find(|c| c.tag == tag).map(|c| c.id)
}

/// Return the registry entry for a category.
pub fn info_for(id: TokenCategory) -> &'static CategoryInfo {
    // Every variant has exactly one entry; guarded by `lang_registry_guardrails`.
    match id {
        TokenCategory::Keyword => &CATEGORIES[0],
        TokenCategory::Operator => &CATEGORIES[1],
        TokenCategory::Literal => &CATEGORIES[2],
        TokenCategory::Bracket => &CATEGORIES[3],
        TokenCategory::Identifier => &CATEGORIES[4],
    }
}

impl TokenCategory {
    /// Return the stable tag for this category.
    pub fn as_str(self) -> &'static str {
        as_str(self)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order_matches_lexer_contract() {
        let order: Vec<_> = CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(
            order,
            vec![
                TokenCategory::Keyword,
                TokenCategory::Operator,
                TokenCategory::Literal,
                TokenCategory::Bracket,
                TokenCategory::Identifier,
            ]
        );
    }

    #[test]
    fn test_display_uses_tag() {
        assert_eq!(TokenCategory::Literal.to_string(), "literal");
    }
}
