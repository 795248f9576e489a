//! Small helper APIs for working with `Token` by registry ID.
//!
//! Tokens store their category and raw text. These helpers resolve the text against the
//! `lumen_core` registries so call sites can match on `KeywordId` / `OperatorId` / `BracketId`
//! instead of comparing strings.

use crate::lexer::{Token, TokenCategory};
use lumen_core::lang::brackets::{self, BracketId};
use lumen_core::lang::keywords::{self, KeywordId};
use lumen_core::lang::operators::{self, OperatorId};

impl Token {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self.category {
            TokenCategory::Keyword => keywords::from_str(&self.text),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.keyword_id() == Some(id)
    }

    /// Return the operator id, if this is an operator token with a known spelling.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self.category {
            TokenCategory::Operator => operators::from_str(&self.text),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        self.operator_id() == Some(id)
    }

    /// Return the bracket id, if this is a bracket token.
    pub fn bracket_id(&self) -> Option<BracketId> {
        match self.category {
            TokenCategory::Bracket => brackets::from_str(&self.text),
            _ => None,
        }
    }

    /// Return `true` if this is the given bracket.
    pub fn is_bracket(&self, id: BracketId) -> bool {
        self.bracket_id() == Some(id)
    }

    /// Return `true` if this token can start a `factor`.
    pub fn starts_factor(&self) -> bool {
        matches!(self.category, TokenCategory::Literal | TokenCategory::Identifier) || self.is_bracket(BracketId::LParen)
    }
}
