//! Bracket vocabulary.
//!
//! Brackets are always single characters. The grammar uses parentheses for grouping and
//! conditions, braces for bodies; square brackets are lexed but have no grammar rule.

/// Stable identifier for bracket characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketId {
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

/// Metadata for a bracket.
#[derive(Debug, Clone, Copy)]
pub struct BracketInfo {
    pub id: BracketId,
    pub canonical: &'static str,
    /// The matching bracket on the other side of the pair.
    pub partner: BracketId,
    pub opening: bool,
}

/// Registry of all brackets.
pub const BRACKETS: &[BracketInfo] = &[
    info(BracketId::LParen, "(", BracketId::RParen, true),
    info(BracketId::RParen, ")", BracketId::LParen, false),
    info(BracketId::LBracket, "[", BracketId::RBracket, true),
    info(BracketId::RBracket, "]", BracketId::LBracket, false),
    info(BracketId::LBrace, "{", BracketId::RBrace, true),
    info(BracketId::RBrace, "}", BracketId::LBrace, false),
];

/// Return the canonical spelling for a bracket.
pub fn as_str(id: BracketId) -> &'static str {
    info_for(id).canonical
}

/// Return the registry entry for a bracket.
pub fn info_for(id: BracketId) -> &'static BracketInfo {
    BRACKETS
        .iter()
        .find(|b| b.id == id)
        .expect("INVARIANT: every BracketId has a BRACKETS entry")
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<BracketId> {
    BRACKETS.iter().find(|b| b.canonical == s).map(|b| b.id)
}

/// Return the partner of a bracket (`(` ↔ `)`).
pub fn partner(id: BracketId) -> BracketId {
    info_for(id).partner
}

const fn info(id: BracketId, canonical: &'static str, partner: BracketId, opening: bool) -> BracketInfo {
    BracketInfo {
        id,
        canonical,
        partner,
        opening,
    }
}
