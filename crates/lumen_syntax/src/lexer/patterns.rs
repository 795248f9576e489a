//! The category catalogue: one compiled regex per [`TokenCategory`], in priority order.
//!
//! The catalogue is built once, on first use, and is read-only afterwards. Its order comes from
//! `lumen_core::lang::categories::CATEGORIES`; keyword and operator patterns are derived from the
//! `lumen_core` registries so the lexer and the parser agree on spellings.

use once_cell::sync::Lazy;
use regex::Regex;

use lumen_core::lang::categories::{self, TokenCategory};
use lumen_core::lang::{keywords, operators};

/// A category paired with the rule that recognizes it.
#[derive(Debug)]
pub struct CategoryPattern {
    pub category: TokenCategory,
    pub regex: Regex,
}

static CATALOGUE: Lazy<Vec<CategoryPattern>> = Lazy::new(build_catalogue);

/// Return the catalogue in priority order (first entry wins on an exact span tie).
pub fn catalogue() -> &'static [CategoryPattern] {
    &CATALOGUE
}

/// Regex source for a category.
///
/// ## Notes
/// - String literals run to the next occurrence of the *same* quote character on the same line.
/// - Keywords, numbers and identifiers are whole words under ASCII word rules (`(?-u:\b)`,
///   `(?-u:\w)`). A non-ASCII letter is never part of a word, so `éif` still yields keyword `if`.
pub fn pattern_source(category: TokenCategory) -> String {
    match category {
        TokenCategory::Keyword => {
            let words: Vec<String> = keywords::spellings().map(regex::escape).collect();
            format!(r"(?-u:\b)(?:{})(?-u:\b)", words.join("|"))
        }
        TokenCategory::Operator => format!("[{}]+", regex::escape(operators::OPERATOR_CHARS)),
        TokenCategory::Literal => {
            r#""[^"\r\n]*"|'[^'\r\n]*'|`[^`\r\n]*`|(?-u:\b)[0-9]+(?:\.[0-9]+)?(?-u:\b)"#.to_string()
        }
        TokenCategory::Bracket => r"[()\[\]{}]".to_string(),
        TokenCategory::Identifier => r"(?-u:\b)[a-zA-Z_](?-u:\w)*(?-u:\b)".to_string(),
    }
}

fn build_catalogue() -> Vec<CategoryPattern> {
    let catalogue: Vec<CategoryPattern> = categories::CATEGORIES
        .iter()
        .map(|info| {
            let source = pattern_source(info.id);
            let regex = Regex::new(&source).expect("INVARIANT: category patterns are constant and valid");
            CategoryPattern {
                category: info.id,
                regex,
            }
        })
        .collect();
    tracing::debug!(patterns = catalogue.len(), "built token category catalogue");
    catalogue
}
