use std::collections::HashMap;

use lumen_core::lang::brackets;
use lumen_core::lang::categories;
use lumen_core::lang::keywords;
use lumen_core::lang::operators;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(keywords::as_str(info.id), info.canonical);

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate keyword spelling {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
    }
}

#[test]
fn keywords_are_plain_words() {
    for spelling in keywords::spellings() {
        assert!(
            spelling.chars().all(|c| c.is_ascii_lowercase()),
            "keyword {spelling:?} must be a lowercase ASCII word so it can be matched with word boundaries"
        );
    }
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(operators::from_str(info.canonical), Some(info.id));
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate operator spelling {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
    }
}

#[test]
fn lexable_operators_only_use_operator_chars() {
    for info in operators::OPERATORS {
        if info.id == operators::OperatorId::Semicolon {
            continue;
        }
        assert!(
            info.canonical.chars().all(operators::is_operator_char),
            "operator {:?} could never be produced by the lexer",
            info.canonical
        );
    }
}

#[test]
fn brackets_pair_up() {
    for info in brackets::BRACKETS {
        assert_eq!(info.canonical.chars().count(), 1);
        let partner = brackets::info_for(info.partner);
        assert_eq!(partner.partner, info.id, "bracket {:?} partner is not symmetric", info.canonical);
        assert_ne!(partner.opening, info.opening);
    }
}

#[test]
fn categories_tags_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, categories::TokenCategory> = HashMap::new();

    for info in categories::CATEGORIES {
        assert_eq!(categories::from_str(info.tag), Some(info.id));
        assert_eq!(categories::as_str(info.id), info.tag);
        assert!(seen.insert(info.tag, info.id).is_none(), "duplicate category tag {:?}", info.tag);
    }
    assert_eq!(seen.len(), 5);
}
