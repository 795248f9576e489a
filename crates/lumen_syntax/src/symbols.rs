//! Symbol table for one parse.
//!
//! The table is flat: there are no scopes, and a name declared inside a function or `if` body
//! stays visible for the rest of the parse. Redeclaring a name is not an error. Only membership
//! is tracked.

use std::collections::BTreeSet;

/// Set of identifier names declared so far in the current parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    names: BTreeSet<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` as declared. Idempotent.
    pub fn declare(&mut self, name: &str) {
        if !self.names.contains(name) {
            tracing::trace!(name, "declared symbol");
            self.names.insert(name.to_string());
        }
    }

    /// Return `true` if `name` has been declared.
    pub fn is_declared(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Declared names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
