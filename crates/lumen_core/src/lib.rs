//! Provide the canonical language vocabulary for Lumen: token categories, reserved keywords,
//! operator spellings and bracket characters.
//!
//! This crate is intentionally small and dependency-light. Both the syntax frontend and any host
//! (CLI, editor integrations) read category tags and spellings from here instead of repeating
//! string literals.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global mutable state, no parser types.
//! - The category priority order defined in [`lang::categories::CATEGORIES`] is part of the lexer
//!   contract: the first category listed wins when two candidate matches have the same span.

pub mod lang;

pub use lang::categories::TokenCategory;
