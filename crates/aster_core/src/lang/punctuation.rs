//! Canonical punctuation vocabulary.
//!
//! A lexicon configures five punctuation roles. This module names them ([`PunctuationRole`]) and records the
//! ASCII spelling the canonical IR uses for each.
//!
//! ## Examples
//! ```rust
//! use aster_core::lang::punctuation::{self, PunctuationRole};
//!
//! assert_eq!(punctuation::as_str(PunctuationRole::BlockStart), ":");
//! assert_eq!(punctuation::field_name(PunctuationRole::StatementEnd), "statementEnd");
//! ```

/// Stable identifier for a configurable punctuation role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationRole {
    StatementEnd,
    ListSeparator,
    BlockStart,
    StringQuoteOpen,
    StringQuoteClose,
}

/// Metadata for a punctuation role.
///
/// ## Notes
/// - `field` is the key used by the lexicon resource's `punctuation` object.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub role: PunctuationRole,
    pub field: &'static str,
    pub canonical: &'static str,
}

/// Registry of all punctuation roles.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationRole::StatementEnd, "statementEnd", "."),
    info(PunctuationRole::ListSeparator, "listSeparator", ","),
    info(PunctuationRole::BlockStart, "blockStart", ":"),
    info(PunctuationRole::StringQuoteOpen, "stringQuoteOpen", "\""),
    info(PunctuationRole::StringQuoteClose, "stringQuoteClose", "\""),
];

/// Canonical IR spelling of `role`.
pub fn as_str(role: PunctuationRole) -> &'static str {
    info_for(role).canonical
}

/// Resource field name of `role`.
pub fn field_name(role: PunctuationRole) -> &'static str {
    info_for(role).field
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `role` (this indicates a programming error).
pub fn info_for(role: PunctuationRole) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.role == role)
        .expect("INVARIANT: punctuation info missing")
}

const fn info(role: PunctuationRole, field: &'static str, canonical: &'static str) -> PunctuationInfo {
    PunctuationInfo { role, field, canonical }
}
