//! Define the canonical keyword vocabulary of the Aster IR.
//!
//! This module is the single source of truth for token kinds: a stable identifier ([`TokenKind`]) plus a const
//! metadata table ([`KEYWORDS`]) that records the resource key used by lexicon files, the canonical English
//! spelling emitted by the canonicalizer, and a category.
//!
//! ## Notes
//! - Lookup via [`from_str`] (canonical spelling) and [`from_key`] (resource key) is **case-sensitive**.
//! - Declaration order of [`KEYWORDS`] is semantically meaningful: when two token kinds of one lexicon share a
//!   surface spelling, the kind declared first wins during keyword substitution.
//! - Some canonical spellings contain a space (`For each`, `Wait for`). They are still single keywords.
//!
//! ## Examples
//! ```rust
//! use aster_core::lang::keywords::{self, TokenKind};
//!
//! assert_eq!(keywords::from_key("RULE_DEF"), Some(TokenKind::RuleDef));
//! assert_eq!(keywords::as_str(TokenKind::ForEach), "For each");
//! ```

use super::registry::{Since, Stability};

/// Stable identifier for every canonical keyword.
///
/// ## Notes
/// - The canonical spelling is accessible via [`as_str`].
/// - The lexicon resource key (`"MODULE_DECL"`, ...) is accessible via [`key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    // Declarations
    ModuleDecl,
    Import,
    As,
    RuleDef,
    Given,
    Produce,
    TypeDef,
    With,

    // Control flow
    If,
    Otherwise,
    Match,
    When,
    Return,

    // Bindings / iteration
    Let,
    Be,
    ForEach,
    In,

    // Literals
    True,
    False,
    Null,

    // Word operators
    And,
    Or,
    Not,

    // Workflow
    Start,
    WaitFor,
}

impl TokenKind {
    /// Position of this kind in [`KEYWORDS`].
    ///
    /// ## Notes
    /// - [`KEYWORDS`] lists every kind exactly once in enum order; the guardrail tests check this.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(key(*self))
    }
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    ControlFlow,
    Binding,
    Literal,
    Operator,
    Workflow,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `key` is the spelling used in lexicon resources (`keywords` table keys).
/// - `canonical` is the IR spelling the canonicalizer emits.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub kind: TokenKind,
    pub key: &'static str,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all keywords, in [`TokenKind`] declaration order.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(TokenKind::ModuleDecl, "MODULE_DECL", "Module", KeywordCategory::Declaration),
    info(TokenKind::Import, "IMPORT", "Use", KeywordCategory::Declaration),
    info(TokenKind::As, "AS", "as", KeywordCategory::Declaration),
    info(TokenKind::RuleDef, "RULE_DEF", "Rule", KeywordCategory::Declaration),
    info(TokenKind::Given, "GIVEN", "given", KeywordCategory::Declaration),
    info(TokenKind::Produce, "PRODUCE", "produce", KeywordCategory::Declaration),
    info(TokenKind::TypeDef, "TYPE_DEF", "Define", KeywordCategory::Declaration),
    info(TokenKind::With, "WITH", "with", KeywordCategory::Declaration),
    // Control flow
    info(TokenKind::If, "IF", "If", KeywordCategory::ControlFlow),
    info(TokenKind::Otherwise, "OTHERWISE", "Otherwise", KeywordCategory::ControlFlow),
    info(TokenKind::Match, "MATCH", "Match", KeywordCategory::ControlFlow),
    info(TokenKind::When, "WHEN", "When", KeywordCategory::ControlFlow),
    info(TokenKind::Return, "RETURN", "Return", KeywordCategory::ControlFlow),
    // Bindings / iteration
    info(TokenKind::Let, "LET", "Let", KeywordCategory::Binding),
    info(TokenKind::Be, "BE", "be", KeywordCategory::Binding),
    info(TokenKind::ForEach, "FOR_EACH", "For each", KeywordCategory::Binding),
    info(TokenKind::In, "IN", "in", KeywordCategory::Binding),
    // Literals
    info(TokenKind::True, "TRUE", "true", KeywordCategory::Literal),
    info(TokenKind::False, "FALSE", "false", KeywordCategory::Literal),
    info(TokenKind::Null, "NULL", "null", KeywordCategory::Literal),
    // Word operators
    info(TokenKind::And, "AND", "and", KeywordCategory::Operator),
    info(TokenKind::Or, "OR", "or", KeywordCategory::Operator),
    info(TokenKind::Not, "NOT", "not", KeywordCategory::Operator),
    // Workflow
    info(TokenKind::Start, "START", "Start", KeywordCategory::Workflow),
    info(TokenKind::WaitFor, "WAIT_FOR", "Wait for", KeywordCategory::Workflow),
];

/// Iterate every token kind in declaration order.
pub fn all() -> impl Iterator<Item = TokenKind> {
    KEYWORDS.iter().map(|k| k.kind)
}

/// Canonical IR spelling.
///
/// ## Parameters
/// - `kind`: Token kind.
///
/// ## Returns
/// - The English keyword emitted for `kind`.
pub fn as_str(kind: TokenKind) -> &'static str {
    info_for(kind).canonical
}

/// Lexicon resource key (e.g. `"RULE_DEF"`).
pub fn key(kind: TokenKind) -> &'static str {
    info_for(kind).key
}

/// Category.
pub fn category(kind: TokenKind) -> KeywordCategory {
    info_for(kind).category
}

/// Full metadata.
///
/// ## Panics
/// - If [`KEYWORDS`] is out of step with [`TokenKind`] (a programming error caught by the guardrail tests).
pub fn info_for(kind: TokenKind) -> &'static KeywordInfo {
    &KEYWORDS[kind.index()]
}

/// Lookup by canonical IR spelling.
///
/// ## Returns
/// - `Some(TokenKind)` if `s` is a canonical spelling, `None` otherwise.
pub fn from_str(s: &str) -> Option<TokenKind> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.kind)
}

/// Lookup by lexicon resource key.
///
/// ## Returns
/// - `Some(TokenKind)` if `s` is a resource key, `None` otherwise.
pub fn from_key(s: &str) -> Option<TokenKind> {
    KEYWORDS.iter().find(|k| k.key == s).map(|k| k.kind)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    kind: TokenKind,
    key: &'static str,
    canonical: &'static str,
    category: KeywordCategory,
) -> KeywordInfo {
    KeywordInfo {
        kind,
        key,
        canonical,
        category,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_in_enum_order() {
        for (i, info) in KEYWORDS.iter().enumerate() {
            assert_eq!(info.kind.index(), i, "{:?} is out of order", info.kind);
        }
    }

    #[test]
    fn test_multi_word_canonical_spellings() {
        assert_eq!(as_str(TokenKind::ForEach), "For each");
        assert_eq!(as_str(TokenKind::WaitFor), "Wait for");
        assert_eq!(from_str("Wait for"), Some(TokenKind::WaitFor));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("Return"), Some(TokenKind::Return));
        assert_eq!(from_str("return"), None);
        assert_eq!(from_key("rule_def"), None);
    }

    #[test]
    fn test_display_uses_resource_key() {
        assert_eq!(TokenKind::ModuleDecl.to_string(), "MODULE_DECL");
        assert_eq!(category(TokenKind::And), KeywordCategory::Operator);
    }
}
