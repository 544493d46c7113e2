#![forbid(unsafe_code)]
//! Aster rule-language tooling
//!
//! Aster rules are written in a localized surface syntax (Simplified Chinese keywords and punctuation) and
//! canonicalized into the English-keyword IR the rule parser reads. This crate provides the `aster` command line
//! tool and the JSON rules-file loader; the canonicalizer itself lives in `aster_syntax`, lexicons and the
//! keyword registry in `aster_core`.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug in a built-in table (logic error), use
//!   `.expect("INVARIANT: reason")` with a clear explanation.

pub mod cli;
pub mod rules;
pub mod version;

pub use aster_core::{ConfigError, Lexicon, LexiconRegistry};
pub use aster_syntax::{CanonicalizationConfig, Canonicalizer, LocaleSet};
pub use rules::{PatternRule, RuleFile};
