//! Provide the canonical vocabulary and locale lexicons shared by the Aster canonicalizer and its tooling.
//!
//! This crate is intentionally small and free of text-rewriting logic. It contains:
//! - the canonical token-kind registry (the English keyword IR spellings),
//! - the canonical punctuation registry,
//! - validated, immutable [`Lexicon`] values and a host-owned [`LexiconRegistry`],
//! - the shared [`ConfigError`] type reported for every configuration failure.
//!
//! ## Notes
//!
//! - No global state: registries are values constructed and owned by the host.
//! - Lexicons are validated once at construction; every accessor afterwards is infallible.

pub mod errors;
pub mod lang;
pub mod lexicon;

pub use errors::ConfigError;
pub use lang::keywords::TokenKind;
pub use lexicon::{Direction, KeywordEntry, Lexicon, LexiconFile, LexiconRegistry, PunctuationConfig};
