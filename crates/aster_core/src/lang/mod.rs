//! Aster canonical vocabulary registries.
//!
//! Callers work with **stable IDs** ([`keywords::TokenKind`], [`punctuation::PunctuationRole`]) and look up the
//! canonical IR spelling via registry tables, instead of comparing strings scattered across stages.
//!
//! ## Notes
//! - Registries are **pure**: no IO, no side effects.
//! - Localized spellings do not live here; they belong to a [`crate::Lexicon`].
//!
//! ## Examples
//! ```rust
//! use aster_core::lang::keywords::{self, TokenKind};
//!
//! assert_eq!(keywords::from_str("Rule"), Some(TokenKind::RuleDef));
//! assert_eq!(keywords::as_str(TokenKind::Return), "Return");
//! ```

pub mod keywords;
pub mod punctuation;
pub mod registry;
