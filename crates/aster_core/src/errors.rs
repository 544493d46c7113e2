//! Configuration errors.
//!
//! Every failure the canonicalizer can report is a configuration failure detected while a lexicon, a stage or a
//! pipeline is being built. Canonicalizing text itself never fails.

use miette::Diagnostic;
use thiserror::Error;

/// A fatal configuration error, reported before any text is canonicalized.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("lexicon id must not be empty")]
    #[diagnostic(code(aster::lexicon::empty_id))]
    EmptyLocaleId,

    #[error("lexicon `{locale}` has no keyword for token kind {kind}")]
    #[diagnostic(
        code(aster::lexicon::missing_keyword),
        help("every token kind needs an entry in the lexicon's `keywords` table")
    )]
    MissingKeyword { locale: String, kind: &'static str },

    #[error("lexicon `{locale}` maps token kind {kind} to an empty keyword")]
    #[diagnostic(code(aster::lexicon::empty_keyword))]
    EmptyKeyword { locale: String, kind: &'static str },

    #[error("lexicon `{locale}` lists an empty alias for token kind {kind}")]
    #[diagnostic(code(aster::lexicon::empty_alias))]
    EmptyAlias { locale: String, kind: &'static str },

    #[error("lexicon `{locale}` has an empty `{field}` punctuation entry")]
    #[diagnostic(code(aster::lexicon::empty_punctuation))]
    EmptyPunctuation { locale: String, field: &'static str },

    #[error("lexicon `{locale}` names unknown token kind `{name}`")]
    #[diagnostic(
        code(aster::lexicon::unknown_token_kind),
        help("token kinds are upper snake case, e.g. `RULE_DEF` or `FOR_EACH`")
    )]
    UnknownTokenKind { locale: String, name: String },

    #[error("malformed JSON resource `{origin}`")]
    #[diagnostic(code(aster::lexicon::invalid_json))]
    InvalidJson {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read `{path}`")]
    #[diagnostic(code(aster::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("stage `{stage}` has an invalid pattern: {message}")]
    #[diagnostic(code(aster::stage::invalid_pattern))]
    InvalidPattern { stage: String, message: String },

    #[error("unknown stage `{name}`")]
    #[diagnostic(
        code(aster::stage::unknown),
        help("run `aster stages` to list the stages a locale registers")
    )]
    UnknownStage { name: String },

    #[error("stage `{name}` is registered twice")]
    #[diagnostic(code(aster::stage::duplicate))]
    DuplicateStage { name: String },

    #[error("lexicon `{id}` is registered twice")]
    #[diagnostic(code(aster::lexicon::duplicate))]
    DuplicateLocale { id: String },

    #[error("no lexicon registered for locale `{id}`")]
    #[diagnostic(code(aster::lexicon::unknown_locale), help("run `aster locales` to list registered locales"))]
    UnknownLocale { id: String },
}

impl ConfigError {
    /// Wrap a `serde_json` failure for the resource named `origin`.
    pub fn invalid_json(origin: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidJson {
            origin: origin.into(),
            source,
        }
    }

    /// Wrap an IO failure while reading `path`.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
