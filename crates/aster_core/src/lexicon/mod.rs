//! Locale lexicons.
//!
//! A [`Lexicon`] maps every [`TokenKind`] to its localized surface keyword, carries the locale's punctuation
//! configuration, and names the ordered rewrite stages the locale's pipeline runs. Lexicons are validated once,
//! when they are built, and are immutable afterwards.
//!
//! Two sources produce the same value:
//! - the built-in code tables in [`builtin`] (`zh-CN`, `en-US`),
//! - a JSON resource parsed into a [`LexiconFile`] and validated with [`Lexicon::from_file`].
//!
//! ## Resource format
//! ```json
//! {
//!   "id": "zh-CN",
//!   "name": "简体中文",
//!   "direction": "LTR",
//!   "keywords": { "RETURN": "返回", "IF": { "surface": "如果", "aliases": ["若"] } },
//!   "punctuation": { "statementEnd": "。", "listSeparator": "，", "blockStart": "：",
//!                    "stringQuoteOpen": "「", "stringQuoteClose": "」" },
//!   "stages": ["chinese-punctuation", "keywords"]
//! }
//! ```

pub mod builtin;
mod registry;

pub use registry::LexiconRegistry;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::lang::keywords::{self, TokenKind};
use crate::lang::punctuation::{self, PunctuationRole};

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "LTR")]
    Ltr,
    #[serde(rename = "RTL")]
    Rtl,
}

/// Localized punctuation, one non-empty spelling per [`PunctuationRole`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunctuationConfig {
    pub statement_end: String,
    pub list_separator: String,
    pub block_start: String,
    pub string_quote_open: String,
    pub string_quote_close: String,
}

impl PunctuationConfig {
    /// The canonical IR punctuation (`.` `,` `:` `"` `"`).
    pub fn canonical() -> Self {
        Self {
            statement_end: punctuation::as_str(PunctuationRole::StatementEnd).to_string(),
            list_separator: punctuation::as_str(PunctuationRole::ListSeparator).to_string(),
            block_start: punctuation::as_str(PunctuationRole::BlockStart).to_string(),
            string_quote_open: punctuation::as_str(PunctuationRole::StringQuoteOpen).to_string(),
            string_quote_close: punctuation::as_str(PunctuationRole::StringQuoteClose).to_string(),
        }
    }

    /// Spelling configured for `role`.
    pub fn get(&self, role: PunctuationRole) -> &str {
        match role {
            PunctuationRole::StatementEnd => &self.statement_end,
            PunctuationRole::ListSeparator => &self.list_separator,
            PunctuationRole::BlockStart => &self.block_start,
            PunctuationRole::StringQuoteOpen => &self.string_quote_open,
            PunctuationRole::StringQuoteClose => &self.string_quote_close,
        }
    }
}

/// A keyword's localized spellings: the primary surface plus accepted aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    pub surface: String,
    pub aliases: Vec<String>,
}

impl KeywordEntry {
    /// Primary surface followed by every alias.
    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.surface.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// One `keywords` table value in a lexicon resource: either a bare surface or a surface with aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeywordSpec {
    Surface(String),
    Detailed {
        surface: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        aliases: Vec<String>,
    },
}

/// Unvalidated lexicon, as stored in a JSON resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconFile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub direction: Direction,
    pub keywords: BTreeMap<String, KeywordSpec>,
    pub punctuation: PunctuationConfig,
    #[serde(default)]
    pub stages: Vec<String>,
}

/// A validated, immutable locale lexicon.
///
/// ## Notes
/// - The keyword table is total: [`Lexicon::keyword`] never fails.
/// - Construct through [`Lexicon::from_file`], [`Lexicon::from_json_str`] or the [`builtin`] tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    id: String,
    name: String,
    direction: Direction,
    /// Indexed by [`TokenKind::index`].
    keywords: Vec<KeywordEntry>,
    punctuation: PunctuationConfig,
    stages: Vec<String>,
}

impl Lexicon {
    /// Validate a lexicon resource.
    ///
    /// ## Errors
    /// - [`ConfigError::EmptyLocaleId`] for a blank `id`.
    /// - [`ConfigError::UnknownTokenKind`] for a `keywords` key that names no token kind.
    /// - [`ConfigError::MissingKeyword`] when a token kind has no entry.
    /// - [`ConfigError::EmptyKeyword`] / [`ConfigError::EmptyAlias`] for blank spellings.
    /// - [`ConfigError::EmptyPunctuation`] for a blank punctuation field.
    pub fn from_file(file: LexiconFile) -> Result<Self, ConfigError> {
        let LexiconFile {
            id,
            name,
            direction,
            keywords: mut table,
            punctuation: marks,
            stages,
        } = file;

        if id.trim().is_empty() {
            return Err(ConfigError::EmptyLocaleId);
        }

        if let Some(unknown) = table.keys().find(|k| keywords::from_key(k).is_none()) {
            return Err(ConfigError::UnknownTokenKind {
                locale: id,
                name: unknown.clone(),
            });
        }

        let mut entries = Vec::with_capacity(keywords::KEYWORDS.len());
        for kind in keywords::all() {
            let key = keywords::key(kind);
            let Some(spec) = table.remove(key) else {
                return Err(ConfigError::MissingKeyword { locale: id, kind: key });
            };
            let entry = match spec {
                KeywordSpec::Surface(surface) => KeywordEntry {
                    surface,
                    aliases: Vec::new(),
                },
                KeywordSpec::Detailed { surface, aliases } => KeywordEntry { surface, aliases },
            };
            if entry.surface.trim().is_empty() {
                return Err(ConfigError::EmptyKeyword { locale: id, kind: key });
            }
            if entry.aliases.iter().any(|a| a.trim().is_empty()) {
                return Err(ConfigError::EmptyAlias { locale: id, kind: key });
            }
            entries.push(entry);
        }

        for info in punctuation::PUNCTUATION {
            if marks.get(info.role).is_empty() {
                return Err(ConfigError::EmptyPunctuation {
                    locale: id,
                    field: info.field,
                });
            }
        }

        Ok(Self {
            id,
            name,
            direction,
            keywords: entries,
            punctuation: marks,
            stages,
        })
    }

    /// Parse and validate a JSON lexicon resource.
    ///
    /// ## Parameters
    /// - `origin`: Name of the resource, used in error messages (usually a path).
    /// - `json`: Resource text.
    pub fn from_json_str(origin: &str, json: &str) -> Result<Self, ConfigError> {
        let file: LexiconFile = serde_json::from_str(json).map_err(|e| ConfigError::invalid_json(origin, e))?;
        Self::from_file(file)
    }

    /// Read, parse and validate a JSON lexicon resource from disk.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let origin = path.display().to_string();
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::io(origin.clone(), e))?;
        Self::from_json_str(&origin, &json)
    }

    /// Convert back into the resource shape (for export).
    pub fn to_file(&self) -> LexiconFile {
        let keywords = self
            .keywords()
            .map(|(kind, entry)| {
                let spec = if entry.aliases.is_empty() {
                    KeywordSpec::Surface(entry.surface.clone())
                } else {
                    KeywordSpec::Detailed {
                        surface: entry.surface.clone(),
                        aliases: entry.aliases.clone(),
                    }
                };
                (keywords::key(kind).to_string(), spec)
            })
            .collect();

        LexiconFile {
            id: self.id.clone(),
            name: self.name.clone(),
            direction: self.direction,
            keywords,
            punctuation: self.punctuation.clone(),
            stages: self.stages.clone(),
        }
    }

    /// Serialize as a pretty-printed JSON resource.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(&self.to_file()).map_err(|e| ConfigError::invalid_json(self.id.clone(), e))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn punctuation(&self) -> &PunctuationConfig {
        &self.punctuation
    }

    /// Stage names forming this locale's pipeline, in order.
    pub fn stages(&self) -> &[String] {
        &self.stages
    }

    /// Localized spellings of `kind`.
    pub fn keyword(&self, kind: TokenKind) -> &KeywordEntry {
        &self.keywords[kind.index()]
    }

    /// Every `(kind, spellings)` pair, in token-kind declaration order.
    pub fn keywords(&self) -> impl Iterator<Item = (TokenKind, &KeywordEntry)> {
        keywords::all().zip(self.keywords.iter())
    }

    /// Localized string literal delimiters `(open, close)`.
    pub fn string_delimiters(&self) -> (&str, &str) {
        (
            self.punctuation.string_quote_open.as_str(),
            self.punctuation.string_quote_close.as_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_file() -> LexiconFile {
        LexiconFile {
            id: "xx-TEST".to_string(),
            name: "Test".to_string(),
            direction: Direction::Ltr,
            keywords: keywords::KEYWORDS
                .iter()
                .map(|k| (k.key.to_string(), KeywordSpec::Surface(k.canonical.to_lowercase())))
                .collect(),
            punctuation: PunctuationConfig::canonical(),
            stages: vec!["keywords".to_string()],
        }
    }

    #[test]
    fn test_minimal_file_validates() {
        let lexicon = Lexicon::from_file(minimal_file()).unwrap();
        assert_eq!(lexicon.id(), "xx-TEST");
        assert_eq!(lexicon.keyword(TokenKind::RuleDef).surface, "rule");
        assert_eq!(lexicon.keywords().count(), keywords::KEYWORDS.len());
    }

    #[test]
    fn test_missing_keyword_is_rejected() {
        let mut file = minimal_file();
        file.keywords.remove("WAIT_FOR");
        let err = Lexicon::from_file(file).unwrap_err();
        assert!(matches!(err, ConfigError::MissingKeyword { kind: "WAIT_FOR", .. }), "{err:?}");
    }

    #[test]
    fn test_blank_keyword_is_rejected() {
        let mut file = minimal_file();
        file.keywords.insert("IF".to_string(), KeywordSpec::Surface("  ".to_string()));
        let err = Lexicon::from_file(file).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyKeyword { kind: "IF", .. }), "{err:?}");
    }

    #[test]
    fn test_blank_alias_is_rejected() {
        let mut file = minimal_file();
        file.keywords.insert(
            "IF".to_string(),
            KeywordSpec::Detailed {
                surface: "if".to_string(),
                aliases: vec![String::new()],
            },
        );
        let err = Lexicon::from_file(file).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyAlias { kind: "IF", .. }), "{err:?}");
    }

    #[test]
    fn test_empty_punctuation_is_rejected() {
        let mut file = minimal_file();
        file.punctuation.block_start.clear();
        let err = Lexicon::from_file(file).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPunctuation { field: "blockStart", .. }), "{err:?}");
    }

    #[test]
    fn test_unknown_token_kind_is_rejected() {
        let mut file = minimal_file();
        file.keywords.insert("LOOP".to_string(), KeywordSpec::Surface("loop".to_string()));
        let err = Lexicon::from_file(file).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTokenKind { ref name, .. } if name == "LOOP"), "{err:?}");
    }

    #[test]
    fn test_blank_id_is_rejected() {
        let mut file = minimal_file();
        file.id = " ".to_string();
        assert!(matches!(Lexicon::from_file(file), Err(ConfigError::EmptyLocaleId)));
    }

    #[test]
    fn test_json_accepts_plain_and_detailed_keywords() {
        let mut file = minimal_file();
        file.keywords.insert(
            "IF".to_string(),
            KeywordSpec::Detailed {
                surface: "when-if".to_string(),
                aliases: vec!["iff".to_string()],
            },
        );
        let json = serde_json::to_string(&file).unwrap();
        assert!(json.contains(r#""RETURN":"return""#), "{json}");

        let lexicon = Lexicon::from_json_str("inline", &json).unwrap();
        let spellings: Vec<&str> = lexicon.keyword(TokenKind::If).spellings().collect();
        assert_eq!(spellings, ["when-if", "iff"]);
    }

    #[test]
    fn test_malformed_json_is_a_config_error() {
        let err = Lexicon::from_json_str("broken.json", "{ \"id\": ").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJson { ref origin, .. } if origin == "broken.json"));
    }

    #[test]
    fn test_direction_defaults_to_ltr() {
        let json = serde_json::to_value(minimal_file()).unwrap();
        let mut object = json.as_object().unwrap().clone();
        object.remove("direction");
        let file: LexiconFile = serde_json::from_value(serde_json::Value::Object(object)).unwrap();
        assert_eq!(file.direction, Direction::Ltr);
    }

    #[test]
    fn test_export_round_trips_through_validation() {
        let lexicon = Lexicon::from_file(minimal_file()).unwrap();
        let json = lexicon.to_json_pretty().unwrap();
        assert_eq!(Lexicon::from_json_str("export", &json).unwrap(), lexicon);
    }
}
