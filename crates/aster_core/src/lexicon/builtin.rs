//! Built-in lexicons.
//!
//! `zh-CN` is the Simplified Chinese surface syntax; `en-US` is the canonical IR itself (every keyword maps to
//! its own canonical spelling), useful as an identity locale and as a template for new lexicons.

use crate::errors::ConfigError;
use crate::lang::keywords::{self, TokenKind};

use super::{Direction, KeywordSpec, Lexicon, LexiconFile, PunctuationConfig};

/// Locale id of the Simplified Chinese lexicon.
pub const ZH_CN: &str = "zh-CN";
/// Locale id of the canonical English lexicon.
pub const EN_US: &str = "en-US";

/// Reserved stage name that positions boundary-safe keyword substitution inside a pipeline.
pub const KEYWORDS_STAGE: &str = "keywords";

/// Pipeline order of the `zh-CN` locale.
pub const ZH_CN_STAGES: &[&str] = &[
    "chinese-punctuation",
    "chinese-possessive",
    "chinese-operator",
    "chinese-function-syntax",
    "chinese-set-to",
    "chinese-result-is",
    KEYWORDS_STAGE,
];

/// `(kind, surface, aliases)` for `zh-CN`, in token-kind order.
const ZH_CN_KEYWORDS: &[(TokenKind, &str, &[&str])] = &[
    (TokenKind::ModuleDecl, "模块", &[]),
    (TokenKind::Import, "引用", &["导入"]),
    (TokenKind::As, "作为", &[]),
    (TokenKind::RuleDef, "规则", &[]),
    (TokenKind::Given, "给定", &[]),
    (TokenKind::Produce, "产出", &[]),
    (TokenKind::TypeDef, "定义", &[]),
    (TokenKind::With, "包含", &[]),
    (TokenKind::If, "如果", &["若"]),
    (TokenKind::Otherwise, "否则", &[]),
    (TokenKind::Match, "匹配", &[]),
    (TokenKind::When, "当", &[]),
    (TokenKind::Return, "返回", &[]),
    (TokenKind::Let, "令", &[]),
    (TokenKind::Be, "为", &[]),
    (TokenKind::ForEach, "对每个", &[]),
    (TokenKind::In, "在", &[]),
    (TokenKind::True, "真", &[]),
    (TokenKind::False, "假", &[]),
    (TokenKind::Null, "空", &[]),
    (TokenKind::And, "且", &["并且"]),
    (TokenKind::Or, "或", &["或者"]),
    (TokenKind::Not, "非", &[]),
    (TokenKind::Start, "启动", &[]),
    (TokenKind::WaitFor, "等待", &[]),
];

/// The Simplified Chinese lexicon.
pub fn zh_cn() -> Result<Lexicon, ConfigError> {
    let keywords = ZH_CN_KEYWORDS
        .iter()
        .map(|&(kind, surface, aliases)| {
            let spec = if aliases.is_empty() {
                KeywordSpec::Surface(surface.to_string())
            } else {
                KeywordSpec::Detailed {
                    surface: surface.to_string(),
                    aliases: aliases.iter().map(|a| a.to_string()).collect(),
                }
            };
            (keywords::key(kind).to_string(), spec)
        })
        .collect();

    Lexicon::from_file(LexiconFile {
        id: ZH_CN.to_string(),
        name: "简体中文".to_string(),
        direction: Direction::Ltr,
        keywords,
        punctuation: PunctuationConfig {
            statement_end: "。".to_string(),
            list_separator: "，".to_string(),
            block_start: "：".to_string(),
            string_quote_open: "「".to_string(),
            string_quote_close: "」".to_string(),
        },
        stages: ZH_CN_STAGES.iter().map(|s| s.to_string()).collect(),
    })
}

/// The canonical English lexicon.
pub fn en_us() -> Result<Lexicon, ConfigError> {
    Lexicon::from_file(LexiconFile {
        id: EN_US.to_string(),
        name: "English (canonical)".to_string(),
        direction: Direction::Ltr,
        keywords: keywords::KEYWORDS
            .iter()
            .map(|k| (k.key.to_string(), KeywordSpec::Surface(k.canonical.to_string())))
            .collect(),
        punctuation: PunctuationConfig::canonical(),
        stages: vec![KEYWORDS_STAGE.to_string()],
    })
}

/// Every built-in lexicon, `zh-CN` first.
pub fn all() -> Result<Vec<Lexicon>, ConfigError> {
    Ok(vec![zh_cn()?, en_us()?])
}
