use aster_core::lang::keywords::TokenKind;
use aster_core::lang::punctuation::{self, PunctuationRole};
use aster_core::{ConfigError, Lexicon};
use regex::Regex;

use crate::stage::{RewriteStage, StageContext};

/// Comparison words in match priority order (longest first).
const COMPARISONS: &[(&str, &str)] = &[
    ("大于等于", ">="),
    ("小于等于", "<="),
    ("不等于", "!="),
    ("等于", "=="),
    ("大于", ">"),
    ("小于", "<"),
];

/// Chinese comparison words, line-final `则` and the `设置 X 为 Y` idiom.
///
/// - `大于等于` → `>=`, `小于等于` → `<=`, `不等于` → `!=`, `等于` → `==`, `大于` → `>`, `小于` → `<`. An operator
///   gets a single space on a side only where that neighbour is not already whitespace.
/// - `则` preceded by whitespace at the end of a line → the canonical block start `:`.
/// - `设置 X 为 Y` → `令 X 为 Y` (the lexicon's LET surface). No terminal punctuation is added and a missing `Y`
///   leaves the text alone.
#[derive(Debug, Clone)]
pub struct OperatorStage {
    comparisons: Regex,
    block_then: Regex,
    set_idiom: Regex,
}

impl OperatorStage {
    pub fn new() -> Result<Self, ConfigError> {
        let alternation = COMPARISONS.iter().map(|(word, _)| *word).collect::<Vec<_>>().join("|");
        Ok(Self {
            comparisons: super::compile(super::OPERATOR, &alternation)?,
            block_then: super::compile(super::OPERATOR, r"(?mR)[ \t]+则[ \t]*$")?,
            set_idiom: super::compile(
                super::OPERATOR,
                r"(?m)(^|[^\p{L}\p{N}_])设置([ \t]+[^ \t\r\n为]+[ \t]+为[ \t]+)",
            )?,
        })
    }

    pub fn create(_: &Lexicon) -> Result<Box<dyn RewriteStage>, ConfigError> {
        Ok(Box::new(Self::new()?))
    }

    fn rewrite_comparisons(&self, source: &str, cx: &StageContext<'_>) -> String {
        cx.segmenter.replace_outside_literals_with(source, &self.comparisons, |caps| {
            let Some(m) = caps.get(0) else {
                return String::new();
            };
            let symbol = COMPARISONS
                .iter()
                .find(|(word, _)| *word == m.as_str())
                .map_or(m.as_str(), |(_, symbol)| *symbol);

            let pad_left = source[..m.start()].chars().next_back().is_some_and(|c| !c.is_whitespace());
            let pad_right = source[m.end()..].chars().next().is_some_and(|c| !c.is_whitespace());

            let mut out = String::with_capacity(symbol.len() + 2);
            if pad_left {
                out.push(' ');
            }
            out.push_str(symbol);
            if pad_right {
                out.push(' ');
            }
            out
        })
    }
}

impl RewriteStage for OperatorStage {
    fn name(&self) -> &str {
        super::OPERATOR
    }

    fn rewrite(&self, source: &str, cx: &StageContext<'_>) -> String {
        let text = self.rewrite_comparisons(source, cx);
        let text = cx.segmenter.replace_outside_literals(
            &text,
            &self.block_then,
            punctuation::as_str(PunctuationRole::BlockStart),
        );
        let let_surface = cx.lexicon.keyword(TokenKind::Let).surface.as_str();
        cx.segmenter.replace_outside_literals_with(&text, &self.set_idiom, |caps| {
            let Some(m) = caps.get(0) else {
                return String::new();
            };
            // `Y` is not part of the match: it may open a literal.
            let has_value = text[m.end()..].chars().next().is_some_and(|c| c != '\r' && c != '\n');
            if !has_value {
                return m.as_str().to_string();
            }
            let lead = caps.get(1).map_or("", |m| m.as_str());
            let tail = caps.get(2).map_or("", |m| m.as_str());
            format!("{lead}{let_surface}{tail}")
        })
    }
}
