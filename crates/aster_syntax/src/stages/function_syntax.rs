use aster_core::lang::keywords::{self, TokenKind};
use aster_core::{ConfigError, Lexicon};
use regex::Regex;

use crate::stage::{RewriteStage, StageContext};

/// `规则 name(params)` rule headers → `Rule name given params`.
///
/// The header must start a line (after optional indentation, which is kept). Both `规则` and `Rule` are accepted,
/// as are ASCII and full-width parentheses. Empty parameter lists drop `given`. Whatever follows the closing
/// parenthesis is kept, separated by one space unless it is empty or starts with punctuation.
#[derive(Debug, Clone)]
pub struct FunctionSyntaxStage {
    header: Regex,
}

impl FunctionSyntaxStage {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            header: super::compile(
                super::FUNCTION_SYNTAX,
                r"(?m)^([ \t]*)(?:规则|Rule)[ \t]+([\p{L}_][\p{L}\p{N}_]*)[ \t]*[(（]([^)）\r\n]*)[)）][ \t]*",
            )?,
        })
    }

    pub fn create(_: &Lexicon) -> Result<Box<dyn RewriteStage>, ConfigError> {
        Ok(Box::new(Self::new()?))
    }
}

/// Whether a rewritten header needs a space before the text that followed it.
fn needs_separator(next: Option<char>) -> bool {
    match next {
        None | Some('\r' | '\n') => false,
        Some(c) => !matches!(c, ':' | '：' | ',' | '，' | '.' | '。' | ';' | '；'),
    }
}

impl RewriteStage for FunctionSyntaxStage {
    fn name(&self) -> &str {
        super::FUNCTION_SYNTAX
    }

    fn rewrite(&self, source: &str, cx: &StageContext<'_>) -> String {
        let rule = keywords::as_str(TokenKind::RuleDef);
        let given = keywords::as_str(TokenKind::Given);

        cx.segmenter.replace_outside_literals_with(source, &self.header, |caps| {
            let indent = caps.get(1).map_or("", |m| m.as_str());
            let name = caps.get(2).map_or("", |m| m.as_str());
            let params = caps.get(3).map_or("", |m| m.as_str().trim());
            let end = caps.get(0).map_or(source.len(), |m| m.end());

            let mut out = format!("{indent}{rule} {name}");
            if !params.is_empty() {
                out.push_str(&format!(" {given} {params}"));
            }
            if needs_separator(source[end..].chars().next()) {
                out.push(' ');
            }
            out
        })
    }
}
