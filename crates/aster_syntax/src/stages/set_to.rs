use aster_core::lang::keywords::{self, TokenKind};
use aster_core::{ConfigError, Lexicon};
use regex::Regex;

use crate::stage::{RewriteStage, StageContext};

/// Line-leading `将 X 设为 ` → `Let X be `.
///
/// Only the prefix is rewritten; the value expression after it is kept verbatim.
#[derive(Debug, Clone)]
pub struct SetToStage {
    prefix: Regex,
    replacement: String,
}

impl SetToStage {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            prefix: super::compile(
                super::SET_TO,
                r"(?m)^(?P<indent>[ \t]*)将[ \t]+(?P<name>[\p{L}_][\p{L}\p{N}_]*)[ \t]+设为[ \t]+",
            )?,
            replacement: format!(
                "${{indent}}{} ${{name}} {} ",
                keywords::as_str(TokenKind::Let),
                keywords::as_str(TokenKind::Be)
            ),
        })
    }

    pub fn create(_: &Lexicon) -> Result<Box<dyn RewriteStage>, ConfigError> {
        Ok(Box::new(Self::new()?))
    }
}

impl RewriteStage for SetToStage {
    fn name(&self) -> &str {
        super::SET_TO
    }

    fn rewrite(&self, source: &str, cx: &StageContext<'_>) -> String {
        cx.segmenter.replace_outside_literals(source, &self.prefix, &self.replacement)
    }
}
