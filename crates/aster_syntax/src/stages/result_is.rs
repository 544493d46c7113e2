use aster_core::lang::keywords::{self, TokenKind};
use aster_core::{ConfigError, Lexicon};
use regex::Regex;

use crate::stage::{RewriteStage, StageContext};

/// Line-leading `结果为 ` → `Return `; the returned expression is kept verbatim.
#[derive(Debug, Clone)]
pub struct ResultIsStage {
    prefix: Regex,
    replacement: String,
}

impl ResultIsStage {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            prefix: super::compile(super::RESULT_IS, r"(?m)^(?P<indent>[ \t]*)结果为[ \t]+")?,
            replacement: format!("${{indent}}{} ", keywords::as_str(TokenKind::Return)),
        })
    }

    pub fn create(_: &Lexicon) -> Result<Box<dyn RewriteStage>, ConfigError> {
        Ok(Box::new(Self::new()?))
    }
}

impl RewriteStage for ResultIsStage {
    fn name(&self) -> &str {
        super::RESULT_IS
    }

    fn rewrite(&self, source: &str, cx: &StageContext<'_>) -> String {
        cx.segmenter.replace_outside_literals(source, &self.prefix, &self.replacement)
    }
}
