use aster_core::lang::punctuation::{self, PunctuationRole};
use aster_core::{ConfigError, Lexicon};

use crate::stage::{RewriteStage, StageContext};

/// Full-width Chinese punctuation → canonical ASCII punctuation.
///
/// `。` → `.`, `，` → `,`, `：` → `:`, `、` → `,`. Idempotent.
#[derive(Debug, Clone)]
pub struct PunctuationStage {
    table: [(char, &'static str); 4],
}

impl Default for PunctuationStage {
    fn default() -> Self {
        Self {
            table: [
                ('。', punctuation::as_str(PunctuationRole::StatementEnd)),
                ('，', punctuation::as_str(PunctuationRole::ListSeparator)),
                ('：', punctuation::as_str(PunctuationRole::BlockStart)),
                ('、', punctuation::as_str(PunctuationRole::ListSeparator)),
            ],
        }
    }
}

impl PunctuationStage {
    pub fn create(_: &Lexicon) -> Result<Box<dyn RewriteStage>, ConfigError> {
        Ok(Box::new(Self::default()))
    }

    fn translate(&self, span: &str) -> String {
        let mut out = String::with_capacity(span.len());
        for c in span.chars() {
            match self.table.iter().find(|(from, _)| *from == c) {
                Some((_, to)) => out.push_str(to),
                None => out.push(c),
            }
        }
        out
    }
}

impl RewriteStage for PunctuationStage {
    fn name(&self) -> &str {
        super::PUNCTUATION
    }

    fn rewrite(&self, source: &str, cx: &StageContext<'_>) -> String {
        cx.segmenter.transform_outside_literals(source, |span| self.translate(span))
    }
}
