use aster_core::ConfigError;
use regex::Regex;

use crate::stage::{RewriteStage, StageContext};

/// A user-defined regex rewrite applied outside literals.
///
/// `replacement` uses the `regex` crate's `$1` / `${name}` expansion syntax.
#[derive(Debug, Clone)]
pub struct PatternStage {
    name: String,
    pattern: Regex,
    replacement: String,
}

impl PatternStage {
    /// Compile a pattern stage.
    ///
    /// ## Errors
    /// - [`ConfigError::InvalidPattern`] when `pattern` does not compile.
    pub fn new(name: impl Into<String>, pattern: &str, replacement: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        let pattern = super::compile(&name, pattern)?;
        Ok(Self {
            name,
            pattern,
            replacement: replacement.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl RewriteStage for PatternStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn rewrite(&self, source: &str, cx: &StageContext<'_>) -> String {
        cx.segmenter.replace_outside_literals(source, &self.pattern, &self.replacement)
    }
}
