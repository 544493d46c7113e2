//! Built-in rewrite stages.
//!
//! | Name | Stage |
//! |---|---|
//! | `chinese-punctuation` | [`PunctuationStage`] |
//! | `chinese-possessive` | [`PossessiveStage`] |
//! | `chinese-operator` | [`OperatorStage`] |
//! | `chinese-function-syntax` | [`FunctionSyntaxStage`] |
//! | `chinese-set-to` | [`SetToStage`] |
//! | `chinese-result-is` | [`ResultIsStage`] |
//!
//! [`PatternStage`] is the user-defined `(pattern, replacement)` rule loaded from rules files.

mod function_syntax;
mod operator;
mod pattern;
mod possessive;
mod punctuation;
mod result_is;
mod set_to;

pub use function_syntax::FunctionSyntaxStage;
pub use operator::OperatorStage;
pub use pattern::PatternStage;
pub use possessive::PossessiveStage;
pub use punctuation::PunctuationStage;
pub use result_is::ResultIsStage;
pub use set_to::SetToStage;

use aster_core::ConfigError;
use regex::Regex;

pub const PUNCTUATION: &str = "chinese-punctuation";
pub const POSSESSIVE: &str = "chinese-possessive";
pub const OPERATOR: &str = "chinese-operator";
pub const FUNCTION_SYNTAX: &str = "chinese-function-syntax";
pub const SET_TO: &str = "chinese-set-to";
pub const RESULT_IS: &str = "chinese-result-is";

/// Compile a stage pattern, reporting failures as [`ConfigError::InvalidPattern`].
pub(crate) fn compile(stage: &str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        stage: stage.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use aster_core::Lexicon;
    use aster_core::lexicon::builtin;

    use crate::config::CanonicalizationConfig;
    use crate::segmenter::Segmenter;
    use crate::stage::{RewriteStage, StageContext};

    /// Run `stage` alone over `source` with the `zh-CN` lexicon.
    pub fn run(stage: &dyn RewriteStage, source: &str) -> String {
        let lexicon: Lexicon = builtin::zh_cn().unwrap();
        let config = CanonicalizationConfig::default();
        let segmenter = Segmenter::for_lexicon(&lexicon);
        let cx = StageContext {
            config: &config,
            segmenter: &segmenter,
            lexicon: &lexicon,
        };
        stage.rewrite(source, &cx)
    }
}
