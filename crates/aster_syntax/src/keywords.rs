//! Identifier-boundary-safe keyword substitution.
//!
//! Replaces every standalone localized keyword with its canonical IR spelling. A candidate is standalone when
//! neither neighbouring character is an identifier character (see [`crate::ident`]), so `若` is rewritten in
//! `若 条件` but left alone in `若何`, `若干`, `变量若value`, `若_x` and `若123`.
//!
//! ## Notes
//! - Candidates sharing a first character are tried longest first; ties keep token-kind declaration order.
//! - When two token kinds of one lexicon share a spelling, the kind declared first owns it.
//! - Only code spans are scanned; literals pass through untouched.

use std::collections::HashMap;

use aster_core::lang::keywords;
use aster_core::lexicon::builtin::KEYWORDS_STAGE;
use aster_core::{ConfigError, Lexicon};

use crate::ident::is_standalone;
use crate::stage::{RewriteStage, StageContext};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate {
    surface: String,
    canonical: &'static str,
}

/// Keyword substitution stage for one lexicon.
#[derive(Debug, Clone)]
pub struct KeywordStage {
    by_first_char: HashMap<char, Vec<Candidate>>,
}

impl KeywordStage {
    /// Build the candidate table for `lexicon`.
    ///
    /// ## Errors
    /// - [`ConfigError::EmptyKeyword`] if a spelling is empty. Validated lexicons never hit this; the check keeps
    ///   the stage from scanning with a candidate that matches everywhere.
    pub fn new(lexicon: &Lexicon) -> Result<Self, ConfigError> {
        let mut by_first_char: HashMap<char, Vec<Candidate>> = HashMap::new();
        let mut seen: Vec<&str> = Vec::new();

        for (kind, entry) in lexicon.keywords() {
            for spelling in entry.spellings() {
                let Some(first) = spelling.chars().next() else {
                    return Err(ConfigError::EmptyKeyword {
                        locale: lexicon.id().to_string(),
                        kind: keywords::key(kind),
                    });
                };
                if seen.contains(&spelling) {
                    continue;
                }
                seen.push(spelling);
                by_first_char.entry(first).or_default().push(Candidate {
                    surface: spelling.to_string(),
                    canonical: keywords::as_str(kind),
                });
            }
        }

        for candidates in by_first_char.values_mut() {
            // Stable: equal lengths keep declaration order.
            candidates.sort_by_key(|c| std::cmp::Reverse(c.surface.chars().count()));
        }

        Ok(Self { by_first_char })
    }

    /// [`crate::stage::StageFactory`] for the reserved `keywords` stage name.
    pub fn create(lexicon: &Lexicon) -> Result<Box<dyn RewriteStage>, ConfigError> {
        Ok(Box::new(Self::new(lexicon)?))
    }

    /// Substitute keywords in a single code span.
    pub fn substitute(&self, span: &str) -> String {
        let mut out = String::with_capacity(span.len());
        let mut pos = 0;

        while let Some(c) = span[pos..].chars().next() {
            if let Some(candidate) = self.match_at(span, pos, c) {
                out.push_str(candidate.canonical);
                pos += candidate.surface.len();
                continue;
            }
            out.push(c);
            pos += c.len_utf8();
        }
        out
    }

    fn match_at(&self, span: &str, pos: usize, c: char) -> Option<&Candidate> {
        let candidates = self.by_first_char.get(&c)?;
        let rest = &span[pos..];
        candidates.iter().find(|candidate| {
            rest.starts_with(candidate.surface.as_str())
                && is_standalone(span, pos, pos + candidate.surface.len())
        })
    }
}

impl RewriteStage for KeywordStage {
    fn name(&self) -> &str {
        KEYWORDS_STAGE
    }

    fn rewrite(&self, source: &str, cx: &StageContext<'_>) -> String {
        cx.segmenter.transform_outside_literals(source, |span| self.substitute(span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CanonicalizationConfig;
    use crate::segmenter::Segmenter;
    use aster_core::lexicon::builtin;

    fn rewrite(source: &str) -> String {
        let lexicon = builtin::zh_cn().unwrap();
        let stage = KeywordStage::new(&lexicon).unwrap();
        let config = CanonicalizationConfig::default();
        let segmenter = Segmenter::for_lexicon(&lexicon);
        let cx = StageContext {
            config: &config,
            segmenter: &segmenter,
            lexicon: &lexicon,
        };
        stage.rewrite(source, &cx)
    }

    #[test]
    fn test_control_flow_keywords() {
        assert_eq!(rewrite("如果 条件"), "If 条件");
        assert_eq!(rewrite("返回 值"), "Return 值");
        assert_eq!(rewrite("如果 条件 返回 值"), "If 条件 Return 值");
        assert_eq!(rewrite("如果:"), "If:");
    }

    #[test]
    fn test_word_operators_and_literals() {
        assert_eq!(rewrite("真 且 假 或 非"), "true and false or not");
        assert_eq!(rewrite("x 并且 y 或者 空"), "x and y or null");
    }

    #[test]
    fn test_let_binding() {
        assert_eq!(rewrite("令 变量 为 10"), "Let 变量 be 10");
        assert_eq!(rewrite("令 中文变量名 为 10"), "Let 中文变量名 be 10");
    }

    #[test]
    fn test_module_decl() {
        assert_eq!(rewrite("模块 测试"), "Module 测试");
    }

    #[test]
    fn test_identifiers_containing_keywords_are_untouched() {
        assert_eq!(rewrite("令 若何 为 10"), "Let 若何 be 10");
        assert_eq!(rewrite("令 返回值 为 若干"), "Let 返回值 be 若干");
        assert_eq!(rewrite("令 变量若value 为 10"), "Let 变量若value be 10");
        assert_eq!(rewrite("令 若_identifier 为 10"), "Let 若_identifier be 10");
        assert_eq!(rewrite("令 A若B 为 10"), "Let A若B be 10");
        assert_eq!(rewrite("令 若123 为 10"), "Let 若123 be 10");
    }

    #[test]
    fn test_alias_rewrites_when_standalone() {
        assert_eq!(rewrite("若 条件"), "If 条件");
    }

    #[test]
    fn test_longest_candidate_first() {
        // `或者` must not be read as `或` followed by the identifier `者`.
        assert_eq!(rewrite("或者"), "or");
        assert_eq!(rewrite("对每个 项 在 列表"), "For each 项 in 列表");
    }

    #[test]
    fn test_literals_are_untouched() {
        assert_eq!(rewrite("返回 \"若 这是字符串\""), "Return \"若 这是字符串\"");
        assert_eq!(rewrite("返回 「如果 真」"), "Return 「如果 真」");
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        assert_eq!(rewrite("如果(真)"), "If(true)");
        assert_eq!(rewrite("返回。"), "Return。");
    }

    #[test]
    fn test_en_us_is_identity() {
        let lexicon = builtin::en_us().unwrap();
        let stage = KeywordStage::new(&lexicon).unwrap();
        let text = "Rule main given x: If x Return true. For each y in z: Wait for y.";
        assert_eq!(stage.substitute(text), text);
    }
}
