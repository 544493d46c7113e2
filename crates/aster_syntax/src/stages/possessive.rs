use aster_core::{ConfigError, Lexicon};
use regex::Regex;

use crate::ident::{is_ident_char, is_ideograph};
use crate::stage::{RewriteStage, StageContext};

const POSSESSIVE: char = '的';

/// Minimum ideograph run on each side of a tight `的` before it reads as member access.
const MIN_TIGHT_RUN: usize = 2;

/// Chinese possessive `的` → member access `.`.
///
/// - Spaced form: `驾驶员 的 车辆` → `驾驶员.车辆` when identifier characters flank the spaces.
/// - Tight form: `用户的名字` → `用户.名字` only when both neighbouring ideograph runs have at least two
///   characters, so compounds such as `我的结构体` survive.
#[derive(Debug, Clone)]
pub struct PossessiveStage {
    pattern: Regex,
}

impl PossessiveStage {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            pattern: super::compile(super::POSSESSIVE, r"[ \t]+的[ \t]+|的")?,
        })
    }

    pub fn create(_: &Lexicon) -> Result<Box<dyn RewriteStage>, ConfigError> {
        Ok(Box::new(Self::new()?))
    }
}

/// Ideograph run length, excluding `的`, immediately before `end`.
fn run_before(text: &str, end: usize) -> usize {
    text[..end]
        .chars()
        .rev()
        .take_while(|&c| is_ideograph(c) && c != POSSESSIVE)
        .count()
}

/// Ideograph run length, excluding `的`, immediately after `start`.
fn run_after(text: &str, start: usize) -> usize {
    text[start..]
        .chars()
        .take_while(|&c| is_ideograph(c) && c != POSSESSIVE)
        .count()
}

impl RewriteStage for PossessiveStage {
    fn name(&self) -> &str {
        super::POSSESSIVE
    }

    fn rewrite(&self, source: &str, cx: &StageContext<'_>) -> String {
        cx.segmenter.replace_outside_literals_with(source, &self.pattern, |caps| {
            let Some(m) = caps.get(0) else {
                return String::new();
            };
            let before = source[..m.start()].chars().next_back();
            let after = source[m.end()..].chars().next();

            let spaced = m.as_str().len() > POSSESSIVE.len_utf8();
            let rewrite = if spaced {
                before.is_some_and(is_ident_char) && after.is_some_and(is_ident_char)
            } else {
                run_before(source, m.start()) >= MIN_TIGHT_RUN && run_after(source, m.end()) >= MIN_TIGHT_RUN
            };

            if rewrite { ".".to_string() } else { m.as_str().to_string() }
        })
    }
}
