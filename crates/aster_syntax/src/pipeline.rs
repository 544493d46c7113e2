//! Pipeline orchestrator.
//!
//! A [`Canonicalizer`] owns an ordered list of stages resolved once, at build time, and folds them over the
//! source on every call:
//!
//! ```text
//! source → stage 1 → stage 2 → … → keyword substitution → quote normalization → canonical IR
//! ```
//!
//! ## Ordering
//! - The order comes from the builder ([`CanonicalizerBuilder::with_stage_order`]) or else from the lexicon's
//!   `stages` list.
//! - The reserved `keywords` name places keyword substitution; when it is absent the stage is appended last.
//! - Extra stages ([`CanonicalizerBuilder::with_stage`]) run immediately before keyword substitution, or last
//!   when keyword substitution is disabled.
//!
//! Every configuration problem (unknown or duplicate stage name, invalid pattern) surfaces from
//! [`CanonicalizerBuilder::build`]. [`Canonicalizer::canonicalize`] itself cannot fail.

use std::collections::HashSet;
use std::sync::Arc;

use aster_core::lang::punctuation::{self, PunctuationRole};
use aster_core::lexicon::builtin::KEYWORDS_STAGE;
use aster_core::{ConfigError, Lexicon, LexiconRegistry};

use crate::config::CanonicalizationConfig;
use crate::segmenter::Segmenter;
use crate::stage::{RewriteStage, StageContext, StageRegistry};

/// Name reported for the quote normalization step in traces.
pub const QUOTES_STEP: &str = "quotes";

/// A built, immutable canonicalization pipeline for one lexicon.
#[derive(Debug)]
pub struct Canonicalizer {
    lexicon: Arc<Lexicon>,
    config: CanonicalizationConfig,
    segmenter: Segmenter,
    stages: Vec<Box<dyn RewriteStage>>,
}

/// Output of one pipeline step, as recorded by [`Canonicalizer::canonicalize_traced`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageTrace {
    pub stage: String,
    pub output: String,
}

impl Canonicalizer {
    /// Start building a pipeline for `lexicon`.
    pub fn builder(lexicon: impl Into<Arc<Lexicon>>) -> CanonicalizerBuilder {
        CanonicalizerBuilder {
            lexicon: lexicon.into(),
            config: CanonicalizationConfig::default(),
            order: None,
            extra: Vec::new(),
        }
    }

    /// Build the pipeline the lexicon registered as `locale` declares.
    ///
    /// ## Errors
    /// - [`ConfigError::UnknownLocale`] when `locale` is not in `lexicons`.
    /// - Any error from [`CanonicalizerBuilder::build`].
    pub fn for_locale(
        locale: &str,
        lexicons: &LexiconRegistry,
        stages: &StageRegistry,
        config: CanonicalizationConfig,
    ) -> Result<Self, ConfigError> {
        Self::builder(lexicons.get_or_err(locale)?)
            .with_config(config)
            .build(stages)
    }

    /// Canonicalize `source`.
    #[tracing::instrument(skip_all, fields(locale = %self.lexicon.id(), source_len = source.len()))]
    pub fn canonicalize(&self, source: &str) -> String {
        let cx = self.context();
        let mut text = source.to_string();
        for stage in &self.stages {
            let next = stage.rewrite(&text, &cx);
            tracing::debug!(stage = stage.name(), changed = next != text, "stage applied");
            text = next;
        }
        self.finish(text)
    }

    /// Canonicalize `source`, recording the text after every step.
    ///
    /// ## Notes
    /// - The last entry's output equals [`Canonicalizer::canonicalize`]'s result.
    pub fn canonicalize_traced(&self, source: &str) -> Vec<StageTrace> {
        let cx = self.context();
        let mut trace = Vec::with_capacity(self.stages.len() + 1);
        let mut text = source.to_string();
        for stage in &self.stages {
            text = stage.rewrite(&text, &cx);
            trace.push(StageTrace {
                stage: stage.name().to_string(),
                output: text.clone(),
            });
        }
        if self.config.normalize_quotes {
            trace.push(StageTrace {
                stage: QUOTES_STEP.to_string(),
                output: self.finish(text),
            });
        }
        trace
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(|s| s.name())
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &CanonicalizationConfig {
        &self.config
    }

    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    fn context(&self) -> StageContext<'_> {
        StageContext {
            config: &self.config,
            segmenter: &self.segmenter,
            lexicon: &self.lexicon,
        }
    }

    fn finish(&self, text: String) -> String {
        if !self.config.normalize_quotes {
            return text;
        }
        self.segmenter.canonicalize_quotes(
            &text,
            punctuation::as_str(PunctuationRole::StringQuoteOpen),
            punctuation::as_str(PunctuationRole::StringQuoteClose),
        )
    }
}

/// Builder for [`Canonicalizer`].
#[derive(Debug)]
pub struct CanonicalizerBuilder {
    lexicon: Arc<Lexicon>,
    config: CanonicalizationConfig,
    order: Option<Vec<String>>,
    extra: Vec<Box<dyn RewriteStage>>,
}

impl CanonicalizerBuilder {
    pub fn with_config(mut self, config: CanonicalizationConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the lexicon's stage order.
    pub fn with_stage_order<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Add a stage that is not in the registry (e.g. a [`crate::stages::PatternStage`]).
    pub fn with_stage(mut self, stage: impl RewriteStage + 'static) -> Self {
        self.extra.push(Box::new(stage));
        self
    }

    /// Resolve every stage name against `registry` and freeze the pipeline.
    ///
    /// ## Errors
    /// - [`ConfigError::UnknownStage`] for an order entry or a disabled name that matches no stage.
    /// - [`ConfigError::DuplicateStage`] when a name would run twice.
    /// - Any error a stage factory reports.
    pub fn build(self, registry: &StageRegistry) -> Result<Canonicalizer, ConfigError> {
        let CanonicalizerBuilder {
            lexicon,
            config,
            order,
            extra,
        } = self;

        for name in &config.disabled_stages {
            let known = registry.contains(name) || extra.iter().any(|s| s.name() == name.as_str());
            if !known {
                return Err(ConfigError::UnknownStage { name: name.clone() });
            }
        }

        let mut names: Vec<String> = order
            .unwrap_or_else(|| lexicon.stages().to_vec())
            .into_iter()
            .filter(|name| !config.is_stage_disabled(name))
            .collect();
        if !config.is_stage_disabled(KEYWORDS_STAGE) && !names.iter().any(|n| n == KEYWORDS_STAGE) {
            names.push(KEYWORDS_STAGE.to_string());
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut stages: Vec<Box<dyn RewriteStage>> = Vec::with_capacity(names.len() + extra.len());
        for name in names {
            if !seen.insert(name.clone()) {
                return Err(ConfigError::DuplicateStage { name });
            }
            stages.push(registry.create(&name, &lexicon)?);
        }

        let extra: Vec<Box<dyn RewriteStage>> = extra
            .into_iter()
            .filter(|s| !config.is_stage_disabled(s.name()))
            .collect();
        for stage in &extra {
            if !seen.insert(stage.name().to_string()) {
                return Err(ConfigError::DuplicateStage {
                    name: stage.name().to_string(),
                });
            }
        }
        let at = stages
            .iter()
            .position(|s| s.name() == KEYWORDS_STAGE)
            .unwrap_or(stages.len());
        stages.splice(at..at, extra);

        tracing::debug!(
            locale = lexicon.id(),
            stages = ?stages.iter().map(|s| s.name()).collect::<Vec<_>>(),
            "canonicalization pipeline built"
        );

        Ok(Canonicalizer {
            segmenter: Segmenter::for_lexicon(&lexicon),
            lexicon,
            config,
            stages,
        })
    }
}
