//! Rewrite stage contract and the stage registry.
//!
//! A stage is a named, stateless text rewrite. Stages are created by name from a [`StageRegistry`] that locale
//! plugins fill in before any pipeline is built, then owned by the pipeline that resolved them.

use std::collections::BTreeMap;

use aster_core::lexicon::builtin::KEYWORDS_STAGE;
use aster_core::{ConfigError, Lexicon};

use crate::config::CanonicalizationConfig;
use crate::keywords::KeywordStage;
use crate::segmenter::Segmenter;

/// Read-only inputs shared by every stage of one pipeline.
#[derive(Debug, Clone, Copy)]
pub struct StageContext<'a> {
    pub config: &'a CanonicalizationConfig,
    pub segmenter: &'a Segmenter,
    pub lexicon: &'a Lexicon,
}

/// One named rewrite rule.
///
/// ## Notes
/// - `rewrite` must be pure: the same input and context always produce the same output.
/// - Implementations never rewrite inside string literals; use the [`Segmenter`] in the context.
pub trait RewriteStage: Send + Sync + std::fmt::Debug {
    /// Registration name, unique within a pipeline.
    fn name(&self) -> &str;

    /// Rewrite `source`, returning the new text.
    fn rewrite(&self, source: &str, cx: &StageContext<'_>) -> String;
}

/// Builds a stage for the lexicon of the pipeline being assembled.
pub type StageFactory = fn(&Lexicon) -> Result<Box<dyn RewriteStage>, ConfigError>;

/// Name → factory table.
#[derive(Clone, Default)]
pub struct StageRegistry {
    factories: BTreeMap<String, StageFactory>,
}

impl std::fmt::Debug for StageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.factories.keys()).finish()
    }
}

impl StageRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding only the locale-independent keyword substitution stage.
    pub fn with_core() -> Self {
        let mut registry = Self::new();
        registry
            .factories
            .insert(KEYWORDS_STAGE.to_string(), KeywordStage::create);
        registry
    }

    /// Register `factory` under `name`.
    ///
    /// ## Errors
    /// - [`ConfigError::DuplicateStage`] when `name` is taken.
    pub fn register(&mut self, name: &str, factory: StageFactory) -> Result<(), ConfigError> {
        if self.factories.contains_key(name) {
            return Err(ConfigError::DuplicateStage { name: name.to_string() });
        }
        self.factories.insert(name.to_string(), factory);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Create the stage registered under `name` for `lexicon`.
    ///
    /// ## Errors
    /// - [`ConfigError::UnknownStage`] when nothing is registered under `name`.
    /// - Whatever the factory reports (e.g. [`ConfigError::InvalidPattern`]).
    pub fn create(&self, name: &str, lexicon: &Lexicon) -> Result<Box<dyn RewriteStage>, ConfigError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| ConfigError::UnknownStage { name: name.to_string() })?;
        factory(lexicon)
    }
}
