//! Locale plugins.
//!
//! A locale plugin contributes one lexicon and the stages its pipeline names. A [`LocaleSet`] collects plugins:
//! every plugin registers its stages before any pipeline resolves a stage name.

use std::sync::Arc;

use aster_core::lexicon::builtin;
use aster_core::{ConfigError, Lexicon, LexiconRegistry};

use crate::config::CanonicalizationConfig;
use crate::pipeline::Canonicalizer;
use crate::stage::StageRegistry;
use crate::stages::{
    self, FunctionSyntaxStage, OperatorStage, PossessiveStage, PunctuationStage, ResultIsStage, SetToStage,
};

/// A named surface-syntax variant.
pub trait LocalePlugin {
    /// The locale's lexicon.
    fn lexicon(&self) -> Result<Lexicon, ConfigError>;

    /// Register the locale-specific stages its lexicon names.
    fn register_stages(&self, registry: &mut StageRegistry) -> Result<(), ConfigError>;
}

/// Simplified Chinese.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZhCnPlugin;

impl LocalePlugin for ZhCnPlugin {
    fn lexicon(&self) -> Result<Lexicon, ConfigError> {
        builtin::zh_cn()
    }

    fn register_stages(&self, registry: &mut StageRegistry) -> Result<(), ConfigError> {
        registry.register(stages::PUNCTUATION, PunctuationStage::create)?;
        registry.register(stages::POSSESSIVE, PossessiveStage::create)?;
        registry.register(stages::OPERATOR, OperatorStage::create)?;
        registry.register(stages::FUNCTION_SYNTAX, FunctionSyntaxStage::create)?;
        registry.register(stages::SET_TO, SetToStage::create)?;
        registry.register(stages::RESULT_IS, ResultIsStage::create)?;
        Ok(())
    }
}

/// Canonical English; only keyword substitution, which is the identity here.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnUsPlugin;

impl LocalePlugin for EnUsPlugin {
    fn lexicon(&self) -> Result<Lexicon, ConfigError> {
        builtin::en_us()
    }

    fn register_stages(&self, _registry: &mut StageRegistry) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// Lexicons and stages contributed by installed plugins.
#[derive(Debug, Clone)]
pub struct LocaleSet {
    lexicons: LexiconRegistry,
    stages: StageRegistry,
}

impl Default for LocaleSet {
    fn default() -> Self {
        Self {
            lexicons: LexiconRegistry::new(),
            stages: StageRegistry::with_core(),
        }
    }
}

impl LocaleSet {
    /// An empty set holding only the core keyword stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in `zh-CN` and `en-US` locales.
    pub fn builtin() -> Result<Self, ConfigError> {
        let mut set = Self::new();
        set.install(&ZhCnPlugin)?;
        set.install(&EnUsPlugin)?;
        Ok(set)
    }

    /// Register `plugin`'s stages and lexicon.
    pub fn install(&mut self, plugin: &dyn LocalePlugin) -> Result<Arc<Lexicon>, ConfigError> {
        plugin.register_stages(&mut self.stages)?;
        self.lexicons.register(plugin.lexicon()?)
    }

    /// Register an additional lexicon (e.g. loaded from JSON) that reuses already registered stages.
    pub fn register_lexicon(&mut self, lexicon: Lexicon) -> Result<Arc<Lexicon>, ConfigError> {
        self.lexicons.register(lexicon)
    }

    pub fn lexicons(&self) -> &LexiconRegistry {
        &self.lexicons
    }

    pub fn stages(&self) -> &StageRegistry {
        &self.stages
    }

    /// Build the pipeline of the lexicon registered as `locale`.
    pub fn canonicalizer(&self, locale: &str, config: CanonicalizationConfig) -> Result<Canonicalizer, ConfigError> {
        Canonicalizer::for_locale(locale, &self.lexicons, &self.stages, config)
    }
}
