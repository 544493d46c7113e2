use std::collections::BTreeMap;
use std::sync::Arc;

use crate::errors::ConfigError;

use super::{Lexicon, builtin};

/// Read-only registry of lexicons keyed by locale id.
///
/// ## Notes
/// - The host constructs and owns the registry; there is no process-wide instance.
/// - Lexicons are shared as `Arc<Lexicon>` so pipelines on other threads can hold them.
#[derive(Debug, Clone, Default)]
pub struct LexiconRegistry {
    lexicons: BTreeMap<String, Arc<Lexicon>>,
}

impl LexiconRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in `zh-CN` and `en-US` lexicons.
    pub fn with_builtins() -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        for lexicon in builtin::all()? {
            registry.register(lexicon)?;
        }
        Ok(registry)
    }

    /// Add a lexicon.
    ///
    /// ## Errors
    /// - [`ConfigError::DuplicateLocale`] when the id is already registered.
    pub fn register(&mut self, lexicon: Lexicon) -> Result<Arc<Lexicon>, ConfigError> {
        if self.lexicons.contains_key(lexicon.id()) {
            return Err(ConfigError::DuplicateLocale {
                id: lexicon.id().to_string(),
            });
        }
        let lexicon = Arc::new(lexicon);
        self.lexicons.insert(lexicon.id().to_string(), Arc::clone(&lexicon));
        Ok(lexicon)
    }

    pub fn get(&self, id: &str) -> Option<Arc<Lexicon>> {
        self.lexicons.get(id).cloned()
    }

    /// Like [`LexiconRegistry::get`], reporting [`ConfigError::UnknownLocale`] for a missing id.
    pub fn get_or_err(&self, id: &str) -> Result<Arc<Lexicon>, ConfigError> {
        self.get(id).ok_or_else(|| ConfigError::UnknownLocale { id: id.to_string() })
    }

    /// Registered locale ids, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.lexicons.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Lexicon>> {
        self.lexicons.values()
    }

    pub fn len(&self) -> usize {
        self.lexicons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicons.is_empty()
    }
}
