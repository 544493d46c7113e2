//! JSON rules files: user-defined pattern stages.
//!
//! A rules file lists regex rewrites that run after the locale's own stages and before keyword substitution:
//!
//! ```json
//! {
//!   "stages": [
//!     { "name": "domain-policy", "pattern": "保单", "replacement": "Policy" }
//!   ]
//! }
//! ```

use std::path::Path;

use aster_core::ConfigError;
use aster_syntax::{CanonicalizerBuilder, RewriteStage};
use aster_syntax::stages::PatternStage;
use serde::{Deserialize, Serialize};

/// One `(name, pattern, replacement)` rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    pub name: String,
    pub pattern: String,
    /// `$1` / `${name}` expansion syntax
    #[serde(default)]
    pub replacement: String,
}

/// Deserialized rules file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFile {
    #[serde(default)]
    pub stages: Vec<PatternRule>,
}

impl RuleFile {
    /// Parse a rules file; `origin` names the source in errors.
    pub fn from_json_str(origin: &str, json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::invalid_json(origin, e))
    }

    /// Read and parse a rules file from disk.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let origin = path.display().to_string();
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::io(origin.clone(), e))?;
        Self::from_json_str(&origin, &json)
    }

    /// Compile every rule, in file order.
    ///
    /// ## Errors
    /// - [`ConfigError::InvalidPattern`] for a blank name or a pattern that does not compile.
    pub fn compile(&self) -> Result<Vec<PatternStage>, ConfigError> {
        self.stages
            .iter()
            .map(|rule| {
                if rule.name.trim().is_empty() {
                    return Err(ConfigError::InvalidPattern {
                        stage: rule.name.clone(),
                        message: "rule name is empty".to_string(),
                    });
                }
                PatternStage::new(rule.name.as_str(), &rule.pattern, rule.replacement.as_str())
            })
            .collect()
    }

    /// Add every compiled rule to `builder` as an extra stage.
    pub fn apply(&self, builder: CanonicalizerBuilder) -> Result<CanonicalizerBuilder, ConfigError> {
        Ok(self
            .compile()?
            .into_iter()
            .fold(builder, |builder, stage| {
                tracing::debug!(stage = stage.name(), pattern = stage.pattern(), "added pattern stage");
                builder.with_stage(stage)
            }))
    }
}
