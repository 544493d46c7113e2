//! Canonicalization options.

/// Options passed unchanged through every stage of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalizationConfig {
    /// Rewrite locale string delimiters (`「」`) to the canonical `"` after all stages ran
    pub normalize_quotes: bool,
    /// Stage names left out when a pipeline is built
    pub disabled_stages: Vec<String>,
}

impl Default for CanonicalizationConfig {
    fn default() -> Self {
        Self {
            normalize_quotes: true,
            disabled_stages: Vec::new(),
        }
    }
}

impl CanonicalizationConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether string delimiters are normalized
    pub fn with_normalize_quotes(mut self, normalize: bool) -> Self {
        self.normalize_quotes = normalize;
        self
    }

    /// Leave the stage named `name` out of the pipeline
    pub fn with_disabled_stage(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.disabled_stages.contains(&name) {
            self.disabled_stages.push(name);
        }
        self
    }

    pub fn is_stage_disabled(&self, name: &str) -> bool {
        self.disabled_stages.iter().any(|s| s == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_normalizes_quotes() {
        let config = CanonicalizationConfig::default();
        assert!(config.normalize_quotes);
        assert!(config.disabled_stages.is_empty());
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(CanonicalizationConfig::new(), CanonicalizationConfig::default());
    }

    #[test]
    fn test_with_normalize_quotes() {
        let config = CanonicalizationConfig::new().with_normalize_quotes(false);
        assert!(!config.normalize_quotes);
    }

    #[test]
    fn test_with_disabled_stage_dedups() {
        let config = CanonicalizationConfig::new()
            .with_disabled_stage("chinese-possessive")
            .with_disabled_stage("chinese-possessive");
        assert_eq!(config.disabled_stages, ["chinese-possessive"]);
        assert!(config.is_stage_disabled("chinese-possessive"));
        assert!(!config.is_stage_disabled("keywords"));
    }
}
