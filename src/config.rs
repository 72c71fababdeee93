//! Aligner configuration.

use crate::errors::{AlignError, AlignResult};
use crate::lexicon::Lexicon;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How the relation-equivalence tables treat the member pairs that the
/// reference tables spell as two adjacent string literals without a comma
/// (`"tmod" "prep_in"`, `"nn" "prep_of"`, `"nsubj" "xsubj"`, `"dobj" "nsubjpass"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationGroupMode {
    /// Keep each pair as one concatenated label (`"tmodprep_in"`), which no
    /// parser emits, so neither half is a group member.
    Verbatim,
    /// Split each pair into its two labels.
    Corrected,
}

impl Default for RelationGroupMode {
    fn default() -> Self {
        RelationGroupMode::Verbatim
    }
}

/// Immutable configuration shared by every pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignerConfig {
    /// Minimum relatedness for two words to count as similar (θ_sim).
    pub similarity_threshold: f64,
    /// Weight of lexical relatedness against contextual evidence (θ1).
    pub blend_weight: f64,
    /// Sentences longer than this are rejected before any pass runs.
    pub max_sentence_length: usize,
    pub relation_groups: RelationGroupMode,
    /// Reject one-to-many inserts (acronyms, hyphen compounds, entity
    /// subset remainders) beyond their first pair.
    pub strict_one_to_one: bool,
    pub lexicon: Lexicon,
}

impl AlignerConfig {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> AlignResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| AlignError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> AlignResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| AlignError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> AlignResult<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) || self.similarity_threshold == 0.0 {
            return Err(AlignError::InvalidConfig {
                field: "similarity_threshold",
                message: format!("{} is not in (0, 1]", self.similarity_threshold),
            });
        }
        if !(0.0..=1.0).contains(&self.blend_weight) {
            return Err(AlignError::InvalidConfig {
                field: "blend_weight",
                message: format!("{} is not in [0, 1]", self.blend_weight),
            });
        }
        if self.max_sentence_length == 0 {
            return Err(AlignError::InvalidConfig {
                field: "max_sentence_length",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn with_relation_groups(mut self, mode: RelationGroupMode) -> Self {
        self.relation_groups = mode;
        self
    }

    pub fn with_strict_one_to_one(mut self, strict: bool) -> Self {
        self.strict_one_to_one = strict;
        self
    }

    pub fn with_max_sentence_length(mut self, limit: usize) -> Self {
        self.max_sentence_length = limit;
        self
    }

    /// Combine lexical relatedness with accumulated evidence.
    pub(crate) fn weigh(&self, relatedness: f64, evidence: f64) -> f64 {
        self.blend_weight * relatedness + (1.0 - self.blend_weight) * evidence
    }
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.9,
            blend_weight: 0.9,
            max_sentence_length: 200,
            relation_groups: RelationGroupMode::default(),
            strict_one_to_one: false,
            lexicon: Lexicon::english(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = AlignerConfig::from_toml_str(
            r#"
similarity_threshold = 0.8
relation_groups = "corrected"
"#,
        )
        .unwrap();
        assert_eq!(config.similarity_threshold, 0.8);
        assert_eq!(config.blend_weight, 0.9);
        assert_eq!(config.relation_groups, RelationGroupMode::Corrected);
        assert!(config.lexicon.is_stopword("the"));
    }

    #[test]
    fn custom_stopwords_replace_the_list() {
        let config = AlignerConfig::from_toml_str(
            r#"
[lexicon]
stopwords = ["the", "a"]
"#,
        )
        .unwrap();
        assert_eq!(config.lexicon.stopwords.len(), 2);
        assert!(config.lexicon.is_punctuation("."));
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let err = AlignerConfig::from_toml_str("similarity_threshold = 1.5").unwrap_err();
        assert!(matches!(
            err,
            AlignError::InvalidConfig {
                field: "similarity_threshold",
                ..
            }
        ));
    }

    #[test]
    fn garbage_is_a_config_error() {
        let err = AlignerConfig::from_toml_str("blend_weight = \"high\"").unwrap_err();
        assert!(matches!(err, AlignError::Config(_)));
    }
}
