//! Core types for alignment fixture files.
//!
//! A fixture is a TOML document holding a sentence pair, the paraphrases the
//! oracle should know and the alignment the pipeline is expected to produce:
//!
//! ```toml
//! title = "Storm report"
//! paraphrases = [["struck", "hit"]]
//! expected = [[1, 1], [2, 2]]
//! pharaoh = "2-2 1-1"
//!
//! [source]
//! tokens = [
//!   { word = "Storms", lemma = "storm", pos = "NNS" },
//!   { word = "struck", lemma = "strike", pos = "VBD" },
//! ]
//! edges = [["nsubj", 2, 1], ["root", 0, 2]]
//!
//! [target]
//! tokens = [
//!   { word = "Storms", lemma = "storm", pos = "NNS" },
//!   { word = "hit", lemma = "hit", pos = "VBD" },
//! ]
//! ```

use crate::errors::{SpecError, SpecResult};
use layered_align::{AlignerConfig, Alignment, DependencyEdge, Sentence, Token, OUTSIDE_TAG};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentFixture {
    #[serde(default)]
    pub title: Option<String>,
    pub source: FixtureSentence,
    pub target: FixtureSentence,
    /// Unordered word pairs the oracle scores as paraphrases.
    #[serde(default)]
    pub paraphrases: Vec<(String, String)>,
    /// Expected pairs, in any order.
    pub expected: Vec<Alignment>,
    /// Exact Pharaoh rendering, commit order included. Checked when present.
    #[serde(default)]
    pub pharaoh: Option<String>,
    /// Overrides the configuration the runner was given.
    #[serde(default)]
    pub config: Option<AlignerConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSentence {
    pub tokens: Vec<FixtureToken>,
    /// `[relation, governor, dependent]`, 0 for ROOT.
    #[serde(default)]
    pub edges: Vec<(String, usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureToken {
    pub word: String,
    /// Defaults to the lowercased word.
    #[serde(default)]
    pub lemma: Option<String>,
    pub pos: String,
    #[serde(default)]
    pub ner: Option<String>,
}

impl FixtureSentence {
    pub fn to_sentence(&self) -> Sentence {
        let tokens = self
            .tokens
            .iter()
            .enumerate()
            .map(|(position, token)| {
                let lemma = token.lemma.clone().unwrap_or_else(|| token.word.to_lowercase());
                Token::new(position + 1, token.word.as_str(), lemma, token.pos.as_str())
                    .with_ner(token.ner.as_deref().unwrap_or(OUTSIDE_TAG))
            })
            .collect();
        let edges = self
            .edges
            .iter()
            .map(|(relation, governor, dependent)| DependencyEdge::new(relation.as_str(), *governor, *dependent))
            .collect();
        Sentence::new(tokens, edges)
    }
}

/// Parse fixture TOML. `origin` names the document in errors.
pub fn parse_fixture(content: &str, origin: &str) -> SpecResult<AlignmentFixture> {
    toml::from_str(content).map_err(|e| SpecError::Parse {
        path: origin.to_string(),
        message: e.to_string(),
    })
}
