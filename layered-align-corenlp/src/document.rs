//! The subset of the CoreNLP JSON output format the aligner reads.

use layered_align::OUTSIDE_TAG;
use serde::{Deserialize, Serialize};

/// One annotated text, as returned by the CoreNLP server with
/// `outputFormat=json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreNlpDocument {
    #[serde(default)]
    pub sentences: Vec<CoreNlpSentence>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreNlpSentence {
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub tokens: Vec<CoreNlpToken>,
    #[serde(default)]
    pub basic_dependencies: Vec<CoreNlpDependency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreNlpToken {
    #[serde(default)]
    pub index: usize,
    pub word: String,
    /// The untokenized spelling; preferred over `word` when present.
    #[serde(default)]
    pub original_text: Option<String>,
    pub lemma: String,
    pub pos: String,
    #[serde(default = "outside")]
    pub ner: String,
    #[serde(default)]
    pub character_offset_begin: usize,
    #[serde(default)]
    pub character_offset_end: usize,
}

fn outside() -> String {
    OUTSIDE_TAG.to_string()
}

impl CoreNlpToken {
    pub fn surface(&self) -> &str {
        self.original_text.as_deref().unwrap_or(&self.word)
    }
}

/// A basic (uncollapsed) dependency; governor 0 is ROOT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreNlpDependency {
    pub dep: String,
    pub governor: usize,
    #[serde(default)]
    pub governor_gloss: String,
    pub dependent: usize,
    #[serde(default)]
    pub dependent_gloss: String,
}
