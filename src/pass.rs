//! State shared by every alignment pass for one sentence pair.

use crate::config::AlignerConfig;
use crate::dependency::ROOT_INDEX;
use crate::lexicon::Lexicon;
use crate::oracle::Relatedness;
use crate::token::{Sentence, Token};

/// POS passed to the oracle when comparing neighborhood lemmas.
const UNTAGGED: &str = "none";

pub(crate) struct PassContext<'a> {
    pub source: &'a Sentence,
    pub target: &'a Sentence,
    pub config: &'a AlignerConfig,
    pub oracle: &'a dyn Relatedness,
}

impl<'a> PassContext<'a> {
    pub fn lexicon(&self) -> &'a Lexicon {
        &self.config.lexicon
    }

    pub fn threshold(&self) -> f64 {
        self.config.similarity_threshold
    }

    pub fn strict(&self) -> bool {
        self.config.strict_one_to_one
    }

    /// The larger of surface and lemma relatedness.
    pub fn word_relatedness(&self, source: &Token, target: &Token) -> f64 {
        let surface = self
            .oracle
            .relatedness(&source.surface, &source.pos, &target.surface, &target.pos);
        surface.max(self.lemma_relatedness(source, target))
    }

    pub fn lemma_relatedness(&self, source: &Token, target: &Token) -> f64 {
        self.oracle
            .relatedness(&source.lemma, &source.pos, &target.lemma, &target.pos)
    }

    /// Relatedness of lemmas without POS information.
    pub fn untagged_relatedness(&self, source: &Token, target: &Token) -> f64 {
        self.oracle
            .relatedness(&source.lemma, UNTAGGED, &target.lemma, UNTAGGED)
    }

    /// Relatedness of two dependency neighbors. ROOT is related only to ROOT.
    pub fn neighbor_relatedness(&self, source: usize, target: usize) -> f64 {
        match (source == ROOT_INDEX, target == ROOT_INDEX) {
            (true, true) => 1.0,
            (true, false) | (false, true) => 0.0,
            (false, false) => match (self.source.token(source), self.target.token(target)) {
                (Some(s), Some(t)) => self.word_relatedness(s, t),
                _ => 0.0,
            },
        }
    }
}
