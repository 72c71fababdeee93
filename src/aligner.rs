use crate::alignment::{AlignmentOutput, AlignmentSet};
use crate::category::{align_category, PosCategory};
use crate::config::AlignerConfig;
use crate::errors::{AlignError, AlignResult, SentenceSide};
use crate::lexical::{align_common_ngrams, align_end_punctuation, align_hyphenated, HyphenMatch};
use crate::named_entity::align_named_entities;
use crate::oracle::{ParaphraseOracle, Relatedness};
use crate::pass::PassContext;
use crate::residual::{align_content_words, align_function_words_by_adjacency, align_stopwords_by_dependencies};
use crate::token::Sentence;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

/// Aligns the words of two sentences that express the same content.
///
/// The aligner owns its configuration and shares the relatedness oracle, so
/// one instance can serve many threads.
///
/// ```
/// use layered_align::{AlignerConfig, Sentence, WordAligner};
///
/// let aligner = WordAligner::with_paraphrases(AlignerConfig::default(), [("died", "dead")]).unwrap();
/// let source = Sentence::builder()
///     .word("Two", "two", "CD")
///     .word("people", "people", "NNS")
///     .word("died", "die", "VBD")
///     .word(".", ".", ".")
///     .build();
/// let target = Sentence::builder()
///     .word("Two", "two", "CD")
///     .word("people", "people", "NNS")
///     .word("are", "be", "VBP")
///     .word("dead", "dead", "JJ")
///     .word(".", ".", ".")
///     .build();
///
/// let output = aligner.align(&source, &target).unwrap();
/// assert_eq!(output.pharaoh(), "4-5 1-1 2-2 3-4");
/// ```
#[derive(Clone)]
pub struct WordAligner {
    config: AlignerConfig,
    oracle: Arc<dyn Relatedness + Send + Sync>,
}

impl std::fmt::Debug for WordAligner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordAligner")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl WordAligner {
    pub fn new(config: AlignerConfig, oracle: Arc<dyn Relatedness + Send + Sync>) -> AlignResult<Self> {
        config.validate()?;
        Ok(Self { config, oracle })
    }

    /// An aligner backed by a [`ParaphraseOracle`] holding `pairs`, using the
    /// configuration's lexicon.
    pub fn with_paraphrases<'a, I>(config: AlignerConfig, pairs: I) -> AlignResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let oracle = ParaphraseOracle::new(config.lexicon.clone()).with_pairs(pairs);
        Self::new(config, Arc::new(oracle))
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    /// Align `source` to `target`.
    pub fn align(&self, source: &Sentence, target: &Sentence) -> AlignResult<AlignmentOutput> {
        let set = self.align_set(source, target)?;
        Ok(AlignmentOutput::new(&set, source, target))
    }

    /// Align many sentence pairs in parallel. Results keep the input order.
    pub fn align_batch(&self, pairs: &[(Sentence, Sentence)]) -> Vec<AlignResult<AlignmentOutput>> {
        pairs
            .par_iter()
            .map(|(source, target)| self.align(source, target))
            .collect()
    }

    /// Run every pass and return the raw alignment set.
    pub fn align_set(&self, source: &Sentence, target: &Sentence) -> AlignResult<AlignmentSet> {
        self.check_length(SentenceSide::Source, source)?;
        self.check_length(SentenceSide::Target, target)?;

        let mut set = AlignmentSet::new();
        if source.is_empty() || target.is_empty() {
            return Ok(set);
        }

        let ctx = PassContext {
            source,
            target,
            config: &self.config,
            oracle: &*self.oracle,
        };

        run_pass("end punctuation", &mut set, |set| align_end_punctuation(&ctx, set));
        run_pass("common n-grams", &mut set, |set| align_common_ngrams(&ctx, set));
        run_pass("hyphen groups", &mut set, |set| {
            align_hyphenated(&ctx, set, HyphenMatch::Group)
        });
        run_pass("named entities", &mut set, |set| align_named_entities(&ctx, set));
        for category in PosCategory::PASS_ORDER {
            run_pass(category.pass_name(), &mut set, |set| align_category(&ctx, set, category));
        }
        run_pass("content words", &mut set, |set| align_content_words(&ctx, set));
        run_pass("hyphen remainders", &mut set, |set| {
            align_hyphenated(&ctx, set, HyphenMatch::Remainder)
        });
        run_pass("stopwords by dependencies", &mut set, |set| {
            align_stopwords_by_dependencies(&ctx, set)
        });
        run_pass("function words by adjacency", &mut set, |set| {
            align_function_words_by_adjacency(&ctx, set)
        });
        set.remove_root();

        Ok(set)
    }

    fn check_length(&self, side: SentenceSide, sentence: &Sentence) -> AlignResult<()> {
        let limit = self.config.max_sentence_length;
        if sentence.len() > limit {
            return Err(AlignError::SentenceTooLong {
                side,
                length: sentence.len(),
                limit,
            });
        }
        Ok(())
    }
}

fn run_pass<F>(name: &str, set: &mut AlignmentSet, pass: F)
where
    F: FnOnce(&mut AlignmentSet),
{
    let before = set.len();
    pass(set);
    debug!(pass = name, committed = set.len() - before, "alignment pass finished");
}
