#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Rule-based monolingual word alignment.
//!
//! Given two tokenized, tagged and dependency-parsed sentences expressing
//! roughly the same content, [`WordAligner`] returns pairs of 1-based token
//! indices `(source, target)` that denote the same meaning.
//!
//! ## Passes
//!
//! Alignments are committed by a fixed sequence of passes, each one only
//! touching tokens that earlier passes left free:
//!
//! 1. Sentence-final punctuation
//! 2. Common n-grams with at least one content word
//! 3. Hyphenated compounds matching several tokens
//! 4. Named entities (exact, acronym, partial name)
//! 5. Verbs, nouns, adjectives and adverbs, scored with dependency evidence
//! 6. Remaining content words, scored with their textual neighborhood
//! 7. Hyphenated compounds matching a single token
//! 8. Stopwords with aligned dependency neighbors
//! 9. Stopwords and punctuation with aligned adjacent tokens
//!
//! Word relatedness comes from a [`Relatedness`] oracle; [`ParaphraseOracle`]
//! combines stemming with a paraphrase table.
//!
//! ## Example
//!
//! ```
//! use layered_align::{AlignerConfig, Sentence, WordAligner};
//!
//! let aligner = WordAligner::with_paraphrases(AlignerConfig::default(), [("storm", "tempest")]).unwrap();
//! let sentence = Sentence::builder()
//!     .word("Storms", "storm", "NNS")
//!     .word("hit", "hit", "VBD")
//!     .word("Ohio", "Ohio", "NNP")
//!     .build();
//!
//! let output = aligner.align(&sentence, &sentence).unwrap();
//! assert_eq!(output.sorted_pairs(), vec![(1, 1), (2, 2), (3, 3)]);
//! ```

mod aligner;
mod alignment;
mod category;
mod config;
mod dependency;
mod display;
mod errors;
mod lexical;
mod lexicon;
mod named_entity;
mod oracle;
mod pass;
mod relation_groups;
mod residual;
mod selection;
mod sublist;
mod token;

pub use aligner::WordAligner;
pub use alignment::{Alignment, AlignmentOutput, AlignmentSet};
pub use category::PosCategory;
pub use config::{AlignerConfig, RelationGroupMode};
pub use dependency::{DependencyEdge, DependencyGraph, Neighbor, ROOT_INDEX};
pub use display::AlignmentDisplay;
pub use errors::{AlignError, AlignResult, SentenceSide};
pub use lexicon::Lexicon;
pub use named_entity::{detect_entities, extend_entities, NamedEntity, ALIGNED_ENTITY_TYPES};
pub use oracle::{canonical_form, ParaphraseOracle, Relatedness, DEFAULT_PARAPHRASE_SIMILARITY};
pub use relation_groups::{Configuration, Label, RelationTable};
pub use sublist::{common_contiguous_runs, is_acronym, textual_neighborhood, CommonRun, NEIGHBORHOOD_SPAN};
pub use token::{Sentence, SentenceBuilder, Token, OUTSIDE_TAG};

#[cfg(test)]
mod tests {
    mod categories;
    mod display;
    mod hyphen;
    mod named_entities;
    mod properties;
    mod scenarios;
}
