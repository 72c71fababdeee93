#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Stanford CoreNLP output for layered-align.
//!
//! Reads the JSON produced by a CoreNLP server running the `tokenize`,
//! `ssplit`, `pos`, `lemma`, `ner` and `depparse` annotators, and converts it
//! into [`layered_align::Sentence`] values:
//!
//! - tokens keep their original spelling, lemma, POS tag, NER tag and
//!   character offsets;
//! - basic dependencies are collapsed into `prep_<word>` and `conj_<word>`
//!   labels (see [`collapse_dependencies`]);
//! - a multi-sentence parse is joined into one token sequence, or split with
//!   [`split_document`].
//!
//! ## Example
//!
//! ```
//! let json = r#"{"sentences": [{
//!     "tokens": [
//!         {"word": "Rain", "lemma": "rain", "pos": "NN"},
//!         {"word": "fell", "lemma": "fall", "pos": "VBD"}
//!     ],
//!     "basicDependencies": [
//!         {"dep": "ROOT", "governor": 0, "dependent": 2},
//!         {"dep": "nsubj", "governor": 2, "dependent": 1}
//!     ]
//! }]}"#;
//!
//! let sentence = layered_align_corenlp::read_document(json).unwrap();
//! assert_eq!(sentence.text(), "Rain fell");
//! assert_eq!(sentence.dependencies().edges().len(), 2);
//! ```

mod collapse;
mod document;
mod errors;
mod reader;

pub use collapse::collapse_dependencies;
pub use document::{CoreNlpDependency, CoreNlpDocument, CoreNlpSentence, CoreNlpToken};
pub use errors::{CoreNlpError, CoreNlpResult};
pub use reader::{join_document, load_document, read_document, sentence_from_parse, split_document};
