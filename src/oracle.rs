//! Word relatedness: stemming, closed-class rules and a paraphrase table.

use crate::errors::{AlignError, AlignResult};
use crate::lexicon::Lexicon;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Scores how related two `(word, POS)` pairs are, in `[0, 1]`.
///
/// Implementations are shared across worker threads and must not mutate
/// state while scoring.
pub trait Relatedness {
    fn relatedness(&self, word1: &str, pos1: &str, word2: &str, pos2: &str) -> f64;
}

impl<F> Relatedness for F
where
    F: Fn(&str, &str, &str, &str) -> f64,
{
    fn relatedness(&self, word1: &str, pos1: &str, word2: &str, pos2: &str) -> f64 {
        self(word1, pos1, word2, pos2)
    }
}

/// Default similarity assigned to paraphrase-table pairs.
pub const DEFAULT_PARAPHRASE_SIMILARITY: f64 = 0.9;

/// The relatedness oracle backed by a Snowball English stemmer and a table
/// of unordered paraphrase pairs.
pub struct ParaphraseOracle {
    pairs: HashSet<(String, String)>,
    similarity: f64,
    lexicon: Lexicon,
    stemmer: Stemmer,
}

impl fmt::Debug for ParaphraseOracle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParaphraseOracle")
            .field("pairs", &self.pairs.len())
            .field("similarity", &self.similarity)
            .finish_non_exhaustive()
    }
}

impl ParaphraseOracle {
    /// An oracle with an empty paraphrase table.
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            pairs: HashSet::new(),
            similarity: DEFAULT_PARAPHRASE_SIMILARITY,
            lexicon,
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    pub fn with_similarity(mut self, similarity: f64) -> Self {
        self.similarity = similarity;
        self
    }

    pub fn with_pairs<'a, I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (a, b) in pairs {
            self.add_pair(a, b);
        }
        self
    }

    /// Record `a ~ b`; stored lowercased and order-independent.
    pub fn add_pair(&mut self, a: &str, b: &str) {
        self.pairs.insert(ordered_key(a, b));
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Read a tab-separated pair table. Blank lines and `#` comments are
    /// skipped; any extra columns after the pair are ignored.
    pub fn from_reader<R: BufRead>(reader: R, lexicon: Lexicon) -> AlignResult<Self> {
        let mut oracle = Self::new(lexicon);
        for (n, line) in reader.lines().enumerate() {
            let line_number = n + 1;
            let line = line.map_err(|e| AlignError::ParaphraseTable {
                line: line_number,
                message: e.to_string(),
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let mut fields = trimmed.split('\t').map(str::trim);
            match (fields.next(), fields.next()) {
                (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => oracle.add_pair(a, b),
                _ => {
                    return Err(AlignError::ParaphraseTable {
                        line: line_number,
                        message: format!("expected two tab-separated words, found {:?}", trimmed),
                    })
                }
            }
        }
        Ok(oracle)
    }

    pub fn load(path: &Path, lexicon: Lexicon) -> AlignResult<Self> {
        let file = File::open(path).map_err(|source| AlignError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), lexicon)
    }

    fn stem(&self, word: &str) -> String {
        self.stemmer.stem(&word.to_lowercase()).into_owned()
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.lexicon.is_stopword(&word.to_lowercase())
    }
}

impl Relatedness for ParaphraseOracle {
    fn relatedness(&self, word1: &str, pos1: &str, word2: &str, pos2: &str) -> f64 {
        let canonical1 = canonical_form(word1);
        let canonical2 = canonical_form(word2);

        if canonical1.to_lowercase() == canonical2.to_lowercase() {
            return 1.0;
        }
        if self.stem(word1) == self.stem(word2) {
            return 1.0;
        }
        let digits1 = is_all_digits(&canonical1);
        let digits2 = is_all_digits(&canonical2);
        if digits1 && digits2 && canonical1 != canonical2 {
            return 0.0;
        }
        if pos1.eq_ignore_ascii_case("cd")
            && pos2.eq_ignore_ascii_case("cd")
            && !digits1
            && !digits2
            && canonical1 != canonical2
        {
            return 0.0;
        }
        // Stopwords only relate to stopwords.
        if self.is_stopword(word1) != self.is_stopword(word2) {
            return 0.0;
        }
        if self.lexicon.is_punctuation(word1) || self.lexicon.is_punctuation(word2) {
            return 0.0;
        }
        if self.pairs.contains(&ordered_key(word1, word2)) {
            self.similarity
        } else {
            0.0
        }
    }
}

/// Words longer than one character lose `.`, `-` and `,`.
pub fn canonical_form(word: &str) -> String {
    if word.chars().count() > 1 {
        word.chars().filter(|c| !matches!(c, '.' | '-' | ',')).collect()
    } else {
        word.to_string()
    }
}

fn is_all_digits(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_digit())
}

fn ordered_key(a: &str, b: &str) -> (String, String) {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracle() -> ParaphraseOracle {
        ParaphraseOracle::new(Lexicon::english()).with_pairs([("died", "dead"), ("Accident", "collision")])
    }

    #[test]
    fn identity_and_canonical_forms() {
        let oracle = oracle();
        assert_eq!(oracle.relatedness("U.S.", "NNP", "US", "NNP"), 1.0);
        assert_eq!(oracle.relatedness("e-mail", "NN", "email", "NN"), 1.0);
        assert_eq!(oracle.relatedness("House", "NN", "house", "NN"), 1.0);
    }

    #[test]
    fn shared_stems() {
        assert_eq!(oracle().relatedness("running", "VBG", "runs", "VBZ"), 1.0);
    }

    #[test]
    fn numbers_must_match() {
        let oracle = oracle().with_pairs([("four", "4")]);
        assert_eq!(oracle.relatedness("1,000", "CD", "1000", "CD"), 1.0);
        assert_eq!(oracle.relatedness("3", "CD", "4", "CD"), 0.0);
        assert_eq!(oracle.relatedness("three", "CD", "four", "CD"), 0.0);
        assert_eq!(oracle.relatedness("Four", "CD", "4", "CD"), 0.9);
    }

    #[test]
    fn closed_class_rules() {
        let oracle = oracle().with_pairs([("the", "dog"), (".", "!")]);
        assert_eq!(oracle.relatedness("the", "DT", "dog", "NN"), 0.0);
        assert_eq!(oracle.relatedness(".", ".", "!", "."), 0.0);
        assert_eq!(oracle.relatedness(".", ".", ".", "."), 1.0);
    }

    #[test]
    fn table_pairs_are_unordered_and_case_insensitive() {
        let oracle = oracle();
        assert_eq!(oracle.relatedness("dead", "JJ", "died", "VBD"), 0.9);
        assert_eq!(oracle.relatedness("collision", "NN", "accident", "NN"), 0.9);
        assert_eq!(oracle.relatedness("collision", "NN", "banana", "NN"), 0.0);
    }

    #[test]
    fn table_reader_reports_bad_lines() {
        let table = "# lexical pairs\nmen\tpeople\n\nbig\tlarge\tEquivalence\n";
        let oracle = ParaphraseOracle::from_reader(table.as_bytes(), Lexicon::english()).unwrap();
        assert_eq!(oracle.len(), 2);
        assert_eq!(oracle.relatedness("people", "NNS", "men", "NNS"), 0.9);

        let err = ParaphraseOracle::from_reader("men\tpeople\nlonely\n".as_bytes(), Lexicon::english())
            .unwrap_err();
        assert!(matches!(err, AlignError::ParaphraseTable { line: 2, .. }));
    }

    #[test]
    fn closures_are_oracles() {
        let exact = |a: &str, _: &str, b: &str, _: &str| if a == b { 1.0 } else { 0.0 };
        assert_eq!(exact.relatedness("a", "DT", "a", "DT"), 1.0);
    }
}
