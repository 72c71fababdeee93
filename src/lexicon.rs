//! Closed-class word lists used by the oracle and the residual passes.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// English stopwords (the NLTK list).
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Punctuation tokens as emitted by PTB-style tokenizers.
const PUNCTUATION: &[&str] = &[
    "(", "-lrb-", ".", ",", "-", "?", "!", ";", "_", ":", "{", "}", "[", "/", "]", "...", "\"",
    "'", ")", "-rrb-",
];

/// Clitic lemmas treated like function words by the residual passes.
const CLITICS: &[&str] = &["'s", "'d", "'ll"];

static ENGLISH: Lazy<Lexicon> = Lazy::new(|| Lexicon {
    stopwords: ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect(),
    punctuation: PUNCTUATION.iter().map(|w| w.to_string()).collect(),
    clitics: CLITICS.iter().map(|w| w.to_string()).collect(),
});

/// Stopword, punctuation and clitic sets.
///
/// Membership tests are exact; callers lowercase where the comparison is
/// meant to be case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub stopwords: BTreeSet<String>,
    pub punctuation: BTreeSet<String>,
    pub clitics: BTreeSet<String>,
}

impl Lexicon {
    /// The default English lists.
    pub fn english() -> Self {
        ENGLISH.clone()
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn is_punctuation(&self, word: &str) -> bool {
        self.punctuation.contains(word)
    }

    /// Stopword or punctuation.
    pub fn is_function_word(&self, word: &str) -> bool {
        self.is_stopword(word) || self.is_punctuation(word)
    }

    /// Stopword, punctuation or clitic: everything the content pass skips.
    pub fn is_closed_class(&self, word: &str) -> bool {
        self.is_function_word(word) || self.clitics.contains(word)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_lists() {
        let lexicon = Lexicon::english();
        assert_eq!(lexicon.stopwords.len(), 179);
        assert!(lexicon.is_stopword("the"));
        assert!(!lexicon.is_stopword("The"));
        assert!(lexicon.is_punctuation("-lrb-"));
        assert!(lexicon.is_closed_class("'s"));
        assert!(!lexicon.is_function_word("'s"));
        assert!(!lexicon.is_closed_class("accident"));
    }
}
