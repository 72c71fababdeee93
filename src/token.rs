//! Annotated tokens and sentences.

use crate::dependency::{DependencyEdge, DependencyGraph};
use serde::{Deserialize, Serialize};

/// The named-entity tag of tokens outside any entity.
pub const OUTSIDE_TAG: &str = "O";

/// One annotated token. Indices are 1-based; index 0 is the dependency ROOT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub index: usize,
    pub surface: String,
    pub lemma: String,
    pub pos: String,
    /// Named-entity tag, `"O"` outside entities.
    pub ner: String,
    /// Character offsets `[begin, end)` in the original text.
    pub char_span: (usize, usize),
}

impl Token {
    pub fn new(
        index: usize,
        surface: impl Into<String>,
        lemma: impl Into<String>,
        pos: impl Into<String>,
    ) -> Self {
        Self {
            index,
            surface: surface.into(),
            lemma: lemma.into(),
            pos: pos.into(),
            ner: OUTSIDE_TAG.to_string(),
            char_span: (0, 0),
        }
    }

    pub fn with_ner(mut self, tag: impl Into<String>) -> Self {
        self.ner = tag.into();
        self
    }

    pub fn with_char_span(mut self, begin: usize, end: usize) -> Self {
        self.char_span = (begin, end);
        self
    }

    /// Case-insensitive test of the first letter of the POS tag
    /// (`n` nouns, `v` verbs, `j` adjectives, `r` adverbs).
    pub fn pos_starts_with(&self, prefix: char) -> bool {
        self.pos
            .chars()
            .next()
            .map_or(false, |c| c.to_ascii_lowercase() == prefix)
    }

    pub fn is_pos(&self, tag: &str) -> bool {
        self.pos.eq_ignore_ascii_case(tag)
    }

    pub fn is_entity(&self) -> bool {
        self.ner != OUTSIDE_TAG
    }

    /// True when the first character is uppercase; empty surfaces count as
    /// capitalized.
    pub fn is_capitalized(&self) -> bool {
        self.surface.chars().next().map_or(true, char::is_uppercase)
    }

    /// A token with an inner hyphen, such as `well-known`.
    pub fn is_hyphenated(&self) -> bool {
        self.surface.contains('-') && self.surface != "-"
    }
}

/// A tokenized, tagged and parsed sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    tokens: Vec<Token>,
    dependencies: DependencyGraph,
}

impl Sentence {
    /// Build a sentence; token indices are renumbered to their 1-based
    /// position and edges pointing outside the sentence are dropped.
    pub fn new(mut tokens: Vec<Token>, edges: Vec<DependencyEdge>) -> Self {
        for (position, token) in tokens.iter_mut().enumerate() {
            token.index = position + 1;
        }
        let dependencies = DependencyGraph::new(tokens.len(), edges);
        Self {
            tokens,
            dependencies,
        }
    }

    pub fn builder() -> SentenceBuilder {
        SentenceBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Token by 1-based index.
    pub fn token(&self, index: usize) -> Option<&Token> {
        index.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    pub fn dependencies(&self) -> &DependencyGraph {
        &self.dependencies
    }

    pub fn surfaces(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.surface.as_str()).collect()
    }

    /// Surface forms joined by single spaces.
    pub fn text(&self) -> String {
        self.surfaces().join(" ")
    }
}

/// Incremental construction of a [`Sentence`], mostly for tests and fixtures.
///
/// Character spans are computed as if the surfaces were joined by single
/// spaces.
#[derive(Debug, Default)]
pub struct SentenceBuilder {
    tokens: Vec<Token>,
    edges: Vec<DependencyEdge>,
    offset: usize,
}

impl SentenceBuilder {
    pub fn word(self, surface: &str, lemma: &str, pos: &str) -> Self {
        self.entity(surface, lemma, pos, OUTSIDE_TAG)
    }

    pub fn entity(mut self, surface: &str, lemma: &str, pos: &str, ner: &str) -> Self {
        let begin = self.offset;
        let end = begin + surface.chars().count();
        self.offset = end + 1;
        let index = self.tokens.len() + 1;
        self.tokens.push(
            Token::new(index, surface, lemma, pos)
                .with_ner(ner)
                .with_char_span(begin, end),
        );
        self
    }

    /// Add a dependency edge `relation(governor, dependent)`.
    pub fn edge(mut self, relation: &str, governor: usize, dependent: usize) -> Self {
        self.edges
            .push(DependencyEdge::new(relation, governor, dependent));
        self
    }

    pub fn build(self) -> Sentence {
        Sentence::new(self.tokens, self.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_assigns_indices_and_offsets() {
        let sentence = Sentence::builder()
            .word("Four", "four", "CD")
            .word("men", "man", "NNS")
            .word("died", "die", "VBD")
            .edge("num", 2, 1)
            .edge("nsubj", 3, 2)
            .edge("root", 0, 3)
            .build();

        assert_eq!(sentence.len(), 3);
        assert_eq!(sentence.token(2).map(|t| t.char_span), Some((5, 8)));
        assert_eq!(sentence.token(0), None);
        assert_eq!(sentence.token(4), None);
        assert_eq!(sentence.text(), "Four men died");
        assert_eq!(sentence.dependencies().edges().len(), 3);
    }

    #[test]
    fn pos_prefixes_ignore_case() {
        let token = Token::new(1, "ran", "run", "VBD");
        assert!(token.pos_starts_with('v'));
        assert!(!token.pos_starts_with('n'));
        assert!(Token::new(1, "it", "it", "prp").is_pos("PRP"));
    }

    #[test]
    fn hyphen_and_capitalization() {
        assert!(Token::new(1, "well-known", "well-known", "JJ").is_hyphenated());
        assert!(!Token::new(1, "-", "-", ":").is_hyphenated());
        assert!(Token::new(1, "Obama", "Obama", "NNP").is_capitalized());
        assert!(!Token::new(1, "obama", "obama", "NN").is_capitalized());
    }
}
