//! Named-entity detection, cross-sentence extension and alignment.

use crate::alignment::AlignmentSet;
use crate::errors::SentenceSide;
use crate::pass::PassContext;
use crate::sublist::is_acronym;
use crate::token::{Sentence, Token};

/// Entity types that take part in alignment.
pub const ALIGNED_ENTITY_TYPES: &[&str] = &["PERSON", "ORGANIZATION", "LOCATION"];

/// A run of consecutive tokens sharing one entity tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedEntity {
    pub indices: Vec<usize>,
    pub words: Vec<String>,
    pub kind: String,
    /// Character offsets `[begin, end)` from the first to the last token.
    pub char_span: (usize, usize),
}

impl NamedEntity {
    fn single(token: &Token, kind: &str) -> Self {
        Self {
            indices: vec![token.index],
            words: vec![token.surface.clone()],
            kind: kind.to_string(),
            char_span: token.char_span,
        }
    }

    fn is_aligned_type(&self) -> bool {
        ALIGNED_ENTITY_TYPES.contains(&self.kind.as_str())
    }

    fn last_index(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    fn push(&mut self, token: &Token) {
        self.indices.push(token.index);
        self.words.push(token.surface.clone());
        self.char_span.1 = token.char_span.1;
    }
}

/// Merge consecutive tokens with the same non-`O` tag into entities.
pub fn detect_entities(sentence: &Sentence) -> Vec<NamedEntity> {
    let mut entities: Vec<NamedEntity> = Vec::new();
    for token in sentence.tokens().iter().filter(|t| t.is_entity()) {
        match entities.last_mut() {
            Some(current) if current.kind == token.ner && current.last_index() == Some(token.index - 1) => {
                current.push(token);
            }
            _ => entities.push(NamedEntity::single(token, &token.ner)),
        }
    }
    entities
}

/// Promote capitalized tokens of `sentence` that occur in, or abbreviate,
/// an entity of the other sentence.
///
/// A token inside one of the other side's entities becomes an entity of that
/// type, joining an entity that ends right before it. An acronym of such an
/// entity becomes a one-token entity. The first matching entity decides.
pub fn extend_entities(sentence: &Sentence, own: &mut Vec<NamedEntity>, other: &[NamedEntity]) {
    for token in sentence.tokens() {
        let included = own.iter().any(|e| e.indices.contains(&token.index));
        if included || !token.is_capitalized() {
            continue;
        }
        for entity in other {
            if entity.words.iter().any(|w| *w == token.surface) {
                let previous = token.index.checked_sub(1);
                match own.iter_mut().find(|e| e.last_index() == previous) {
                    Some(neighbor) => neighbor.push(token),
                    None => own.push(NamedEntity::single(token, &entity.kind)),
                }
                break;
            }
            if is_acronym(&token.surface, &entity.words) {
                let candidate = NamedEntity::single(token, &entity.kind);
                if !own.contains(&candidate) {
                    own.push(candidate);
                }
                break;
            }
        }
    }
}

fn canonical_words(words: &[String]) -> Vec<String> {
    words
        .iter()
        .map(|w| w.chars().filter(|&c| c != '.' && c != '-').collect())
        .collect()
}

fn is_unique(entity: &NamedEntity, all: &[NamedEntity]) -> bool {
    all.iter().filter(|e| e.words == entity.words).count() == 1
}

/// `short` appears in `long` in order, not necessarily contiguously.
fn is_subsequence(short: &[String], long: &[String]) -> bool {
    let mut rest = long.iter();
    short.iter().all(|word| rest.any(|w| w == word))
}

/// Align named entities by exact match, acronym and partial name match.
pub(crate) fn align_named_entities(ctx: &PassContext<'_>, set: &mut AlignmentSet) {
    let mut source_entities = detect_entities(ctx.source);
    let mut target_entities = detect_entities(ctx.target);
    extend_entities(ctx.source, &mut source_entities, &target_entities);
    extend_entities(ctx.target, &mut target_entities, &source_entities);

    if source_entities.is_empty() || target_entities.is_empty() {
        return;
    }

    let typed_words = |entities: &[NamedEntity]| -> Vec<String> {
        entities
            .iter()
            .filter(|e| e.is_aligned_type())
            .flat_map(|e| e.words.iter().cloned())
            .collect()
    };
    let source_words = typed_words(&source_entities);
    let target_words = typed_words(&target_entities);

    let mut source_done = vec![false; source_entities.len()];
    let mut target_done = vec![false; target_entities.len()];
    let strict = ctx.strict();

    // Exact matches.
    for (si, s) in source_entities.iter().enumerate() {
        if !s.is_aligned_type() || !is_unique(s, &source_entities) {
            continue;
        }
        for (ti, t) in target_entities.iter().enumerate() {
            if !t.is_aligned_type() || !is_unique(t, &target_entities) {
                continue;
            }
            if canonical_words(&s.words) == canonical_words(&t.words) {
                for (&a, &b) in s.indices.iter().zip(&t.indices) {
                    set.insert((a, b));
                }
                source_done[si] = true;
                target_done[ti] = true;
            }
        }
    }

    // Acronyms and their expansions.
    for (si, s) in source_entities.iter().enumerate() {
        if !s.is_aligned_type() {
            continue;
        }
        for (ti, t) in target_entities.iter().enumerate() {
            if !t.is_aligned_type() {
                continue;
            }
            if s.words.len() == 1 && is_acronym(&s.words[0], &t.words) {
                for &b in &t.indices {
                    set.insert_one_to_many((s.indices[0], b), SentenceSide::Source, strict);
                }
            } else if t.words.len() == 1 && is_acronym(&t.words[0], &s.words) {
                for &a in &s.indices {
                    set.insert_one_to_many((a, t.indices[0]), SentenceSide::Target, strict);
                }
            } else {
                continue;
            }
            source_done[si] = true;
            target_done[ti] = true;
        }
    }

    // Partial names: one entity's words appear, in order, in the other's.
    let prior = set.clone();
    for (si, s) in source_entities.iter().enumerate() {
        if !s.is_aligned_type() || source_done[si] || !is_unique(s, &source_entities) {
            continue;
        }
        for (ti, t) in target_entities.iter().enumerate() {
            if !t.is_aligned_type() || target_done[ti] || s.kind != t.kind || !is_unique(t, &target_entities) {
                continue;
            }
            if is_subsequence(&s.words, &t.words) {
                let partial = PartialName {
                    shorter: s,
                    longer: t,
                    shorter_side: SentenceSide::Source,
                    shorter_side_words: &source_words,
                };
                partial.align(ctx, &prior, set);
            } else if is_subsequence(&t.words, &s.words) {
                let partial = PartialName {
                    shorter: t,
                    longer: s,
                    shorter_side: SentenceSide::Target,
                    shorter_side_words: &target_words,
                };
                partial.align(ctx, &prior, set);
            }
        }
    }
}

struct PartialName<'e> {
    shorter: &'e NamedEntity,
    longer: &'e NamedEntity,
    shorter_side: SentenceSide,
    /// Words of every aligned-type entity on the shorter name's side.
    shorter_side_words: &'e [String],
}

impl<'e> PartialName<'e> {
    fn pair(&self, short_index: usize, long_index: usize) -> (usize, usize) {
        match self.shorter_side {
            SentenceSide::Source => (short_index, long_index),
            SentenceSide::Target => (long_index, short_index),
        }
    }

    fn used_before(&self, prior: &AlignmentSet, long_index: usize) -> bool {
        match self.shorter_side {
            SentenceSide::Source => prior.is_target_used(long_index),
            SentenceSide::Target => prior.is_source_used(long_index),
        }
    }

    /// Pair the shared words, then attach the longer name's remaining words
    /// to the shorter name.
    fn align(&self, ctx: &PassContext<'_>, prior: &AlignmentSet, set: &mut AlignmentSet) {
        let mut unaligned: Vec<usize> = self.longer.indices.clone();
        for (k, short_word) in self.shorter.words.iter().enumerate() {
            for (l, long_word) in self.longer.words.iter().enumerate() {
                if short_word != long_word {
                    continue;
                }
                let pair = self.pair(self.shorter.indices[k], self.longer.indices[l]);
                if set.insert(pair) || set.contains(pair) {
                    unaligned.retain(|&i| i != self.longer.indices[l]);
                }
            }
        }

        let lexicon = ctx.lexicon();
        for (k, short_word) in self.shorter.words.iter().enumerate() {
            for (l, long_word) in self.longer.words.iter().enumerate() {
                let long_index = self.longer.indices[l];
                if !unaligned.contains(&long_index) || self.used_before(prior, long_index) {
                    continue;
                }
                if self.shorter_side_words.contains(long_word)
                    || lexicon.is_punctuation(short_word)
                    || lexicon.is_punctuation(long_word)
                {
                    continue;
                }
                let pair = self.pair(self.shorter.indices[k], long_index);
                set.insert_one_to_many(pair, self.shorter_side, ctx.strict());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_tags_merge() {
        let sentence = Sentence::builder()
            .entity("Barack", "Barack", "NNP", "PERSON")
            .entity("Obama", "Obama", "NNP", "PERSON")
            .entity("Paris", "Paris", "NNP", "LOCATION")
            .word("and", "and", "CC")
            .entity("Berlin", "Berlin", "NNP", "LOCATION")
            .build();
        let entities = detect_entities(&sentence);
        let spans: Vec<_> = entities
            .iter()
            .map(|e| (e.indices.clone(), e.kind.as_str(), e.char_span))
            .collect();
        assert_eq!(
            spans,
            vec![
                (vec![1, 2], "PERSON", (0, 12)),
                (vec![3], "LOCATION", (13, 18)),
                (vec![5], "LOCATION", (23, 29)),
            ]
        );
    }

    #[test]
    fn capitalized_words_learn_from_the_other_side() {
        let tagged = Sentence::builder()
            .entity("United", "United", "NNP", "LOCATION")
            .entity("States", "States", "NNP", "LOCATION")
            .build();
        let untagged = Sentence::builder()
            .word("the", "the", "DT")
            .word("U.S.", "U.S.", "NNP")
            .word("States", "States", "NNPS")
            .word("united", "united", "JJ")
            .build();
        let other = detect_entities(&tagged);
        let mut own = detect_entities(&untagged);
        extend_entities(&untagged, &mut own, &other);
        // "States" joins the acronym entity ending right before it.
        assert_eq!(
            own,
            vec![NamedEntity {
                indices: vec![2, 3],
                words: vec!["U.S.".to_string(), "States".to_string()],
                kind: "LOCATION".to_string(),
                char_span: (4, 15),
            }]
        );
    }

    #[test]
    fn subsequence_keeps_order() {
        let words = |ws: &[&str]| ws.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        assert!(is_subsequence(&words(&["Obama"]), &words(&["Barack", "Obama"])));
        assert!(is_subsequence(&words(&["John", "Kennedy"]), &words(&["John", "F.", "Kennedy"])));
        assert!(!is_subsequence(&words(&["Kennedy", "John"]), &words(&["John", "F.", "Kennedy"])));
    }
}
