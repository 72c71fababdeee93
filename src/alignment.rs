//! The cumulative alignment set and the aligner's output.

use crate::errors::SentenceSide;
use crate::token::Sentence;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::trace;

/// A `(source, target)` pair of 1-based token indices.
pub type Alignment = (usize, usize);

/// Alignments in commit order, with the indices each side has used.
///
/// [`AlignmentSet::insert`] keeps the set a 1-to-1 partial matching.
/// [`AlignmentSet::insert_one_to_many`] lets a single anchor token take several
/// partners while every partner must still be unused.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignmentSet {
    pairs: Vec<Alignment>,
    members: HashSet<Alignment>,
    source_used: HashMap<usize, usize>,
    target_used: HashMap<usize, usize>,
}

impl AlignmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[Alignment] {
        &self.pairs
    }

    pub fn iter(&self) -> impl Iterator<Item = Alignment> + '_ {
        self.pairs.iter().copied()
    }

    pub fn contains(&self, pair: Alignment) -> bool {
        self.members.contains(&pair)
    }

    pub fn is_source_used(&self, index: usize) -> bool {
        self.source_used.contains_key(&index)
    }

    pub fn is_target_used(&self, index: usize) -> bool {
        self.target_used.contains_key(&index)
    }

    /// Insert a pair whose indices are both unused. Returns whether the pair
    /// was added; re-inserting a present pair is a no-op.
    pub fn insert(&mut self, pair: Alignment) -> bool {
        if self.contains(pair) {
            return false;
        }
        if self.is_source_used(pair.0) || self.is_target_used(pair.1) {
            trace!(source = pair.0, target = pair.1, "rejecting pair with a used index");
            return false;
        }
        self.push(pair);
        true
    }

    /// Insert a pair where the `anchor` side's index may already be used.
    /// The other index must be unused. With `strict` this is [`AlignmentSet::insert`].
    pub fn insert_one_to_many(&mut self, pair: Alignment, anchor: SentenceSide, strict: bool) -> bool {
        if strict {
            return self.insert(pair);
        }
        if self.contains(pair) {
            return false;
        }
        let partner_used = match anchor {
            SentenceSide::Source => self.is_target_used(pair.1),
            SentenceSide::Target => self.is_source_used(pair.0),
        };
        if partner_used {
            trace!(source = pair.0, target = pair.1, %anchor, "rejecting one-to-many pair");
            return false;
        }
        self.push(pair);
        true
    }

    fn push(&mut self, pair: Alignment) {
        self.pairs.push(pair);
        self.members.insert(pair);
        *self.source_used.entry(pair.0).or_insert(0) += 1;
        *self.target_used.entry(pair.1).or_insert(0) += 1;
    }

    /// Drop every pair touching the ROOT index. The aligner runs this last;
    /// the passes themselves never commit ROOT, but [`AlignmentSet::insert`]
    /// accepts it from callers.
    pub fn remove_root(&mut self) {
        if self.pairs.iter().all(|&(s, t)| s != 0 && t != 0) {
            return;
        }
        let kept: Vec<Alignment> = self
            .pairs
            .iter()
            .copied()
            .filter(|&(s, t)| s != 0 && t != 0)
            .collect();
        *self = Self::default();
        for pair in kept {
            self.push(pair);
        }
    }

    /// No index appears in more than one pair.
    pub fn is_one_to_one(&self) -> bool {
        self.source_used.values().all(|&n| n == 1) && self.target_used.values().all(|&n| n == 1)
    }
}

/// Pharaoh format: `1-1 2-2 3-4`.
impl fmt::Display for AlignmentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pharaoh(f, &self.pairs)
    }
}

fn write_pharaoh(f: &mut impl fmt::Write, pairs: &[Alignment]) -> fmt::Result {
    for (n, (source, target)) in pairs.iter().enumerate() {
        if n > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{}-{}", source, target)?;
    }
    Ok(())
}

/// Final result for one sentence pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignmentOutput {
    /// Index pairs in commit order.
    pub pairs: Vec<Alignment>,
    /// Surface forms of each pair.
    pub token_pairs: Vec<(String, String)>,
    /// Lemmas of each pair.
    pub lemma_pairs: Vec<(String, String)>,
}

impl AlignmentOutput {
    pub fn new(set: &AlignmentSet, source: &Sentence, target: &Sentence) -> Self {
        let mut output = Self::default();
        for (s, t) in set.iter() {
            let (Some(source_token), Some(target_token)) = (source.token(s), target.token(t)) else {
                continue;
            };
            output.pairs.push((s, t));
            output
                .token_pairs
                .push((source_token.surface.clone(), target_token.surface.clone()));
            output
                .lemma_pairs
                .push((source_token.lemma.clone(), target_token.lemma.clone()));
        }
        output
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs sorted by source then target index.
    pub fn sorted_pairs(&self) -> Vec<Alignment> {
        let mut pairs = self.pairs.clone();
        pairs.sort_unstable();
        pairs
    }

    pub fn pharaoh(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_pharaoh(&mut out, &self.pairs);
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_insert_rejects_used_indices() {
        let mut set = AlignmentSet::new();
        assert!(set.insert((1, 1)));
        assert!(!set.insert((1, 1)));
        assert!(!set.insert((1, 2)));
        assert!(!set.insert((2, 1)));
        assert!(set.insert((2, 3)));
        assert_eq!(set.to_string(), "1-1 2-3");
        assert!(set.is_one_to_one());
    }

    #[test]
    fn one_to_many_repeats_only_the_anchor() {
        let mut set = AlignmentSet::new();
        assert!(set.insert_one_to_many((1, 4), SentenceSide::Source, false));
        assert!(set.insert_one_to_many((1, 5), SentenceSide::Source, false));
        assert!(!set.insert_one_to_many((2, 5), SentenceSide::Source, false));
        assert!(!set.insert_one_to_many((1, 6), SentenceSide::Target, false));
        assert!(!set.is_one_to_one());
        assert_eq!(set.pairs(), &[(1, 4), (1, 5)]);
    }

    #[test]
    fn strict_one_to_many_is_plain_insert() {
        let mut set = AlignmentSet::new();
        assert!(set.insert_one_to_many((1, 4), SentenceSide::Source, true));
        assert!(!set.insert_one_to_many((1, 5), SentenceSide::Source, true));
    }

    #[test]
    fn remove_root_frees_indices() {
        let mut set = AlignmentSet::new();
        set.insert((0, 0));
        set.insert((2, 2));
        set.remove_root();
        assert_eq!(set.pairs(), &[(2, 2)]);
        assert!(!set.is_source_used(0));
        assert!(set.is_source_used(2));
        assert!(set.insert((0, 3)));
    }
}
