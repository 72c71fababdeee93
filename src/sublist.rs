//! Sequence helpers shared by the lexical and entity passes.

use crate::lexicon::Lexicon;
use crate::token::{Sentence, Token};
use std::ops::Range;

/// Tokens on each side of a word that count as its textual neighborhood.
pub const NEIGHBORHOOD_SPAN: usize = 3;

/// A run of equal words, as 0-based positions in each sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonRun {
    pub left: Range<usize>,
    pub right: Range<usize>,
}

impl CommonRun {
    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Paired positions `(left, right)` in order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.left.clone().zip(self.right.clone())
    }

    fn within(&self, other: &CommonRun) -> bool {
        contains(&other.left, &self.left) && contains(&other.right, &self.right)
    }

    fn swapped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }
}

fn contains(outer: &Range<usize>, inner: &Range<usize>) -> bool {
    outer.start <= inner.start && inner.end <= outer.end
}

/// Every common contiguous run of `left` and `right` (compared ignoring
/// case), longest first. A run lying inside an already recorded run on both
/// sides is not reported.
///
/// Within one length, runs are ordered by their start in the shorter
/// sequence, then by their start in the longer one.
pub fn common_contiguous_runs<L, R>(left: &[L], right: &[R]) -> Vec<CommonRun>
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    let left: Vec<String> = left.iter().map(|w| w.as_ref().to_lowercase()).collect();
    let right: Vec<String> = right.iter().map(|w| w.as_ref().to_lowercase()).collect();

    if left.len() > right.len() {
        return runs_shorter_first(&right, &left)
            .into_iter()
            .map(CommonRun::swapped)
            .collect();
    }
    runs_shorter_first(&left, &right)
}

fn runs_shorter_first(a: &[String], b: &[String]) -> Vec<CommonRun> {
    let mut runs: Vec<CommonRun> = Vec::new();
    for size in (1..=a.len()).rev() {
        for i in 0..=(a.len() - size) {
            for j in 0..=(b.len() - size) {
                if a[i..i + size] != b[j..j + size] {
                    continue;
                }
                let candidate = CommonRun {
                    left: i..i + size,
                    right: j..j + size,
                };
                if !runs.iter().any(|run| candidate.within(run)) {
                    runs.push(candidate);
                }
            }
        }
    }
    runs
}

/// Whether `word` (dots removed) spells the initials of `words`, e.g.
/// `U.S.` for `United States`. Single `A` and `I` never count.
pub fn is_acronym<S: AsRef<str>>(word: &str, words: &[S]) -> bool {
    let canonical: Vec<char> = word.chars().filter(|&c| c != '.').collect();
    let has_upper = canonical.iter().any(|c| c.is_uppercase());
    let has_lower = canonical.iter().any(|c| c.is_lowercase());
    if !has_upper || has_lower || canonical.len() != words.len() {
        return false;
    }
    let lowered: String = canonical.iter().collect::<String>().to_lowercase();
    if lowered == "a" || lowered == "i" {
        return false;
    }
    canonical
        .iter()
        .zip(words)
        .all(|(&initial, word)| word.as_ref().chars().next() == Some(initial))
}

/// Content tokens within [`NEIGHBORHOOD_SPAN`] positions of `index`, left
/// side first, excluding `index` itself and tokens whose lemma is a
/// stopword or punctuation.
pub fn textual_neighborhood<'s>(sentence: &'s Sentence, index: usize, lexicon: &Lexicon) -> Vec<&'s Token> {
    let start = index.saturating_sub(NEIGHBORHOOD_SPAN).max(1);
    let end = (index + NEIGHBORHOOD_SPAN).min(sentence.len());
    (start..=end)
        .filter(|&i| i != index)
        .filter_map(|i| sentence.token(i))
        .filter(|token| !lexicon.is_function_word(&token.lemma))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(a: &[&str], b: &[&str]) -> Vec<(Vec<usize>, Vec<usize>)> {
        common_contiguous_runs(a, b)
            .into_iter()
            .map(|r| (r.left.collect(), r.right.collect()))
            .collect()
    }

    #[test]
    fn longest_runs_first_and_covered_runs_dropped() {
        let found = runs(&["in", "the", "Big", "City"], &["the", "big", "city", "at", "night"]);
        assert_eq!(
            found,
            vec![
                (vec![1, 2, 3], vec![0, 1, 2]),
                // "in" has no partner; every shorter run sits inside the first.
            ]
        );
    }

    #[test]
    fn positions_swap_back_when_left_is_longer() {
        let found = runs(&["a", "b", "c", "x", "y"], &["x", "y"]);
        assert_eq!(found, vec![(vec![3, 4], vec![0, 1])]);
    }

    #[test]
    fn repeated_words_yield_separate_runs() {
        let found = runs(&["go"], &["go", "and", "go"]);
        assert_eq!(found, vec![(vec![0], vec![0]), (vec![0], vec![2])]);
    }

    #[test]
    fn acronyms() {
        assert!(is_acronym("U.S.", &["United", "States"]));
        assert!(is_acronym("NASA", &["National", "Aeronautics", "Space", "Administration"]));
        assert!(!is_acronym("US", &["united", "States"]));
        assert!(!is_acronym("Us", &["United", "States"]));
        assert!(!is_acronym("I", &["Iran"]));
        assert!(!is_acronym("UN", &["United", "Nations", "Assembly"]));
    }

    #[test]
    fn neighborhood_skips_function_words() {
        let sentence = Sentence::builder()
            .word("Four", "four", "CD")
            .word("men", "man", "NNS")
            .word("died", "die", "VBD")
            .word("in", "in", "IN")
            .word("an", "an", "DT")
            .word("accident", "accident", "NN")
            .word(".", ".", ".")
            .build();
        let lexicon = Lexicon::english();
        let lemmas: Vec<_> = textual_neighborhood(&sentence, 3, &lexicon)
            .iter()
            .map(|t| t.lemma.as_str())
            .collect();
        assert_eq!(lemmas, vec!["four", "man", "accident"]);

        let lemmas: Vec<_> = textual_neighborhood(&sentence, 7, &lexicon)
            .iter()
            .map(|t| t.lemma.as_str())
            .collect();
        assert_eq!(lemmas, vec!["accident"]);
    }
}
