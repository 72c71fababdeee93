//! Surface-form passes: sentence-final punctuation, shared n-grams and
//! hyphenated compounds.

use crate::alignment::AlignmentSet;
use crate::errors::SentenceSide;
use crate::pass::PassContext;
use crate::sublist::common_contiguous_runs;

fn is_final_mark(word: &str) -> bool {
    matches!(word, "." | "!")
}

/// Align the sentence-final `.`/`!`, allowing either side to carry one
/// extra trailing token.
pub(crate) fn align_end_punctuation(ctx: &PassContext<'_>, set: &mut AlignmentSet) {
    let source = ctx.source.surfaces();
    let target = ctx.target.surfaces();
    let (n, m) = (source.len(), target.len());
    if n == 0 || m == 0 {
        return;
    }
    // 1-based indices
    let marks = |s: usize, t: usize| is_final_mark(source[s - 1]) && is_final_mark(target[t - 1]);

    let pair = if marks(n, m) || source[n - 1] == target[m - 1] {
        Some((n, m))
    } else if n >= 2 && marks(n - 1, m) {
        Some((n - 1, m))
    } else if m >= 2 && marks(n, m - 1) {
        Some((n, m - 1))
    } else if n >= 2 && m >= 2 && marks(n - 1, m - 1) {
        Some((n - 1, m - 1))
    } else {
        None
    };
    if let Some(pair) = pair {
        set.insert(pair);
    }
}

/// Align common runs of two or more words that contain at least one word
/// outside the stopword and punctuation lists.
pub(crate) fn align_common_ngrams(ctx: &PassContext<'_>, set: &mut AlignmentSet) {
    let lexicon = ctx.lexicon();
    let source = ctx.source.surfaces();
    let target = ctx.target.surfaces();
    for run in common_contiguous_runs(&source, &target) {
        if run.len() < 2 {
            continue;
        }
        let has_content = run
            .left
            .clone()
            .any(|p| !lexicon.is_function_word(&source[p].to_lowercase()));
        if !has_content {
            continue;
        }
        for (s, t) in run.positions() {
            set.insert((s + 1, t + 1));
        }
    }
}

/// Which matches a hyphen pass accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HyphenMatch {
    /// Two or more consecutive parts match consecutive tokens.
    Group,
    /// A single part matches a token whose lemma is not a stopword.
    Remainder,
}

/// Split unaligned hyphenated tokens on each side and align them to the
/// other sentence's tokens that spell their parts.
pub(crate) fn align_hyphenated(ctx: &PassContext<'_>, set: &mut AlignmentSet, kind: HyphenMatch) {
    align_hyphenated_side(ctx, set, kind, SentenceSide::Source);
    align_hyphenated_side(ctx, set, kind, SentenceSide::Target);
}

fn align_hyphenated_side(ctx: &PassContext<'_>, set: &mut AlignmentSet, kind: HyphenMatch, side: SentenceSide) {
    let (own, other) = match side {
        SentenceSide::Source => (ctx.source, ctx.target),
        SentenceSide::Target => (ctx.target, ctx.source),
    };
    let other_words = other.surfaces();
    let is_used = |set: &AlignmentSet, index: usize| match side {
        SentenceSide::Source => set.is_source_used(index),
        SentenceSide::Target => set.is_target_used(index),
    };
    let orient = |own_index: usize, other_index: usize| match side {
        SentenceSide::Source => (own_index, other_index),
        SentenceSide::Target => (other_index, own_index),
    };

    for token in own.tokens() {
        if is_used(set, token.index) || !token.is_hyphenated() {
            continue;
        }
        let parts: Vec<&str> = token.surface.split('-').collect();
        for run in common_contiguous_runs(&parts, &other_words) {
            let accepted = match kind {
                HyphenMatch::Group => run.len() > 1,
                HyphenMatch::Remainder => {
                    run.len() == 1
                        && other
                            .token(run.right.start + 1)
                            .map_or(false, |t| !ctx.lexicon().is_stopword(&t.lemma))
                }
            };
            if !accepted {
                continue;
            }
            for position in run.right.clone() {
                set.insert_one_to_many(orient(token.index, position + 1), side, ctx.strict());
            }
        }
    }
}
