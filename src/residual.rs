//! Passes over the words the structural passes left unaligned.
//!
//! Each pass scores its candidates once, then repeatedly takes the best
//! remaining pair. The taken pair's indices leave the candidate pool whether
//! or not the pair is committed.

use crate::alignment::{Alignment, AlignmentSet};
use crate::pass::PassContext;
use crate::selection::CandidateQueue;
use crate::sublist::textual_neighborhood;
use std::collections::{HashMap, HashSet};

/// A scored candidate pair.
#[derive(Debug, Clone, Copy)]
struct Scored {
    relatedness: f64,
    evidence: f64,
}

/// Candidates of one residual pass.
#[derive(Debug, Default)]
struct Pool {
    scores: HashMap<Alignment, Scored>,
    queue: CandidateQueue,
}

impl Pool {
    fn add(&mut self, ctx: &PassContext<'_>, pair: Alignment, relatedness: f64, evidence: f64) {
        self.scores.insert(pair, Scored { relatedness, evidence });
        self.queue.push(pair.0, pair.1, ctx.config.weigh(relatedness, evidence));
    }

    /// Take best pairs until the pool is exhausted, committing those `accept`
    /// approves.
    fn drain<F>(mut self, set: &mut AlignmentSet, mut accept: F)
    where
        F: FnMut(Alignment, Scored) -> bool,
    {
        let mut taken_sources = HashSet::new();
        let mut taken_targets = HashSet::new();
        loop {
            let next = self.queue.pop_best(|s, t| {
                !taken_sources.contains(&s)
                    && !taken_targets.contains(&t)
                    && !set.is_source_used(s)
                    && !set.is_target_used(t)
            });
            let Some(pair) = next else {
                break;
            };
            taken_sources.insert(pair.0);
            taken_targets.insert(pair.1);
            let Some(&scored) = self.scores.get(&pair) else {
                continue;
            };
            if accept(pair, scored) {
                set.insert(pair);
            }
        }
    }
}

/// Content words, with evidence from related words in their textual
/// neighborhoods.
pub(crate) fn align_content_words(ctx: &PassContext<'_>, set: &mut AlignmentSet) {
    let lexicon = ctx.lexicon();
    let threshold = ctx.threshold();
    let mut pool = Pool::default();

    for s in ctx.source.tokens() {
        if set.is_source_used(s.index) || lexicon.is_closed_class(&s.lemma) {
            continue;
        }
        let source_neighborhood = textual_neighborhood(ctx.source, s.index, lexicon);
        for t in ctx.target.tokens() {
            if set.is_target_used(t.index) || lexicon.is_closed_class(&t.lemma) {
                continue;
            }
            let target_neighborhood = textual_neighborhood(ctx.target, t.index, lexicon);
            let mut evidence = 0.0;
            for k in &source_neighborhood {
                for l in &target_neighborhood {
                    let score = ctx.untagged_relatedness(k, l);
                    if set.contains((k.index, l.index)) || score >= threshold {
                        evidence += score;
                    }
                }
            }
            pool.add(ctx, (s.index, t.index), ctx.word_relatedness(s, t), evidence);
        }
    }

    pool.drain(set, |(s, _), scored| {
        scored.relatedness >= threshold
            && ctx
                .source
                .token(s)
                .map_or(false, |token| !lexicon.is_stopword(&token.lemma))
    });
}

/// Stopwords, with evidence from aligned dependency neighbors.
pub(crate) fn align_stopwords_by_dependencies(ctx: &PassContext<'_>, set: &mut AlignmentSet) {
    let lexicon = ctx.lexicon();
    let threshold = ctx.threshold();
    let mut pool = Pool::default();

    for s in ctx.source.tokens() {
        if set.is_source_used(s.index) || !lexicon.is_stopword(&s.lemma) {
            continue;
        }
        let source_parents = ctx.source.dependencies().parents(s.index, &s.surface);
        let source_children = ctx.source.dependencies().children(s.index, &s.surface);
        for t in ctx.target.tokens() {
            if set.is_target_used(t.index) || !lexicon.is_stopword(&t.lemma) {
                continue;
            }
            if s.lemma != t.lemma && ctx.lemma_relatedness(s, t) < threshold {
                continue;
            }
            let target_parents = ctx.target.dependencies().parents(t.index, &t.surface);
            let target_children = ctx.target.dependencies().children(t.index, &t.surface);

            let mut evidence = 0.0;
            for (ours, theirs) in [(&source_parents, &target_parents), (&source_children, &target_children)] {
                for k in ours {
                    for l in theirs {
                        if set.contains((k.index, l.index)) {
                            evidence += 1.0;
                        }
                    }
                }
            }
            pool.add(ctx, (s.index, t.index), ctx.word_relatedness(s, t), evidence);
        }
    }

    pool.drain(set, |_, scored| scored.relatedness >= threshold && scored.evidence > 0.0);
}

/// Stopwords and punctuation, with evidence from aligned adjacent tokens.
pub(crate) fn align_function_words_by_adjacency(ctx: &PassContext<'_>, set: &mut AlignmentSet) {
    let lexicon = ctx.lexicon();
    let threshold = ctx.threshold();
    let mut pool = Pool::default();

    for s in ctx.source.tokens() {
        if set.is_source_used(s.index) || !lexicon.is_closed_class(&s.lemma) {
            continue;
        }
        for t in ctx.target.tokens() {
            if set.is_target_used(t.index) || !lexicon.is_closed_class(&t.lemma) {
                continue;
            }
            if ctx.lemma_relatedness(s, t) < threshold {
                continue;
            }
            let before = s.index > 1 && t.index > 1 && set.contains((s.index - 1, t.index - 1));
            let after = set.contains((s.index + 1, t.index + 1));
            let evidence = f64::from(u8::from(before) + u8::from(after));
            pool.add(ctx, (s.index, t.index), ctx.word_relatedness(s, t), evidence);
        }
    }

    pool.drain(set, |_, scored| scored.relatedness >= threshold && scored.evidence > 0.0);
}
