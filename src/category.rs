//! The part-of-speech category aligner.
//!
//! Candidate pairs of one category are scored by relatedness and by evidence
//! from dependency neighbors whose relations are equivalent for that
//! category. The best pair is committed along with the neighbor pairs that
//! supported it, until no pair with evidence remains.

use crate::alignment::{Alignment, AlignmentSet};
use crate::dependency::{Neighbor, ROOT_INDEX};
use crate::lexicon::Lexicon;
use crate::pass::PassContext;
use crate::relation_groups::{self, Configuration, RelationTable};
use crate::selection::CandidateQueue;
use crate::token::Token;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PosCategory {
    /// The order in which the category passes run.
    pub const PASS_ORDER: [PosCategory; 4] = [
        PosCategory::Verb,
        PosCategory::Noun,
        PosCategory::Adjective,
        PosCategory::Adverb,
    ];

    /// First letter of the category's Penn Treebank tags.
    pub fn tag_prefix(self) -> char {
        match self {
            PosCategory::Noun => 'n',
            PosCategory::Verb => 'v',
            PosCategory::Adjective => 'j',
            PosCategory::Adverb => 'r',
        }
    }

    pub fn relation_table(self) -> &'static RelationTable {
        match self {
            PosCategory::Noun => &relation_groups::NOUN,
            PosCategory::Verb => &relation_groups::VERB,
            PosCategory::Adjective => &relation_groups::ADJECTIVE,
            PosCategory::Adverb => &relation_groups::ADVERB,
        }
    }

    /// Tokens scored by the pass. Nouns admit personal pronouns; verbs
    /// exclude stopword lemmas (auxiliaries).
    pub fn admits(self, token: &Token, lexicon: &Lexicon) -> bool {
        match self {
            PosCategory::Noun => token.pos_starts_with('n') || token.is_pos("prp"),
            PosCategory::Verb => token.pos_starts_with('v') && !lexicon.is_stopword(&token.lemma),
            _ => token.pos_starts_with(self.tag_prefix()),
        }
    }

    /// Tokens that may be committed: the category's tags, stopwords excluded.
    pub fn selectable(self, token: &Token, lexicon: &Lexicon) -> bool {
        token.pos_starts_with(self.tag_prefix()) && !lexicon.is_stopword(&token.lemma)
    }
}

impl PosCategory {
    pub(crate) fn pass_name(self) -> &'static str {
        match self {
            PosCategory::Noun => "nouns",
            PosCategory::Verb => "verbs",
            PosCategory::Adjective => "adjectives",
            PosCategory::Adverb => "adverbs",
        }
    }
}

/// Structural support gathered for one candidate pair.
#[derive(Debug, Default)]
struct Evidence {
    weight: f64,
    /// Neighbor pairs that contributed, committed along with the pair.
    neighbors: Vec<Alignment>,
}

pub(crate) fn align_category(ctx: &PassContext<'_>, set: &mut AlignmentSet, category: PosCategory) {
    let lexicon = ctx.lexicon();
    let table = category.relation_table();
    let threshold = ctx.threshold();
    let mode = ctx.config.relation_groups;

    let free_sources: Vec<&Token> = ctx
        .source
        .tokens()
        .iter()
        .filter(|t| !set.is_source_used(t.index) && category.admits(t, lexicon))
        .collect();
    let free_targets: Vec<&Token> = ctx
        .target
        .tokens()
        .iter()
        .filter(|t| !set.is_target_used(t.index) && category.admits(t, lexicon))
        .collect();

    let mut similarity: HashMap<Alignment, f64> = HashMap::new();
    let mut evidence: HashMap<Alignment, Evidence> = HashMap::new();

    for s in &free_sources {
        let source_parents = ctx.source.dependencies().parents(s.index, &s.surface);
        let source_children = ctx.source.dependencies().children(s.index, &s.surface);
        for t in &free_targets {
            let relatedness = ctx.word_relatedness(s, t);
            if relatedness < threshold {
                continue;
            }
            similarity.insert((s.index, t.index), relatedness);

            let target_parents = ctx.target.dependencies().parents(t.index, &t.surface);
            let target_children = ctx.target.dependencies().children(t.index, &t.surface);
            for configuration in table.order {
                let (source_side, target_side): (&[Neighbor<'_>], &[Neighbor<'_>]) = match configuration {
                    Configuration::ParentParent => (&source_parents, &target_parents),
                    Configuration::ChildChild => (&source_children, &target_children),
                    Configuration::ParentChild => (&source_parents, &target_children),
                    Configuration::ChildParent => (&source_children, &target_parents),
                };
                for k in source_side {
                    for l in target_side {
                        let score = ctx.neighbor_relatedness(k.index, l.index);
                        if score < threshold || !table.equivalent(configuration, k.relation, l.relation, mode) {
                            continue;
                        }
                        let entry = evidence.entry((s.index, t.index)).or_default();
                        entry.weight += score;
                        entry.neighbors.push((k.index, l.index));
                    }
                }
            }
        }
    }

    let mut queue = CandidateQueue::new();
    for (&(s, t), support) in &evidence {
        let selectable = ctx.source.token(s).map_or(false, |tok| category.selectable(tok, lexicon))
            && ctx.target.token(t).map_or(false, |tok| category.selectable(tok, lexicon));
        if selectable {
            queue.push(s, t, ctx.config.weigh(similarity[&(s, t)], support.weight));
        }
    }

    for _ in 0..free_sources.len() {
        let Some((s, t)) = queue.pop_best(|s, t| !set.is_source_used(s) && !set.is_target_used(t)) else {
            break;
        };
        set.insert((s, t));
        // Cascade the neighbor pairs that supported this one.
        if let Some(support) = evidence.get(&(s, t)) {
            for &(k, l) in &support.neighbors {
                if k != ROOT_INDEX && l != ROOT_INDEX {
                    set.insert((k, l));
                }
            }
        }
    }
}
