//! Per-category tables of interchangeable dependency relations.

use crate::config::RelationGroupMode;

/// One entry of a relation group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    One(&'static str),
    /// Two labels written without a separator in the reference tables.
    /// See [`RelationGroupMode`].
    Merged(&'static str, &'static str),
}

impl Label {
    fn matches(self, relation: &str, mode: RelationGroupMode) -> bool {
        match (self, mode) {
            (Label::One(label), _) => relation == label,
            (Label::Merged(a, b), RelationGroupMode::Verbatim) => {
                relation.len() == a.len() + b.len() && relation.starts_with(a) && relation.ends_with(b)
            }
            (Label::Merged(a, b), RelationGroupMode::Corrected) => relation == a || relation == b,
        }
    }
}

pub type Group = &'static [Label];

fn in_group(group: Group, relation: &str, mode: RelationGroupMode) -> bool {
    group.iter().any(|label| label.matches(relation, mode))
}

/// Which neighbors of the source and target candidates are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Configuration {
    ParentParent,
    ChildChild,
    /// Source parent against target child.
    ParentChild,
    /// Source child against target parent.
    ChildParent,
}

/// Relation groups for one POS category.
#[derive(Debug)]
pub struct RelationTable {
    /// Order in which the configurations contribute evidence.
    pub order: [Configuration; 4],
    pub parent: &'static [Group],
    pub child: &'static [Group],
    /// `(parent side, child side)` pairs for the mixed configurations.
    pub opposite: &'static [(Group, Group)],
}

impl RelationTable {
    /// Whether a source neighbor reached through `source` and a target
    /// neighbor reached through `target` are equivalent under `configuration`.
    pub fn equivalent(&self, configuration: Configuration, source: &str, target: &str, mode: RelationGroupMode) -> bool {
        if source == target {
            return true;
        }
        match configuration {
            Configuration::ParentParent => same_group(self.parent, source, target, mode),
            Configuration::ChildChild => same_group(self.child, source, target, mode),
            Configuration::ParentChild => self
                .opposite
                .iter()
                .any(|&(parent, child)| in_group(parent, source, mode) && in_group(child, target, mode)),
            Configuration::ChildParent => self
                .opposite
                .iter()
                .any(|&(parent, child)| in_group(child, source, mode) && in_group(parent, target, mode)),
        }
    }
}

fn same_group(groups: &[Group], source: &str, target: &str, mode: RelationGroupMode) -> bool {
    groups
        .iter()
        .any(|group| in_group(group, source, mode) && in_group(group, target, mode))
}

use Configuration::*;
use Label::{Merged, One};

const CONJ_AND: Group = &[One("conj_and")];
const CONJ_OR: Group = &[One("conj_or")];
const CONJ_NOR: Group = &[One("conj_nor")];

const NOUN_GOVERNORS: Group = &[
    One("pos"),
    One("nn"),
    One("prep_of"),
    One("prep_in"),
    One("prep_at"),
    One("prep_for"),
];
const SUBJECTS: Group = &[One("agent"), One("nsubj"), One("xsubj")];
const OBJECTS: Group = &[
    One("ccomp"),
    One("dobj"),
    One("nsubjpass"),
    One("rel"),
    One("partmod"),
];
const MODIFIER_CLAUSES: Group = &[One("infmod"), One("partmod"), One("rcmod")];
const ADJECTIVAL: Group = &[One("amod"), One("rcmod")];
const INDIRECT_OBJECTS: Group = &[One("iobj"), One("prep_to")];
const PURPOSE: Group = &[One("purpcl"), One("xcomp")];

pub static NOUN: RelationTable = RelationTable {
    order: [ParentParent, ChildChild, ParentChild, ChildParent],
    parent: &[
        NOUN_GOVERNORS,
        SUBJECTS,
        OBJECTS,
        &[Merged("tmod", "prep_in"), One("prep_at"), One("prep_on")],
        INDIRECT_OBJECTS,
    ],
    child: &[
        &[
            One("pos"),
            Merged("nn", "prep_of"),
            One("prep_in"),
            One("prep_at"),
            One("prep_for"),
        ],
        MODIFIER_CLAUSES,
        ADJECTIVAL,
    ],
    opposite: &[
        (&[One("nsubj")], ADJECTIVAL),
        (OBJECTS, MODIFIER_CLAUSES),
        (CONJ_AND, CONJ_AND),
        (CONJ_OR, CONJ_OR),
        (CONJ_NOR, CONJ_NOR),
    ],
};

pub static VERB: RelationTable = RelationTable {
    order: [ChildChild, ParentParent, ParentChild, ChildParent],
    parent: &[MODIFIER_CLAUSES, PURPOSE],
    child: &[
        &[One("agent"), Merged("nsubj", "xsubj")],
        &[
            One("ccomp"),
            Merged("dobj", "nsubjpass"),
            One("rel"),
            One("partmod"),
        ],
        &[One("tmod"), One("prep_in"), One("prep_at"), One("prep_on")],
        INDIRECT_OBJECTS,
        PURPOSE,
    ],
    opposite: &[
        (&[One("cop"), One("csubj")], &[One("acomp")]),
        (&[One("csubj")], &[One("csubjpass")]),
        (CONJ_AND, CONJ_AND),
        (CONJ_OR, CONJ_OR),
        (CONJ_NOR, CONJ_NOR),
    ],
};

pub static ADJECTIVE: RelationTable = RelationTable {
    order: [ParentParent, ChildChild, ParentChild, ChildParent],
    parent: &[ADJECTIVAL],
    child: &[],
    opposite: &[
        (ADJECTIVAL, &[One("nsubj")]),
        (&[One("acomp")], &[One("cop"), One("csubj")]),
        (CONJ_AND, CONJ_AND),
        (CONJ_OR, CONJ_OR),
        (CONJ_NOR, CONJ_NOR),
    ],
};

pub static ADVERB: RelationTable = RelationTable {
    order: [ParentParent, ChildChild, ParentChild, ChildParent],
    parent: &[],
    child: &[],
    opposite: &[(CONJ_AND, CONJ_AND), (CONJ_OR, CONJ_OR), (CONJ_NOR, CONJ_NOR)],
};

#[cfg(test)]
mod tests {
    use super::*;

    const V: RelationGroupMode = RelationGroupMode::Verbatim;
    const C: RelationGroupMode = RelationGroupMode::Corrected;

    #[test]
    fn identical_labels_always_match() {
        assert!(ADVERB.equivalent(ParentParent, "advmod", "advmod", V));
        assert!(!ADVERB.equivalent(ParentParent, "advmod", "amod", V));
    }

    #[test]
    fn same_direction_groups() {
        assert!(NOUN.equivalent(ParentParent, "nsubj", "agent", V));
        assert!(NOUN.equivalent(ParentParent, "prep_of", "pos", V));
        assert!(!NOUN.equivalent(ChildChild, "nsubj", "agent", V));
        assert!(VERB.equivalent(ChildChild, "purpcl", "xcomp", V));
    }

    #[test]
    fn merged_labels_depend_on_mode() {
        assert!(!NOUN.equivalent(ParentParent, "tmod", "prep_on", V));
        assert!(NOUN.equivalent(ParentParent, "tmod", "prep_on", C));
        assert!(NOUN.equivalent(ParentParent, "tmodprep_in", "prep_on", V));
        assert!(!VERB.equivalent(ChildChild, "nsubj", "agent", V));
        assert!(VERB.equivalent(ChildChild, "nsubj", "agent", C));
        assert!(NOUN.equivalent(ParentParent, "prep_at", "prep_on", V));
        assert!(!NOUN.equivalent(ParentParent, "prep_in", "prep_on", V));
    }

    #[test]
    fn opposite_groups_respect_direction() {
        assert!(NOUN.equivalent(ParentChild, "nsubj", "amod", V));
        assert!(!NOUN.equivalent(ParentChild, "amod", "nsubj", V));
        assert!(NOUN.equivalent(ChildParent, "rcmod", "nsubj", V));
        assert!(ADJECTIVE.equivalent(ParentChild, "acomp", "csubj", V));
        assert!(VERB.equivalent(ParentChild, "cop", "acomp", V));
    }
}
