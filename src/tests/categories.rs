//! Category passes driven by dependency evidence.

use crate::alignment::AlignmentSet;
use crate::category::{align_category, PosCategory};
use crate::pass::PassContext;
use crate::{AlignerConfig, ParaphraseOracle, RelationGroupMode, Sentence, SentenceBuilder, WordAligner};

fn storm_edges(builder: SentenceBuilder, subject_relation: &str) -> Sentence {
    builder
        .edge("det", 2, 1)
        .edge(subject_relation, 3, 2)
        .edge("dobj", 3, 4)
        .edge("root", 0, 3)
        .edge("punct", 3, 5)
        .build()
}

fn storm_pair(target_subject: &str) -> (Sentence, Sentence) {
    let source = Sentence::builder()
        .word("The", "the", "DT")
        .word("storm", "storm", "NN")
        .word("struck", "strike", "VBD")
        .word("Ohio", "Ohio", "NNP")
        .word(".", ".", ".");
    let target = Sentence::builder()
        .word("The", "the", "DT")
        .word("tempest", "tempest", "NN")
        .word("hit", "hit", "VBD")
        .word("Ohio", "Ohio", "NNP")
        .word(".", ".", ".");
    (storm_edges(source, "nsubj"), storm_edges(target, target_subject))
}

const STORM_PARAPHRASES: [(&str, &str); 2] = [("struck", "hit"), ("storm", "tempest")];

#[test]
fn verb_pair_brings_its_subjects_along() {
    let (source, target) = storm_pair("nsubj");
    let aligner = WordAligner::with_paraphrases(AlignerConfig::default(), STORM_PARAPHRASES).unwrap();

    let output = aligner.align(&source, &target).unwrap();
    // The subjects are committed together with the verbs; the determiner
    // follows through its aligned governor.
    assert_eq!(output.pharaoh(), "5-5 4-4 3-3 2-2 1-1");
}

#[test]
fn verbs_without_shared_neighbors_fall_through() {
    let source = Sentence::builder()
        .word("They", "they", "PRP")
        .word("struck", "strike", "VBD")
        .build();
    let target = Sentence::builder()
        .word("It", "it", "PRP")
        .word("hit", "hit", "VBD")
        .build();
    let aligner = WordAligner::with_paraphrases(AlignerConfig::default(), STORM_PARAPHRASES).unwrap();

    // No dependency evidence, so the content pass aligns the verbs.
    let output = aligner.align(&source, &target).unwrap();
    assert_eq!(output.pharaoh(), "2-2");
}

/// Run one category pass on its own over an empty alignment.
fn category_pass(source: &Sentence, target: &Sentence, pairs: &[(&str, &str)], category: PosCategory) -> AlignmentSet {
    let config = AlignerConfig::default();
    let oracle = ParaphraseOracle::new(config.lexicon.clone()).with_pairs(pairs.iter().copied());
    let ctx = PassContext {
        source,
        target,
        config: &config,
        oracle: &oracle,
    };
    let mut set = AlignmentSet::new();
    align_category(&ctx, &mut set, category);
    set
}

#[test]
fn nouns_bridge_subject_labels_in_either_mode() {
    let (source, target) = storm_pair("xsubj");

    for mode in [RelationGroupMode::Verbatim, RelationGroupMode::Corrected] {
        let config = AlignerConfig::default().with_relation_groups(mode);
        let aligner = WordAligner::with_paraphrases(config, STORM_PARAPHRASES).unwrap();
        let set = aligner.align_set(&source, &target).unwrap();
        // Nouns still meet through the subject group of the noun table.
        assert!(set.contains((2, 2)), "{:?}: {}", mode, set);
        assert!(set.contains((3, 3)), "{:?}: {}", mode, set);
    }
}

/// "They hit" against a sentence with two `hit` verbs. Only the second one
/// has the pronoun as its subject, labelled `xsubj`.
fn pronoun_subject_pair() -> (Sentence, Sentence) {
    let source = Sentence::builder()
        .word("They", "they", "PRP")
        .word("hit", "hit", "VBD")
        .edge("nsubj", 2, 1)
        .edge("root", 0, 2)
        .build();
    let target = Sentence::builder()
        .word("Rain", "rain", "NN")
        .word("hit", "hit", "VBD")
        .word("they", "they", "PRP")
        .word("said", "say", "VBD")
        .word("then", "then", "RB")
        .word("hit", "hit", "VBD")
        .word("back", "back", "RB")
        .edge("nsubj", 2, 1)
        .edge("ccomp", 4, 2)
        .edge("nsubj", 4, 3)
        .edge("root", 0, 4)
        .edge("ccomp", 4, 6)
        .edge("advmod", 6, 5)
        .edge("xsubj", 6, 3)
        .edge("advmod", 6, 7)
        .build();
    (source, target)
}

#[test]
fn merged_subject_labels_decide_the_verb_pair() {
    let (source, target) = pronoun_subject_pair();
    let pharaoh = |mode| {
        let config = AlignerConfig::default().with_relation_groups(mode);
        let aligner = WordAligner::with_paraphrases(config, Vec::new()).unwrap();
        aligner.align(&source, &target).unwrap().pharaoh()
    };

    let verbatim = pharaoh(RelationGroupMode::Verbatim);
    let corrected = pharaoh(RelationGroupMode::Corrected);
    assert_ne!(verbatim, corrected);

    // `nsubjxsubj` matches neither label, so the verb pass finds no evidence
    // and the content pass takes the first `hit`. The pronoun has no aligned
    // dependency neighbor and stays out.
    assert_eq!(verbatim, "2-2");
    // Split labels give the second `hit` its subject as evidence; the
    // pronouns follow the verbs.
    assert_eq!(corrected, "2-6 1-3");
}

#[test]
fn adjectives_follow_related_governors() {
    let source = Sentence::builder()
        .word("a", "a", "DT")
        .word("huge", "huge", "JJ")
        .word("storm", "storm", "NN")
        .edge("det", 3, 1)
        .edge("amod", 3, 2)
        .edge("root", 0, 3)
        .build();
    let target = Sentence::builder()
        .word("a", "a", "DT")
        .word("massive", "massive", "JJ")
        .word("storm", "storm", "NN")
        .edge("det", 3, 1)
        .edge("amod", 3, 2)
        .edge("root", 0, 3)
        .build();
    let pairs = [("huge", "massive")];

    let set = category_pass(&source, &target, &pairs, PosCategory::Adjective);
    assert_eq!(set.pairs(), &[(2, 2), (3, 3)]);

    let aligner = WordAligner::with_paraphrases(AlignerConfig::default(), pairs).unwrap();
    assert_eq!(aligner.align(&source, &target).unwrap().pharaoh(), "3-3 2-2 1-1");
}

#[test]
fn adjectives_without_a_shared_governor_fall_through() {
    let source = Sentence::builder()
        .word("a", "a", "DT")
        .word("huge", "huge", "JJ")
        .word("storm", "storm", "NN")
        .edge("det", 3, 1)
        .edge("amod", 3, 2)
        .edge("root", 0, 3)
        .build();
    let target = Sentence::builder()
        .word("a", "a", "DT")
        .word("massive", "massive", "JJ")
        .word("flood", "flood", "NN")
        .edge("det", 3, 1)
        .edge("amod", 3, 2)
        .edge("root", 0, 3)
        .build();
    let pairs = [("huge", "massive")];

    assert!(category_pass(&source, &target, &pairs, PosCategory::Adjective).is_empty());

    // The content pass still pairs the adjectives; the determiners follow by
    // adjacency.
    let aligner = WordAligner::with_paraphrases(AlignerConfig::default(), pairs).unwrap();
    assert_eq!(aligner.align(&source, &target).unwrap().pharaoh(), "2-2 1-1");
}

#[test]
fn adverbs_support_each_other_through_conjunction() {
    let source = Sentence::builder()
        .word("ran", "run", "VBD")
        .word("quickly", "quickly", "RB")
        .word("and", "and", "CC")
        .word("quietly", "quietly", "RB")
        .edge("root", 0, 1)
        .edge("advmod", 1, 2)
        .edge("conj_and", 2, 4)
        .build();
    let target = Sentence::builder()
        .word("moved", "move", "VBD")
        .word("rapidly", "rapidly", "RB")
        .word("and", "and", "CC")
        .word("quietly", "quietly", "RB")
        .edge("root", 0, 1)
        .edge("advmod", 1, 2)
        .edge("conj_and", 2, 4)
        .build();

    let set = category_pass(&source, &target, &[("quickly", "rapidly")], PosCategory::Adverb);
    // The identical pair weighs more and brings its conjunct along.
    assert_eq!(set.pairs(), &[(4, 4), (2, 2)]);

    let set = category_pass(&source, &target, &[], PosCategory::Adverb);
    assert!(set.is_empty(), "{}", set);
}
