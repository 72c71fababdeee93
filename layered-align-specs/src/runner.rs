//! Runs fixtures through the aligner and compares the result.

use crate::errors::SpecResult;
use crate::fixture::AlignmentFixture;
use layered_align::{AlignerConfig, Alignment, WordAligner};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// The comparison of one fixture's expected and produced alignments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureOutcome {
    /// Produced pairs, in commit order.
    pub actual: Vec<Alignment>,
    /// Expected pairs the aligner did not produce.
    pub missing: Vec<Alignment>,
    /// Produced pairs the fixture does not expect.
    pub unexpected: Vec<Alignment>,
    /// `(expected, actual)` Pharaoh strings when they differ.
    pub pharaoh_mismatch: Option<(String, String)>,
}

impl FixtureOutcome {
    pub fn passed(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty() && self.pharaoh_mismatch.is_none()
    }
}

impl fmt::Display for FixtureOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return f.write_str("ok");
        }
        let pairs = |pairs: &[Alignment]| {
            pairs
                .iter()
                .map(|(s, t)| format!("{}-{}", s, t))
                .collect::<Vec<_>>()
                .join(" ")
        };
        let mut lines = Vec::new();
        if !self.missing.is_empty() {
            lines.push(format!("missing: {}", pairs(&self.missing)));
        }
        if !self.unexpected.is_empty() {
            lines.push(format!("unexpected: {}", pairs(&self.unexpected)));
        }
        if let Some((expected, actual)) = &self.pharaoh_mismatch {
            lines.push(format!("pharaoh: expected {:?}, got {:?}", expected, actual));
        }
        f.write_str(&lines.join("\n"))
    }
}

/// Align the fixture's sentence pair with `config` (or the fixture's own
/// configuration) and the fixture's paraphrases.
pub fn run_fixture(fixture: &AlignmentFixture, config: &AlignerConfig) -> SpecResult<FixtureOutcome> {
    let config = fixture.config.clone().unwrap_or_else(|| config.clone());
    let paraphrases = fixture
        .paraphrases
        .iter()
        .map(|(a, b)| (a.as_str(), b.as_str()));
    let aligner = WordAligner::with_paraphrases(config, paraphrases)?;

    let source = fixture.source.to_sentence();
    let target = fixture.target.to_sentence();
    let output = aligner.align(&source, &target)?;

    let expected: BTreeSet<Alignment> = fixture.expected.iter().copied().collect();
    let actual: BTreeSet<Alignment> = output.pairs.iter().copied().collect();
    let pharaoh = output.pharaoh();

    let outcome = FixtureOutcome {
        missing: expected.difference(&actual).copied().collect(),
        unexpected: actual.difference(&expected).copied().collect(),
        pharaoh_mismatch: fixture
            .pharaoh
            .as_ref()
            .filter(|wanted| **wanted != pharaoh)
            .map(|wanted| (wanted.clone(), pharaoh.clone())),
        actual: output.pairs,
    };
    debug!(
        title = fixture.title.as_deref().unwrap_or("untitled"),
        passed = outcome.passed(),
        "fixture finished"
    );
    Ok(outcome)
}

/// One line per fixture, then the totals.
pub fn format_summary(results: &[(String, FixtureOutcome)]) -> String {
    let mut out = String::new();
    for (name, outcome) in results {
        let status = if outcome.passed() { "PASS" } else { "FAIL" };
        out.push_str(&format!("{} {}\n", status, name));
        if !outcome.passed() {
            for line in outcome.to_string().lines() {
                out.push_str(&format!("    {}\n", line));
            }
        }
    }
    let passed = results.iter().filter(|(_, o)| o.passed()).count();
    out.push_str(&format!("{}/{} fixtures passed", passed, results.len()));
    out
}
