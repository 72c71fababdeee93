//! Folding prepositions and coordinators into relation labels.
//!
//! The relation tables expect the collapsed Stanford labels (`prep_in`,
//! `conj_and`), while CoreNLP's basic dependencies keep the preposition and
//! the coordinator as tokens of their own:
//!
//! ```text
//! prep(sat-2, on-3) + pobj(on-3, mat-5)  =>  prep_on(sat-2, mat-5)
//! conj(cats-1, dogs-3) + cc(cats-1, and-2)  =>  conj_and(cats-1, dogs-3)
//! ```

use crate::document::CoreNlpDependency;
use layered_align::DependencyEdge;
use tracing::debug;

/// Collapse one sentence's basic dependencies.
///
/// * `prep` takes the preposition into its label and points at the
///   preposition's first dependent; a preposition without dependents keeps
///   the plain `prep` edge.
/// * `conj` takes the first coordinator attached to either conjunct; a
///   conjunction without one is dropped.
/// * `cc` and `pobj` edges are dropped, their information now lives in the
///   labels above.
/// * Every other relation is kept, lowercased.
pub fn collapse_dependencies(dependencies: &[CoreNlpDependency]) -> Vec<DependencyEdge> {
    let mut edges = Vec::with_capacity(dependencies.len());
    for dependency in dependencies {
        let relation = dependency.dep.to_lowercase();
        match relation.as_str() {
            "prep" => {
                let object = dependencies
                    .iter()
                    .find(|d| d.governor == dependency.dependent);
                match object {
                    Some(object) => edges.push(DependencyEdge::new(
                        format!("prep_{}", dependency.dependent_gloss.to_lowercase()),
                        dependency.governor,
                        object.dependent,
                    )),
                    None => edges.push(DependencyEdge::new(
                        relation,
                        dependency.governor,
                        dependency.dependent,
                    )),
                }
            }
            "conj" => {
                let coordinator = dependencies.iter().find(|d| {
                    d.dep.eq_ignore_ascii_case("cc")
                        && (d.governor == dependency.dependent || d.governor == dependency.governor)
                });
                match coordinator {
                    Some(cc) => edges.push(DependencyEdge::new(
                        format!("conj_{}", cc.dependent_gloss.to_lowercase()),
                        dependency.governor,
                        dependency.dependent,
                    )),
                    None => debug!(
                        governor = dependency.governor,
                        dependent = dependency.dependent,
                        "dropping conjunction without coordinator"
                    ),
                }
            }
            "cc" | "pobj" => {}
            _ => edges.push(DependencyEdge::new(
                relation,
                dependency.governor,
                dependency.dependent,
            )),
        }
    }
    edges
}
