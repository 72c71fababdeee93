//! Dependency edges stored as an arena with per-index adjacency lists.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Index of the synthetic ROOT governor.
pub const ROOT_INDEX: usize = 0;

/// `relation(governor, dependent)`, both 1-based with 0 for ROOT.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub relation: String,
    pub governor: usize,
    pub dependent: usize,
}

impl DependencyEdge {
    pub fn new(relation: impl Into<String>, governor: usize, dependent: usize) -> Self {
        Self {
            relation: relation.into(),
            governor,
            dependent,
        }
    }

    /// Parse the legacy `("rel", "gloss-7", "gloss-3")` form. Returns `None`
    /// when either index suffix is not a number (e.g. `lost-8'`).
    pub fn from_legacy(relation: &str, governor: &str, dependent: &str) -> Option<Self> {
        let governor = legacy_index(governor)?;
        let dependent = legacy_index(dependent)?;
        Some(Self::new(relation, governor, dependent))
    }
}

static LEGACY_NODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<gloss>.*)-(?P<index>\d+)$").expect("valid legacy node regex"));

fn legacy_index(node: &str) -> Option<usize> {
    LEGACY_NODE
        .captures(node)
        .and_then(|caps| caps.name("index"))
        .and_then(|m| m.as_str().parse().ok())
}

/// A parent or child of some token, reached through `relation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor<'a> {
    pub index: usize,
    pub relation: &'a str,
}

/// Edges of one sentence, indexed by governor and by dependent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyGraph {
    edges: Vec<DependencyEdge>,
    /// Edge ids by dependent index (0..=len).
    incoming: Vec<Vec<usize>>,
    /// Edge ids by governor index (0..=len).
    outgoing: Vec<Vec<usize>>,
}

impl DependencyGraph {
    /// Build the graph for a sentence of `token_count` tokens. Edges naming an
    /// index past the end of the sentence are dropped.
    pub fn new(token_count: usize, edges: Vec<DependencyEdge>) -> Self {
        let mut graph = Self {
            edges: Vec::with_capacity(edges.len()),
            incoming: vec![Vec::new(); token_count + 1],
            outgoing: vec![Vec::new(); token_count + 1],
        };
        for edge in edges {
            if edge.governor > token_count || edge.dependent > token_count {
                debug!(
                    relation = %edge.relation,
                    governor = edge.governor,
                    dependent = edge.dependent,
                    token_count,
                    "dropping out-of-range dependency edge"
                );
                continue;
            }
            let id = graph.edges.len();
            graph.incoming[edge.dependent].push(id);
            graph.outgoing[edge.governor].push(id);
            graph.edges.push(edge);
        }
        graph
    }

    /// Build from legacy string triples, skipping entries whose indices do not
    /// parse.
    pub fn from_legacy<'a, I>(token_count: usize, triples: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    {
        let edges = triples
            .into_iter()
            .filter_map(|(relation, governor, dependent)| {
                let edge = DependencyEdge::from_legacy(relation, governor, dependent);
                if edge.is_none() {
                    debug!(relation, governor, dependent, "skipping garbled dependency entry");
                }
                edge
            })
            .collect();
        Self::new(token_count, edges)
    }

    pub fn edges(&self) -> &[DependencyEdge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    fn is_dependent(&self, index: usize) -> bool {
        self.incoming.get(index).map_or(false, |ids| !ids.is_empty())
    }

    /// Governors of `index`. `word` is the token's surface form, used to
    /// recover neighbors of words folded into a collapsed relation label.
    pub fn parents(&self, index: usize, word: &str) -> Vec<Neighbor<'_>> {
        if self.is_dependent(index) {
            return self.incoming[index]
                .iter()
                .map(|&id| {
                    let edge = &self.edges[id];
                    Neighbor {
                        index: edge.governor,
                        relation: &edge.relation,
                    }
                })
                .collect();
        }
        self.collapsed_edge(index, word)
            .map(|edge| Neighbor {
                index: edge.governor,
                relation: &edge.relation,
            })
            .into_iter()
            .collect()
    }

    /// Dependents of `index`; see [`DependencyGraph::parents`].
    pub fn children(&self, index: usize, word: &str) -> Vec<Neighbor<'_>> {
        if self.is_dependent(index) {
            return self
                .outgoing
                .get(index)
                .map(|ids| {
                    ids.iter()
                        .map(|&id| {
                            let edge = &self.edges[id];
                            Neighbor {
                                index: edge.dependent,
                                relation: &edge.relation,
                            }
                        })
                        .collect()
                })
                .unwrap_or_default();
        }
        self.collapsed_edge(index, word)
            .map(|edge| Neighbor {
                index: edge.dependent,
                relation: &edge.relation,
            })
            .into_iter()
            .collect()
    }

    /// For a word that never appears as a dependent: starting at the first
    /// edge of the next dependent index, the first edge whose label is
    /// collapsed (`prep_of`, `conj_and`) and mentions the word.
    fn collapsed_edge(&self, index: usize, word: &str) -> Option<&DependencyEdge> {
        let next = (index + 1..self.incoming.len()).find(|&i| self.is_dependent(i))?;
        let start = self.edges.iter().position(|e| e.dependent == next)?;
        self.edges[start..]
            .iter()
            .find(|e| e.relation.contains('_') && e.relation.contains(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// "the house of the king": prep "of" is folded into `prep_of`.
    fn collapsed_graph() -> DependencyGraph {
        DependencyGraph::new(
            5,
            vec![
                DependencyEdge::new("root", 0, 2),
                DependencyEdge::new("det", 2, 1),
                DependencyEdge::new("det", 5, 4),
                DependencyEdge::new("prep_of", 2, 5),
            ],
        )
    }

    #[test]
    fn direct_parents_and_children() {
        let graph = collapsed_graph();
        assert_eq!(
            graph.parents(2, "house"),
            vec![Neighbor {
                index: 0,
                relation: "root"
            }]
        );
        let children: Vec<_> = graph.children(2, "house").iter().map(|n| n.index).collect();
        assert_eq!(children, vec![1, 5]);
    }

    #[test]
    fn collapsed_word_recovers_neighbors() {
        let graph = collapsed_graph();
        // "of" (3) is never a dependent; the next dependent is 4, whose first
        // edge precedes `prep_of`.
        assert_eq!(
            graph.parents(3, "of"),
            vec![Neighbor {
                index: 2,
                relation: "prep_of"
            }]
        );
        assert_eq!(
            graph.children(3, "of"),
            vec![Neighbor {
                index: 5,
                relation: "prep_of"
            }]
        );
        assert!(graph.parents(3, "in").is_empty());
    }

    #[test]
    fn no_following_dependent_means_no_neighbors() {
        let graph = DependencyGraph::new(3, vec![DependencyEdge::new("root", 0, 1)]);
        assert!(graph.parents(3, "x").is_empty());
        assert!(graph.children(3, "x").is_empty());
    }

    #[test]
    fn out_of_range_edges_are_dropped() {
        let graph = DependencyGraph::new(
            2,
            vec![
                DependencyEdge::new("root", 0, 1),
                DependencyEdge::new("dobj", 1, 7),
            ],
        );
        assert_eq!(graph.edges().len(), 1);
    }

    #[test]
    fn legacy_triples_skip_garbled_indices() {
        let graph = DependencyGraph::from_legacy(
            3,
            vec![
                ("root", "ROOT-0", "lost-2"),
                ("nsubj", "lost-2", "well-known-1"),
                ("dobj", "lost-8'", "it-3"),
            ],
        );
        assert_eq!(
            graph.edges(),
            &[
                DependencyEdge::new("root", 0, 2),
                DependencyEdge::new("nsubj", 2, 1),
            ]
        );
    }
}
