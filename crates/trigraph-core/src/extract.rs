//! Rooted subgraph extraction.
//!
//! Frontier expansion over an [`EdgeIndex`]: starting from a root, every
//! reached node's outgoing triples are moved from the index into the
//! result. The worklist is FIFO so the output order is reproducible.

use crate::algebra;
use crate::index::{build_index, EdgeIndex};
use crate::types::{NodeId, NodeSet, Triple};
use indexmap::IndexSet;
use std::collections::VecDeque;
use tracing::trace;

/// Every triple transitively reachable from `root` by following
/// subject→object edges.
///
/// Consumes the entries it visits from `index`. A root with no entry
/// (never a subject, or already consumed by an earlier extraction on the
/// same index) yields an empty result. Calling this twice with the same
/// root on the same index does not give the same answer; build a fresh
/// index per call when that matters.
pub fn extract_rooted(root: &NodeId, index: &mut EdgeIndex) -> Vec<Triple> {
    let Some(seed) = index.take(root) else {
        return Vec::new();
    };

    let mut worklist: VecDeque<NodeId> = seed.iter().flat_map(|t| t.objects().cloned()).collect();
    let mut found: IndexSet<Triple> = seed.into_iter().collect();

    while let Some(node) = worklist.pop_front() {
        // Leaves and already-consumed nodes have no entry.
        if let Some(edges) = index.take(&node) {
            worklist.extend(edges.iter().flat_map(|t| t.objects().cloned()));
            found.extend(edges);
        }
    }

    trace!(
        root = %root,
        triples = found.len(),
        remaining = index.len(),
        "extracted rooted subgraph"
    );
    found.into_iter().collect()
}

/// Rooted extraction with a private index, leaving no shared state.
pub fn extract_rooted_fresh(root: &NodeId, edges: &[Triple]) -> Vec<Triple> {
    let mut index = build_index(edges);
    extract_rooted(root, &mut index)
}

/// Concatenated rooted extractions of `roots`, in the order given, over
/// one shared index.
///
/// Later roots only receive what earlier roots left behind, so no triple
/// appears twice.
pub fn filter_by_roots<'a>(
    edges: &[Triple],
    roots: impl IntoIterator<Item = &'a NodeId>,
) -> Vec<Triple> {
    let mut index = build_index(edges);
    roots
        .into_iter()
        .flat_map(|root| extract_rooted(root, &mut index))
        .collect()
}

/// Nodes that can reach `node` by following subject→object edges.
///
/// Traverses the reversed relation. On cyclic input `node` itself can be
/// among its own ancestors.
pub fn ancestors(node: &NodeId, edges: &[Triple]) -> NodeSet {
    let reversed: Vec<Triple> = edges.iter().flat_map(|t| t.reversed()).collect();
    algebra::objects(&extract_rooted_fresh(node, &reversed))
}

/// Nodes reachable from `node` by following subject→object edges.
pub fn descendants(node: &NodeId, edges: &[Triple]) -> NodeSet {
    algebra::objects(&extract_rooted_fresh(node, edges))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(set: &NodeSet) -> Vec<&str> {
        let mut v: Vec<&str> = set.iter().map(NodeId::as_str).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn absent_root_yields_nothing() {
        let edges = vec![Triple::new("A", "p", "B")];
        let mut index = EdgeIndex::build(&edges);
        assert!(extract_rooted(&"Z".into(), &mut index).is_empty());
        assert!(extract_rooted(&"B".into(), &mut index).is_empty());
        assert_eq!(index.len(), 1, "failed lookups must not consume anything");
    }

    #[test]
    fn follows_edges_transitively() {
        let edges = vec![
            Triple::new("A", "p", "B"),
            Triple::new("B", "p", "C"),
            Triple::new("C", "p", "D"),
            Triple::new("X", "p", "Y"),
        ];
        let mut index = EdgeIndex::build(&edges);
        let got = extract_rooted(&"A".into(), &mut index);
        assert_eq!(got, edges[..3].to_vec());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn terminates_on_cycles() {
        let edges = vec![
            Triple::new("A", "p", "B"),
            Triple::new("B", "p", "C"),
            Triple::new("C", "p", "A"),
        ];
        let got = extract_rooted_fresh(&"B".into(), &edges);
        assert_eq!(got.len(), 3);
        assert_eq!(got[0], Triple::new("B", "p", "C"));
    }

    #[test]
    fn follows_parallel_objects() {
        let edges = vec![
            Triple::many("A", "p", ["B", "C"]),
            Triple::new("C", "q", "D"),
            Triple::new("B", "q", "E"),
        ];
        let got = extract_rooted_fresh(&"A".into(), &edges);
        assert_eq!(
            got,
            vec![
                Triple::many("A", "p", ["B", "C"]),
                Triple::new("B", "q", "E"),
                Triple::new("C", "q", "D"),
            ]
        );
    }

    #[test]
    fn duplicate_triples_are_collapsed() {
        let edges = vec![
            Triple::new("A", "p", "B"),
            Triple::new("A", "p", "B"),
            Triple::new("B", "p", "C"),
        ];
        let got = extract_rooted_fresh(&"A".into(), &edges);
        assert_eq!(got, vec![Triple::new("A", "p", "B"), Triple::new("B", "p", "C")]);
    }

    #[test]
    fn shared_index_gives_later_roots_the_remainder() {
        let edges = vec![
            Triple::new("A", "p", "B"),
            Triple::new("B", "p", "C"),
            Triple::new("D", "p", "B"),
        ];
        let mut index = EdgeIndex::build(&edges);
        let first = extract_rooted(&"A".into(), &mut index);
        let second = extract_rooted(&"D".into(), &mut index);

        assert_eq!(first.len(), 2);
        // B was already consumed by A's traversal.
        assert_eq!(second, vec![Triple::new("D", "p", "B")]);
        assert!(index.is_empty());
    }

    #[test]
    fn repeat_on_same_index_is_empty() {
        let edges = vec![Triple::new("A", "p", "B")];
        let mut index = EdgeIndex::build(&edges);
        assert_eq!(extract_rooted(&"A".into(), &mut index).len(), 1);
        assert!(extract_rooted(&"A".into(), &mut index).is_empty());
    }

    #[test]
    fn filter_by_roots_does_not_repeat_triples() {
        let edges = vec![
            Triple::new("A", "p", "B"),
            Triple::new("B", "p", "C"),
            Triple::new("D", "p", "B"),
        ];
        let roots = [NodeId::from("D"), NodeId::from("A")];
        let got = filter_by_roots(&edges, &roots);
        assert_eq!(
            got,
            vec![
                Triple::new("D", "p", "B"),
                Triple::new("B", "p", "C"),
                Triple::new("A", "p", "B"),
            ]
        );
    }

    #[test]
    fn ancestors_of_chain_end() {
        let edges = vec![Triple::new("A", "p", "B"), Triple::new("B", "p", "C")];
        assert_eq!(ids(&ancestors(&"C".into(), &edges)), vec!["A", "B"]);
        assert_eq!(ids(&ancestors(&"B".into(), &edges)), vec!["A"]);
        assert!(ancestors(&"A".into(), &edges).is_empty());
    }

    #[test]
    fn ancestors_through_parallel_objects() {
        let edges = vec![
            Triple::many("A", "p", ["B", "C"]),
            Triple::new("X", "p", "C"),
        ];
        assert_eq!(ids(&ancestors(&"C".into(), &edges)), vec!["A", "X"]);
    }

    #[test]
    fn descendants_mirror_ancestors() {
        let edges = vec![
            Triple::new("A", "p", "B"),
            Triple::new("B", "p", "C"),
            Triple::new("D", "p", "C"),
        ];
        assert_eq!(ids(&descendants(&"A".into(), &edges)), vec!["B", "C"]);
        assert_eq!(ids(&descendants(&"D".into(), &edges)), vec!["C"]);
        assert!(descendants(&"C".into(), &edges).is_empty());
    }
}
