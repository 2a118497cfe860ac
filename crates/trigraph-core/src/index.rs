//! Subject-keyed edge index.
//!
//! An [`EdgeIndex`] groups triples by subject in encounter order. It is
//! built once per traversal episode and drained by extraction: each
//! node's entry can be taken exactly once, so a traversal is O(edges)
//! and terminates on cyclic input.
//!
//! Several extractions may share one index (see [`crate::components`]).
//! Build a fresh one whenever an extraction must be repeatable.

use crate::types::{NodeId, Triple};
use indexmap::IndexMap;

/// Order-preserving mapping from subject node to its outgoing triples.
#[derive(Debug, Clone, Default)]
pub struct EdgeIndex {
    entries: IndexMap<NodeId, Vec<Triple>>,
}

impl EdgeIndex {
    /// Group `edges` by subject. O(number of triples).
    pub fn build(edges: &[Triple]) -> Self {
        let mut entries: IndexMap<NodeId, Vec<Triple>> = IndexMap::new();
        for edge in edges {
            entries
                .entry(edge.subject.clone())
                .or_default()
                .push(edge.clone());
        }
        Self { entries }
    }

    /// Remove and return a node's outgoing triples.
    ///
    /// Returns `None` if the node has no outgoing edges or its entry was
    /// already consumed. Remaining entries keep their relative order.
    pub fn take(&mut self, node: &NodeId) -> Option<Vec<Triple>> {
        self.entries.shift_remove(node)
    }

    /// Outgoing triples of a node without consuming them.
    pub fn get(&self, node: &NodeId) -> Option<&[Triple]> {
        self.entries.get(node).map(Vec::as_slice)
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.entries.contains_key(node)
    }

    /// Subjects whose entries have not been consumed yet, in build order.
    pub fn subjects(&self) -> impl Iterator<Item = &NodeId> {
        self.entries.keys()
    }

    /// Number of unconsumed subject entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of triples still held by the index.
    pub fn triple_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

/// Build a fresh [`EdgeIndex`] for one traversal episode.
pub fn build_index(edges: &[Triple]) -> EdgeIndex {
    EdgeIndex::build(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_subject_in_encounter_order() {
        let edges = vec![
            Triple::new("B", "p", "C"),
            Triple::new("A", "p", "B"),
            Triple::new("B", "q", "D"),
        ];
        let index = EdgeIndex::build(&edges);

        let keys: Vec<&str> = index.subjects().map(NodeId::as_str).collect();
        assert_eq!(keys, vec!["B", "A"]);
        assert_eq!(
            index.get(&"B".into()).unwrap(),
            &[Triple::new("B", "p", "C"), Triple::new("B", "q", "D")]
        );
        assert_eq!(index.triple_count(), 3);
    }

    #[test]
    fn take_consumes_entry_once() {
        let edges = vec![Triple::new("A", "p", "B")];
        let mut index = EdgeIndex::build(&edges);

        assert_eq!(index.take(&"A".into()), Some(edges.clone()));
        assert_eq!(index.take(&"A".into()), None);
        assert!(index.is_empty());
    }

    #[test]
    fn take_preserves_remaining_order() {
        let edges = vec![
            Triple::new("A", "p", "x"),
            Triple::new("B", "p", "x"),
            Triple::new("C", "p", "x"),
        ];
        let mut index = EdgeIndex::build(&edges);
        index.take(&"A".into());

        let keys: Vec<&str> = index.subjects().map(NodeId::as_str).collect();
        assert_eq!(keys, vec!["B", "C"]);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn empty_index() {
        let index = EdgeIndex::build(&[]);
        assert!(index.is_empty());
        assert!(!index.contains(&"A".into()));
    }
}
