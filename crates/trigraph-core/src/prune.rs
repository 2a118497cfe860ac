//! Leaf pruning.
//!
//! Removes triples pointing at terminal nodes that a caller rule flags.
//! One call peels one layer; [`peel_leaves`] repeats until nothing more
//! comes off.

use crate::algebra;
use crate::filter::TripleFilter;
use crate::types::{NodeSet, Triple};
use serde::Serialize;
use tracing::debug;

/// Drop every triple whose object is a leaf flagged by `rule`.
///
/// A leaf is excluded when at least one triple pointing at it matches
/// `rule`; then all triples pointing at it go. Non-leaf objects are never
/// removed. A triple with several objects is dropped if any of them is
/// excluded.
pub fn prune_leaves<F>(edges: &[Triple], rule: &F) -> Vec<Triple>
where
    F: TripleFilter + ?Sized,
{
    let excluded = excluded_leaves(edges, rule);
    if excluded.is_empty() {
        return edges.to_vec();
    }
    edges
        .iter()
        .filter(|t| !t.objects().any(|o| excluded.contains(o)))
        .cloned()
        .collect()
}

/// The leaves that [`prune_leaves`] would cut.
pub fn excluded_leaves<F>(edges: &[Triple], rule: &F) -> NodeSet
where
    F: TripleFilter + ?Sized,
{
    let flagged: NodeSet = edges
        .iter()
        .filter(|t| rule.matches(t))
        .flat_map(|t| t.objects().cloned())
        .collect();
    algebra::leaves(edges)
        .into_iter()
        .filter(|leaf| flagged.contains(leaf))
        .collect()
}

/// Outcome of repeated leaf pruning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeelResult {
    pub triples: Vec<Triple>,
    /// Layers that actually removed something.
    pub layers: usize,
    pub removed: usize,
}

/// Apply [`prune_leaves`] up to `max_layers` times, stopping early once a
/// layer removes nothing.
pub fn peel_leaves<F>(edges: &[Triple], rule: &F, max_layers: usize) -> PeelResult
where
    F: TripleFilter + ?Sized,
{
    let mut current = edges.to_vec();
    let mut layers = 0;
    while layers < max_layers {
        let next = prune_leaves(&current, rule);
        if next.len() == current.len() {
            break;
        }
        layers += 1;
        debug!(layer = layers, removed = current.len() - next.len(), "peeled leaf layer");
        current = next;
    }
    PeelResult {
        removed: edges.len() - current.len(),
        triples: current,
        layers,
    }
}
