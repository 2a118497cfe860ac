//! Component summaries, graph statistics, and JSON output.
//!
//! Summaries describe each connected component by size and by its entry
//! and terminal nodes, suitable for printing or writing to disk.

use serde::Serialize;
use std::path::Path;
use tracing::debug;
use trigraph_core::algebra::{concepts, leaves, predicates, roots};
use trigraph_core::components::{components_with, MergeStrategy};
use trigraph_core::error::{Result, TrigraphError};
use trigraph_core::types::{NodeSet, Triple};

/// One connected component, described by its shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentSummary {
    /// 1-based position in the size-ordered component list.
    pub rank: usize,
    /// Number of triples in the component.
    pub triples: usize,
    /// Number of distinct concept nodes.
    pub concepts: usize,
    pub roots: NodeSet,
    pub leaves: NodeSet,
}

/// Summarize already-computed components, keeping their order.
pub fn summarize_components(components: &[Vec<Triple>]) -> Vec<ComponentSummary> {
    components
        .iter()
        .enumerate()
        .map(|(i, component)| ComponentSummary {
            rank: i + 1,
            triples: component.len(),
            concepts: concepts(component).len(),
            roots: roots(component),
            leaves: leaves(component),
        })
        .collect()
}

/// Whole-graph statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub triples: usize,
    pub concepts: usize,
    pub roots: usize,
    pub leaves: usize,
    pub predicates: usize,
    pub components: usize,
    /// Triple count of the largest component.
    pub largest_component: usize,
}

/// Compute [`GraphStats`] for `edges`.
pub fn graph_stats(edges: &[Triple]) -> GraphStats {
    graph_stats_with(edges, MergeStrategy::default())
}

/// [`graph_stats`] with an explicit component merge strategy.
pub fn graph_stats_with(edges: &[Triple], strategy: MergeStrategy) -> GraphStats {
    let components = components_with(edges, strategy);
    let stats = GraphStats {
        triples: edges.len(),
        concepts: concepts(edges).len(),
        roots: roots(edges).len(),
        leaves: leaves(edges).len(),
        predicates: predicates(edges).len(),
        components: components.len(),
        largest_component: components.first().map_or(0, Vec::len),
    };
    debug!(?stats, "computed graph statistics");
    stats
}

/// Serialize `value` as JSON to `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    std::fs::write(path, json)
        .map_err(|e| TrigraphError::Io(format!("{}: {e}", path.display())))?;
    debug!(path = %path.display(), "wrote JSON output");
    Ok(())
}
