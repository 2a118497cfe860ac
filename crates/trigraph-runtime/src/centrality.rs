//! Betweenness centrality over triple graphs.
//!
//! The triple list is projected onto a petgraph `DiGraph`: predicates are
//! discarded and repeated (subject, object) pairs collapse to one edge.
//! Scores follow Brandes' algorithm on the unweighted graph, endpoints
//! excluded, normalized for directed graphs by `1 / ((n-1)(n-2))`.
//!
//! Reference: Brandes (2001) "A faster algorithm for betweenness centrality"

use indexmap::IndexMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::cmp::Ordering;
use std::collections::VecDeque;
use tracing::debug;
use trigraph_core::types::{NodeId, Triple};

/// Centrality score per node, in first-encounter order.
pub type CentralityScores = IndexMap<NodeId, f64>;

/// Directed projection of a triple list.
pub struct ProjectedGraph {
    graph: DiGraph<NodeId, ()>,
    /// Map from our NodeId to petgraph's internal index.
    node_index: IndexMap<NodeId, NodeIndex>,
}

impl ProjectedGraph {
    /// Project `edges` onto (subject, object) pairs.
    pub fn from_triples(edges: &[Triple]) -> Self {
        let mut graph = DiGraph::new();
        let mut node_index: IndexMap<NodeId, NodeIndex> = IndexMap::new();

        for edge in edges {
            for (subject, object) in edge.pairs() {
                let from = *node_index
                    .entry(subject.clone())
                    .or_insert_with(|| graph.add_node(subject.clone()));
                let to = *node_index
                    .entry(object.clone())
                    .or_insert_with(|| graph.add_node(object.clone()));
                // update_edge keeps a single edge per ordered pair.
                graph.update_edge(from, to, ());
            }
        }

        Self { graph, node_index }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Normalized betweenness centrality of every node.
    pub fn betweenness(&self) -> CentralityScores {
        let n = self.graph.node_count();
        let mut raw = vec![0.0f64; n];

        for s in self.graph.node_indices() {
            accumulate_from(&self.graph, s, &mut raw);
        }

        let scale = if n > 2 {
            1.0 / ((n - 1) as f64 * (n - 2) as f64)
        } else {
            1.0
        };

        self.node_index
            .iter()
            .map(|(id, idx)| (id.clone(), raw[idx.index()] * scale))
            .collect()
    }
}

/// One single-source pass of Brandes: BFS from `s`, then back-propagate
/// pair dependencies onto `centrality`.
fn accumulate_from(graph: &DiGraph<NodeId, ()>, s: NodeIndex, centrality: &mut [f64]) {
    let n = graph.node_count();
    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0f64; n];
    let mut dist: Vec<Option<usize>> = vec![None; n];
    let mut queue = VecDeque::new();

    sigma[s.index()] = 1.0;
    dist[s.index()] = Some(0);
    queue.push_back(s);

    while let Some(v) = queue.pop_front() {
        let vi = v.index();
        order.push(vi);
        let Some(dv) = dist[vi] else { continue };
        for w in graph.neighbors_directed(v, Direction::Outgoing) {
            let wi = w.index();
            if dist[wi].is_none() {
                dist[wi] = Some(dv + 1);
                queue.push_back(w);
            }
            if dist[wi] == Some(dv + 1) {
                sigma[wi] += sigma[vi];
                preds[wi].push(vi);
            }
        }
    }

    let mut delta = vec![0.0f64; n];
    while let Some(w) = order.pop() {
        for &v in &preds[w] {
            delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
        }
        if w != s.index() {
            centrality[w] += delta[w];
        }
    }
}

/// Normalized betweenness centrality for the nodes of `edges`.
///
/// Every node appearing in a (subject, object) pair gets a score in
/// `[0, 1]`. Empty input gives an empty map.
pub fn betweenness_centrality(edges: &[Triple]) -> CentralityScores {
    let projected = ProjectedGraph::from_triples(edges);
    debug!(
        nodes = projected.node_count(),
        edges = projected.edge_count(),
        "computing betweenness centrality"
    );
    projected.betweenness()
}

/// The `k` highest-scoring nodes. Ties keep encounter order.
pub fn top_central(scores: &CentralityScores, k: usize) -> Vec<(NodeId, f64)> {
    let mut ranked: Vec<(NodeId, f64)> = scores.iter().map(|(n, s)| (n.clone(), *s)).collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(k);
    ranked
}
