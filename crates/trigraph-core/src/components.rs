//! Connected-component partitioning of triple lists.
//!
//! Two strategies produce the same partition:
//!
//! 1. **Pairwise** (default): one rooted extraction per distinct subject
//!    against a single shared [`EdgeIndex`], then candidates that share a
//!    concept node are merged until a full pass absorbs nothing.
//! 2. **DisjointSet**: union-find over concept nodes, one union per
//!    subject/object pair.
//!
//! Components are returned largest first. Equal sizes are ordered by the
//! input position of each component's earliest triple.

use crate::algebra;
use crate::extract::extract_rooted;
use crate::index::EdgeIndex;
use crate::types::{NodeId, Triple};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// How candidate subgraphs are assembled into components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergeStrategy {
    /// Shared-index extraction followed by a merge-to-fixpoint pass.
    #[default]
    Pairwise,
    /// Union-find over concept nodes.
    DisjointSet,
}

/// Partition `edges` into maximal connected components.
pub fn connected_components(edges: &[Triple]) -> Vec<Vec<Triple>> {
    components_with(edges, MergeStrategy::Pairwise)
}

/// Partition `edges` with an explicit strategy.
pub fn components_with(edges: &[Triple], strategy: MergeStrategy) -> Vec<Vec<Triple>> {
    let components = match strategy {
        MergeStrategy::Pairwise => pairwise(edges),
        MergeStrategy::DisjointSet => disjoint_set(edges),
    };
    order_by_size(components, edges)
}

/// The largest component. Empty input gives an empty list.
///
/// Among several equally large components, which one is returned follows
/// the tie order of [`components_with`]; callers should not rely on it.
pub fn biggest_component(edges: &[Triple]) -> Vec<Triple> {
    connected_components(edges)
        .into_iter()
        .next()
        .unwrap_or_default()
}

/// A rooted subgraph plus the concept nodes it touches.
#[derive(Debug, Default)]
struct Candidate {
    triples: Vec<Triple>,
    concepts: HashSet<NodeId>,
}

impl Candidate {
    fn new(triples: Vec<Triple>) -> Self {
        let concepts = algebra::concepts(&triples).into_iter().collect();
        Self { triples, concepts }
    }

    fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    fn shares_concept(&self, other: &Candidate) -> bool {
        let (small, large) = if self.concepts.len() <= other.concepts.len() {
            (&self.concepts, &other.concepts)
        } else {
            (&other.concepts, &self.concepts)
        };
        small.iter().any(|n| large.contains(n))
    }

    fn absorb(&mut self, other: Candidate) {
        self.triples.extend(other.triples);
        self.concepts.extend(other.concepts);
    }
}

fn pairwise(edges: &[Triple]) -> Vec<Vec<Triple>> {
    let mut index = EdgeIndex::build(edges);

    // The first root to reach a region consumes it; later roots in the
    // same region come back partial or empty.
    let mut candidates: Vec<Candidate> = algebra::subjects(edges)
        .iter()
        .map(|root| Candidate::new(extract_rooted(root, &mut index)))
        .collect();
    let extracted = candidates.len();

    // Largest first.
    candidates.sort_by(|a, b| b.triples.len().cmp(&a.triples.len()));

    // One linear pass is not enough: A may only overlap B after B has
    // absorbed C, so rescan until a pass is quiet.
    let mut passes = 0;
    loop {
        passes += 1;
        let mut absorbed = 0;
        for i in 0..candidates.len() {
            if candidates[i].is_empty() {
                continue;
            }
            for j in 0..candidates.len() {
                if i == j || candidates[j].is_empty() {
                    continue;
                }
                if candidates[i].shares_concept(&candidates[j]) {
                    let other = std::mem::take(&mut candidates[j]);
                    candidates[i].absorb(other);
                    absorbed += 1;
                }
            }
        }
        if absorbed == 0 {
            break;
        }
    }

    let components: Vec<Vec<Triple>> = candidates
        .into_iter()
        .filter(|c| !c.is_empty())
        .map(|c| c.triples.into_iter().collect::<IndexSet<_>>().into_iter().collect())
        .collect();

    debug!(
        candidates = extracted,
        passes,
        components = components.len(),
        "pairwise component merge finished"
    );
    components
}

/// Union-find with path halving and union by size.
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
    }
}

fn disjoint_set(edges: &[Triple]) -> Vec<Vec<Triple>> {
    let concepts = algebra::concepts(edges);
    let mut sets = DisjointSet::new(concepts.len());

    for edge in edges {
        let Some(s) = concepts.get_index_of(&edge.subject) else {
            continue;
        };
        for obj in edge.objects() {
            if let Some(o) = concepts.get_index_of(obj) {
                sets.union(s, o);
            }
        }
    }

    let mut groups: IndexMap<usize, IndexSet<Triple>> = IndexMap::new();
    for edge in edges {
        if let Some(s) = concepts.get_index_of(&edge.subject) {
            let root = sets.find(s);
            groups.entry(root).or_default().insert(edge.clone());
        }
    }

    debug!(
        concepts = concepts.len(),
        components = groups.len(),
        "disjoint-set component merge finished"
    );
    groups
        .into_values()
        .map(|g| g.into_iter().collect())
        .collect()
}

/// Sort by size descending, then by earliest input position.
fn order_by_size(mut components: Vec<Vec<Triple>>, edges: &[Triple]) -> Vec<Vec<Triple>> {
    let mut first_seen: HashMap<&Triple, usize> = HashMap::with_capacity(edges.len());
    for (i, edge) in edges.iter().enumerate() {
        first_seen.entry(edge).or_insert(i);
    }
    let earliest = |c: &Vec<Triple>| {
        c.iter()
            .filter_map(|t| first_seen.get(t).copied())
            .min()
            .unwrap_or(usize::MAX)
    };
    components.sort_by_cached_key(|c| (std::cmp::Reverse(c.len()), earliest(c)));
    components
}
