//! Set algebra over triple lists.
//!
//! Every function is total: an empty list yields an empty set. Results
//! are insertion-ordered so repeated runs over the same input iterate
//! identically.
//!
//! - **concepts** = subjects ∪ objects
//! - **roots** = subjects − objects (no incoming edge)
//! - **leaves** = objects − subjects (no outgoing edge)

use crate::types::{NodeSet, Triple};

/// All subject nodes.
pub fn subjects(edges: &[Triple]) -> NodeSet {
    edges.iter().map(|t| t.subject.clone()).collect()
}

/// All predicate labels.
pub fn predicates(edges: &[Triple]) -> NodeSet {
    edges.iter().map(|t| t.predicate.clone()).collect()
}

/// All object nodes, with multi-valued objects flattened.
pub fn objects(edges: &[Triple]) -> NodeSet {
    edges.iter().flat_map(|t| t.objects().cloned()).collect()
}

/// Every node appearing as subject or object.
pub fn concepts(edges: &[Triple]) -> NodeSet {
    let mut set = subjects(edges);
    set.extend(edges.iter().flat_map(|t| t.objects().cloned()));
    set
}

/// Nodes with outgoing but no incoming edges.
pub fn roots(edges: &[Triple]) -> NodeSet {
    let objs = objects(edges);
    subjects(edges)
        .into_iter()
        .filter(|n| !objs.contains(n))
        .collect()
}

/// Nodes with incoming but no outgoing edges.
pub fn leaves(edges: &[Triple]) -> NodeSet {
    let subs = subjects(edges);
    objects(edges)
        .into_iter()
        .filter(|n| !subs.contains(n))
        .collect()
}
