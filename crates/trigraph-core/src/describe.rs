//! Label-to-description grouping.
//!
//! Extracted graphs usually carry human-readable labels as ordinary
//! triples (`(uri, rdfs:label, "text")`). These helpers collect them per
//! concept.

use crate::algebra;
use crate::filter::TripleFilter;
use crate::types::{NodeId, NodeSet, Triple};
use indexmap::IndexMap;

/// Concept → its description values, in encounter order.
pub type DescriptionMap = IndexMap<NodeId, Vec<NodeId>>;

/// Group the objects of every `label_predicate` triple under its subject.
///
/// The predicate comparison is exact.
pub fn concept_descriptions(edges: &[Triple], label_predicate: &NodeId) -> DescriptionMap {
    group_labels(edges.iter(), label_predicate)
}

/// Like [`concept_descriptions`], restricted to subjects that occur as
/// concepts of the triples `valid_concept` accepts.
pub fn concept_descriptions_where<F>(
    edges: &[Triple],
    label_predicate: &NodeId,
    valid_concept: &F,
) -> DescriptionMap
where
    F: TripleFilter + ?Sized,
{
    let accepted: Vec<Triple> = edges
        .iter()
        .filter(|t| valid_concept.matches(t))
        .cloned()
        .collect();
    let valid: NodeSet = algebra::concepts(&accepted);
    group_labels(
        edges.iter().filter(|t| valid.contains(&t.subject)),
        label_predicate,
    )
}

fn group_labels<'a>(
    edges: impl Iterator<Item = &'a Triple>,
    label_predicate: &NodeId,
) -> DescriptionMap {
    let mut map = DescriptionMap::new();
    for edge in edges.filter(|t| &t.predicate == label_predicate) {
        map.entry(edge.subject.clone())
            .or_default()
            .extend(edge.objects().cloned());
    }
    map
}
