//! Caller-supplied triple predicates.
//!
//! Removal rules and label filters are injected per call, never held as
//! global configuration. Any `Fn(&Triple) -> bool` is a [`TripleFilter`].

use crate::types::{NodeId, Triple};

/// A yes/no decision over a single triple.
pub trait TripleFilter {
    fn matches(&self, triple: &Triple) -> bool;
}

impl<F> TripleFilter for F
where
    F: Fn(&Triple) -> bool,
{
    fn matches(&self, triple: &Triple) -> bool {
        self(triple)
    }
}

/// Matches every triple.
pub fn always() -> impl TripleFilter + Copy {
    |_: &Triple| true
}

/// Exact match on the predicate label. No pattern syntax.
pub fn predicate_is(label: impl Into<NodeId>) -> impl TripleFilter + Clone {
    let label = label.into();
    move |t: &Triple| t.predicate == label
}

/// Matches triples whose predicate is any of `labels`.
pub fn predicate_in<I, N>(labels: I) -> impl TripleFilter + Clone
where
    I: IntoIterator<Item = N>,
    N: Into<NodeId>,
{
    let labels: Vec<NodeId> = labels.into_iter().map(Into::into).collect();
    move |t: &Triple| labels.contains(&t.predicate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_filters() {
        let f = |t: &Triple| t.subject.as_str() == "A";
        assert!(f.matches(&Triple::new("A", "p", "B")));
        assert!(!f.matches(&Triple::new("B", "p", "A")));
    }

    #[test]
    fn predicate_is_exact() {
        let f = predicate_is("label");
        assert!(f.matches(&Triple::new("A", "label", "x")));
        assert!(!f.matches(&Triple::new("A", "Label", "x")));
        assert!(!f.matches(&Triple::new("A", "label ", "x")));
    }

    #[test]
    fn predicate_in_any() {
        let f = predicate_in(["a", "b"]);
        assert!(f.matches(&Triple::new("X", "b", "Y")));
        assert!(!f.matches(&Triple::new("X", "c", "Y")));
    }

    #[test]
    fn always_matches() {
        assert!(always().matches(&Triple::new("X", "p", "Y")));
    }
}
