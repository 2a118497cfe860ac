//! trigraph core prelude - convenient imports for common usage.
//!
//! ```rust
//! use trigraph_core::prelude::*;
//! ```

// Re-export the data model
pub use crate::types::{NodeId, NodeSet, Object, Triple};

// Re-export record intake
pub use crate::record::{canonicalize, canonicalize_all, RawField, RawRecord};

// Re-export set algebra
pub use crate::algebra::{concepts, leaves, objects, predicates, roots, subjects};

// Re-export traversal
pub use crate::extract::{
    ancestors, descendants, extract_rooted, extract_rooted_fresh, filter_by_roots,
};
pub use crate::index::{build_index, EdgeIndex};

// Re-export component merging
pub use crate::components::{
    biggest_component, components_with, connected_components, MergeStrategy,
};

// Re-export pruning and filters
pub use crate::filter::{always, predicate_in, predicate_is, TripleFilter};
pub use crate::prune::{excluded_leaves, peel_leaves, prune_leaves, PeelResult};

// Re-export description grouping
pub use crate::describe::{concept_descriptions, concept_descriptions_where, DescriptionMap};

// Re-export error types
pub use crate::error::{MalformedRecordKind, Result, TrigraphError};
