//! # Trigraph
//!
//! Graph utilities for knowledge graphs extracted from text as
//! (subject, predicate, object) triples.
//!
//! Triples are kept as plain lists. Every operation takes a triple list
//! and returns node sets, triple lists, or score maps, so results can be
//! fed straight back in.
//!
//! ## Quick Start
//!
//! ```rust
//! use trigraph::prelude::*;
//!
//! let edges = vec![
//!     Triple::new("ex:neuron", "subClassOf", "ex:cell"),
//!     Triple::new("ex:cell", "partOf", "ex:tissue"),
//!     Triple::new("ex:atom", "partOf", "ex:molecule"),
//! ];
//!
//! // Entry points and terminal nodes
//! assert!(roots(&edges).contains(&NodeId::from("ex:neuron")));
//! assert!(leaves(&edges).contains(&NodeId::from("ex:tissue")));
//!
//! // Everything reachable from a root
//! let rooted = extract_rooted_fresh(&"ex:neuron".into(), &edges);
//! assert_eq!(rooted.len(), 2);
//!
//! // Connected components, largest first
//! let components = connected_components(&edges);
//! assert_eq!(components.len(), 2);
//! assert_eq!(biggest_component(&edges), components[0]);
//!
//! // Bridging nodes
//! let scores = betweenness_centrality(&edges);
//! assert_eq!(top_central(&scores, 1)[0].0, NodeId::from("ex:cell"));
//! ```
//!
//! ## Architecture
//!
//! - [`core`] - Triple model, set algebra, traversal, components, pruning
//! - [`runtime`] - Centrality, file loading, summaries and JSON output
//!
//! ## Key Concepts
//!
//! | Term | Meaning |
//! |------|---------|
//! | Concept | Any node appearing as subject or object |
//! | Root | A subject that is never an object |
//! | Leaf | An object that is never a subject |
//! | Component | Maximal triple set connected through shared concepts |

pub use trigraph_core as core;
pub use trigraph_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use trigraph::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use trigraph_core::types::{NodeId, NodeSet, Object, Triple};
    pub use trigraph_core::record::{canonicalize, canonicalize_all, RawField, RawRecord};

    // Error types
    pub use trigraph_core::error::{MalformedRecordKind, Result, TrigraphError};

    // Set algebra and traversal
    pub use trigraph_core::algebra::{concepts, leaves, objects, predicates, roots, subjects};
    pub use trigraph_core::extract::{
        ancestors, descendants, extract_rooted, extract_rooted_fresh, filter_by_roots,
    };
    pub use trigraph_core::index::{build_index, EdgeIndex};

    // Components, pruning and descriptions
    pub use trigraph_core::components::{
        biggest_component, components_with, connected_components, MergeStrategy,
    };
    pub use trigraph_core::filter::{always, predicate_in, predicate_is, TripleFilter};
    pub use trigraph_core::prune::{excluded_leaves, peel_leaves, prune_leaves, PeelResult};
    pub use trigraph_core::describe::{
        concept_descriptions, concept_descriptions_where, DescriptionMap,
    };

    // Runtime
    pub use trigraph_runtime::centrality::{
        betweenness_centrality, top_central, CentralityScores, ProjectedGraph,
    };
    pub use trigraph_runtime::export::{
        graph_stats, graph_stats_with, summarize_components, write_json, ComponentSummary,
        GraphStats,
    };
    pub use trigraph_runtime::loader::{load_triples, parse_triples, TripleFormat};
}
