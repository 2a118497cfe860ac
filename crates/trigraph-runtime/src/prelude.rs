//! Trigraph Runtime Prelude - convenient imports for common usage.
//!
//! ```rust
//! use trigraph_runtime::prelude::*;
//! ```

// Re-export centrality
pub use crate::centrality::{betweenness_centrality, top_central, CentralityScores, ProjectedGraph};

// Re-export loading
pub use crate::loader::{load_triples, parse_triples, TripleFormat};

// Re-export summaries and output
pub use crate::export::{
    graph_stats, graph_stats_with, summarize_components, write_json, ComponentSummary, GraphStats,
};

// Re-export from core
pub use trigraph_core::prelude::*;
