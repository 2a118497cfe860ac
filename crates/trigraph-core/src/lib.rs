//! # trigraph core
//!
//! Core types and algorithms for directed, labeled graphs given as flat
//! lists of (subject, predicate, object) triples, as produced by
//! knowledge-graph extraction.
//!
//! - **algebra** - subject, predicate, object, concept, root and leaf sets
//! - **index** - subject-keyed [`EdgeIndex`](index::EdgeIndex), drained by traversal
//! - **extract** - rooted subgraphs, ancestors, descendants
//! - **components** - partition into maximal connected components
//! - **prune** - peel flagged terminal nodes
//! - **describe** - group label triples per concept
//! - **record** - canonicalize loosely shaped input records
//!
//! Everything here is synchronous, in-memory and pure apart from the
//! explicitly passed `EdgeIndex`.
//!
//! ## Quick Start
//!
//! ```rust
//! use trigraph_core::prelude::*;
//!
//! let edges = vec![
//!     Triple::new("A", "p", "B"),
//!     Triple::new("B", "p", "C"),
//!     Triple::new("D", "p", "C"),
//!     Triple::new("X", "p", "Y"),
//! ];
//!
//! assert_eq!(roots(&edges).len(), 3);
//! assert_eq!(connected_components(&edges).len(), 2);
//! assert_eq!(biggest_component(&edges).len(), 3);
//! ```

pub mod algebra;
pub mod components;
pub mod describe;
pub mod error;
pub mod extract;
pub mod filter;
pub mod index;
pub mod prelude;
pub mod prune;
pub mod record;
pub mod types;
