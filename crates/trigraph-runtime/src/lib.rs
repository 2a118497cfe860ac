//! # Trigraph Runtime
//!
//! Everything around the core algorithms that touches the outside world
//! or needs a real graph library: loading triple files, betweenness
//! centrality on a petgraph projection, and summaries written back out
//! as JSON.

pub mod centrality;
pub mod export;
pub mod loader;
pub mod prelude;
