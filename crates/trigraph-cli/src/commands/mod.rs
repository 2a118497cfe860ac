//! CLI command implementations.

pub mod centrality;
pub mod components;
pub mod describe;
pub mod extract;
pub mod init;
pub mod prune;
pub mod stats;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;
use trigraph::prelude::*;

use crate::config::Config;

/// Load the triple file named on the command line.
pub(crate) fn load_input(file: &Path, config: &Config) -> Result<Vec<Triple>> {
    if !file.exists() {
        bail!("Triple file not found: {}", file.display().to_string().cyan());
    }
    let format = config.input.format.resolve(file);
    load_triples(file, format)
        .with_context(|| format!("Failed to load triples from {}", file.display()))
}

pub(crate) fn print_triples(edges: &[Triple], indent: usize) {
    let pad = " ".repeat(indent);
    for edge in edges {
        let objects: Vec<&str> = edge.objects().map(NodeId::as_str).collect();
        println!(
            "{}{} {} {}",
            pad,
            edge.subject.as_str().white().bold(),
            edge.predicate.as_str().dimmed(),
            objects.join(", ").cyan()
        );
    }
}

pub(crate) fn print_nodes(nodes: &NodeSet) {
    for node in nodes {
        println!("  {} {}", "•".blue(), node.as_str().white());
    }
}

pub(crate) fn write_output<T: serde::Serialize + ?Sized>(
    path: &Path,
    value: &T,
    config: &Config,
) -> Result<()> {
    write_json(path, value, config.output.pretty)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{} Wrote {}", "✓".green(), path.display());
    Ok(())
}
