//! Rooted extraction and reachability.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use trigraph::prelude::*;

use super::{load_input, print_nodes, print_triples};
use crate::config::Config;

pub fn rooted(file: &Path, root: &str, config: &Config) -> Result<()> {
    let edges = load_input(file, config)?;
    let extracted = extract_rooted_fresh(&NodeId::from(root), &edges);

    if extracted.is_empty() {
        println!("{} {} has no outgoing triples", "•".yellow(), root.cyan());
        return Ok(());
    }

    println!(
        "{} {} triples reachable from {}",
        "→".blue(),
        extracted.len().to_string().cyan(),
        root.white().bold()
    );
    println!();
    print_triples(&extracted, 2);

    Ok(())
}

pub fn ancestors(file: &Path, node: &str, config: &Config) -> Result<()> {
    let edges = load_input(file, config)?;
    let found = trigraph::prelude::ancestors(&NodeId::from(node), &edges);

    println!(
        "{} {} nodes can reach {}",
        "→".blue(),
        found.len().to_string().cyan(),
        node.white().bold()
    );
    println!();
    print_nodes(&found);

    Ok(())
}

pub fn descendants(file: &Path, node: &str, config: &Config) -> Result<()> {
    let edges = load_input(file, config)?;
    let found = trigraph::prelude::descendants(&NodeId::from(node), &edges);

    println!(
        "{} {} nodes reachable from {}",
        "→".blue(),
        found.len().to_string().cyan(),
        node.white().bold()
    );
    println!();
    print_nodes(&found);

    Ok(())
}
