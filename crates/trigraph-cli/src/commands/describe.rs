//! Label grouping per concept.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use trigraph::prelude::*;

use super::load_input;
use crate::config::Config;

pub fn run(file: &Path, label_predicate: &str, config: &Config) -> Result<()> {
    let edges = load_input(file, config)?;
    let descriptions = concept_descriptions(&edges, &NodeId::from(label_predicate));

    if descriptions.is_empty() {
        println!(
            "{} No triples use predicate {}",
            "•".yellow(),
            label_predicate.cyan()
        );
        return Ok(());
    }

    println!(
        "{} {} described concepts",
        "→".blue(),
        descriptions.len().to_string().cyan()
    );
    println!();

    for (concept, labels) in &descriptions {
        let labels: Vec<&str> = labels.iter().map(NodeId::as_str).collect();
        println!(
            "  {} {}",
            concept.as_str().white().bold(),
            labels.join(" | ").dimmed()
        );
    }

    Ok(())
}
