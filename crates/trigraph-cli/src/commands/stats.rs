//! Show graph statistics.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use trigraph::prelude::*;

use super::load_input;
use crate::config::Config;

pub fn run(file: &Path, config: &Config) -> Result<()> {
    let edges = load_input(file, config)?;
    let stats = graph_stats_with(&edges, config.components.strategy);

    println!("{}", "Triple Graph Statistics".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    println!("{}", "Graph Structure".blue().bold());
    println!("  Triples:           {}", stats.triples.to_string().cyan());
    println!("  Concepts:          {}", stats.concepts.to_string().cyan());
    println!("  Predicates:        {}", stats.predicates.to_string().cyan());
    println!();

    println!("{}", "Shape".blue().bold());
    println!("  Roots:             {}", stats.roots.to_string().cyan());
    println!("  Leaves:            {}", stats.leaves.to_string().cyan());
    println!();

    println!("{}", "Components".blue().bold());
    println!("  Count:             {}", stats.components.to_string().cyan());
    println!(
        "  Largest:           {} ({:.1}% of triples)",
        stats.largest_component.to_string().green(),
        if stats.triples > 0 {
            stats.largest_component as f64 / stats.triples as f64 * 100.0
        } else {
            0.0
        }
    );

    println!();
    println!("{}", "═".repeat(40).dimmed());

    Ok(())
}
