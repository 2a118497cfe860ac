//! Betweenness centrality ranking.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use trigraph::prelude::*;

use super::load_input;
use crate::config::Config;

pub fn run(file: &Path, top: Option<usize>, config: &Config) -> Result<()> {
    let edges = load_input(file, config)?;
    let top = top.unwrap_or(config.centrality.top);

    println!(
        "{} Top {} central concepts:",
        "→".blue(),
        top.to_string().cyan()
    );
    println!();

    let scores = betweenness_centrality(&edges);
    for (i, (node, score)) in top_central(&scores, top).iter().enumerate() {
        let rank = format!("{}.", i + 1);
        println!(
            "  {} {} {}",
            rank.blue(),
            node.as_str().white().bold(),
            format!("({:.4})", score).dimmed()
        );
    }

    Ok(())
}
