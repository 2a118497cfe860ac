//! Connected components.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use trigraph::prelude::*;

use super::{load_input, print_triples, write_output};
use crate::config::Config;

pub fn list(
    file: &Path,
    strategy: Option<MergeStrategy>,
    output: Option<&Path>,
    config: &Config,
) -> Result<()> {
    let edges = load_input(file, config)?;
    let strategy = strategy.unwrap_or(config.components.strategy);
    let components = components_with(&edges, strategy);
    let summaries = summarize_components(&components);

    println!(
        "{} {} components in {} triples",
        "→".blue(),
        components.len().to_string().cyan(),
        edges.len().to_string().cyan()
    );
    println!();

    for summary in summaries.iter().take(config.components.show) {
        let rank = format!("{}.", summary.rank);
        println!(
            "  {} {} triples, {} concepts {}",
            rank.blue(),
            summary.triples.to_string().white().bold(),
            summary.concepts,
            format!("({} roots, {} leaves)", summary.roots.len(), summary.leaves.len()).dimmed()
        );
    }
    if summaries.len() > config.components.show {
        println!(
            "  {}",
            format!("... {} more", summaries.len() - config.components.show).dimmed()
        );
    }

    if let Some(path) = output {
        println!();
        write_output(path, &components, config)?;
    }

    Ok(())
}

pub fn biggest(file: &Path, output: Option<&Path>, config: &Config) -> Result<()> {
    let edges = load_input(file, config)?;
    let component = biggest_component(&edges);

    println!(
        "{} Largest component: {} of {} triples",
        "→".blue(),
        component.len().to_string().cyan(),
        edges.len().to_string().cyan()
    );
    println!();

    match output {
        Some(path) => write_output(path, &component, config)?,
        None => print_triples(&component, 2),
    }

    Ok(())
}
