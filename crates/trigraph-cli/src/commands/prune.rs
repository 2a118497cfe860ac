//! Leaf pruning.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use trigraph::prelude::*;

use super::{load_input, print_triples, write_output};
use crate::config::Config;

pub fn run(
    file: &Path,
    predicate: Option<&str>,
    layers: Option<usize>,
    output: Option<&Path>,
    config: &Config,
) -> Result<()> {
    let edges = load_input(file, config)?;
    let max_layers = layers.unwrap_or(config.prune.max_layers);

    let result = match predicate {
        Some(label) => peel_leaves(&edges, &predicate_is(label), max_layers),
        None => peel_leaves(&edges, &always(), max_layers),
    };

    println!(
        "{} Removed {} triples in {} layer(s), {} remain",
        "→".blue(),
        result.removed.to_string().cyan(),
        result.layers.to_string().cyan(),
        result.triples.len().to_string().green()
    );

    match output {
        Some(path) => {
            println!();
            write_output(path, &result.triples, config)?;
        }
        None => {
            println!();
            print_triples(&result.triples, 2);
        }
    }

    Ok(())
}
