//! Write a default trigraph.toml.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE};

pub fn run(path: Option<PathBuf>) -> Result<()> {
    let base_path = match path {
        Some(p) => p,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    println!("{} Initializing trigraph project...", "→".blue());

    std::fs::create_dir_all(&base_path)
        .with_context(|| format!("Failed to create {}", base_path.display()))?;

    let config_path = base_path.join(CONFIG_FILE);
    if !config_path.exists() {
        Config::default().save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
    } else {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
    }

    println!();
    println!("{} trigraph project initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!("  {} trigraph stats <triples.json>", "1.".blue());
    println!("  {} trigraph components <triples.json>", "2.".blue());
    println!("  {} trigraph centrality <triples.json>", "3.".blue());

    Ok(())
}
