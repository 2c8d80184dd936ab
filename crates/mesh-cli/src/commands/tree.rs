//! `mesh tree` command implementation
//!
//! Projects enrichment results onto the MeSH hierarchy.

use super::{load_index, load_results, print_json};
use crate::config::Config;
use crate::error::Result;
use crate::render::render_tree;
use crate::{OutputFormat, ResultArgs};
use colored::Colorize;
use std::path::Path;

pub fn run(terms: &Path, args: &ResultArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let index = load_index(terms)?;
    let results = load_results(args, config)?;
    let tree = index.project(results.iter().map(|(name, stat)| (name.as_str(), *stat)));

    match format {
        OutputFormat::Json => print_json(&tree.to_view())?,
        OutputFormat::Text => {
            if tree.is_empty() {
                println!("{}", "No enriched terms to show.".yellow());
                println!("Relax the thresholds with --max-p-value/--min-count or pass --all.");
                return Ok(());
            }
            print!("{}", render_tree(&tree));
        },
    }
    Ok(())
}
