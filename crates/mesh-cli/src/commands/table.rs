//! `mesh table` command implementation

use super::{load_index, load_results, print_json};
use crate::config::Config;
use crate::error::Result;
use crate::render::render_table;
use crate::{OutputFormat, ResultArgs};
use colored::Colorize;
use std::path::Path;

pub fn run(terms: &Path, args: &ResultArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let index = load_index(terms)?;
    let results = load_results(args, config)?;
    let rows = index.table(results.iter().map(|(name, stat)| (name.as_str(), *stat)));

    match format {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Text => {
            if rows.is_empty() {
                println!("{}", "No enriched terms to show.".yellow());
                return Ok(());
            }
            println!("{}", render_table(&rows));
            println!("{} terms", rows.len());
        },
    }
    Ok(())
}
