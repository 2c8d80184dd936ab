//! `mesh resolve` and `mesh term` command implementations

use super::{load_index, print_json};
use crate::error::{CliError, Result};
use crate::OutputFormat;
use colored::Colorize;
use mesh_tree::{PathKey, Term};
use std::path::Path;

/// Show the heading registered at a dotted tree number
pub fn resolve(terms: &Path, path: &str, format: OutputFormat) -> Result<()> {
    let key: PathKey = path.parse()?;
    let index = load_index(terms)?;
    let term = index
        .resolve(&key)
        .ok_or_else(|| CliError::PathNotFound(path.to_string()))?;
    print_term(term, format)
}

/// Show a heading looked up by name
pub fn term(terms: &Path, name: &str, format: OutputFormat) -> Result<()> {
    let index = load_index(terms)?;
    let term = index
        .term(name)
        .ok_or_else(|| CliError::TermNotFound(name.to_string()))?;
    print_term(term, format)
}

fn print_term(term: &Term, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(term)?,
        OutputFormat::Text => {
            println!("{}", term.name.bold());
            println!("  {}", term.description);
            for id in &term.ids {
                println!("  {} {}", "-".dimmed(), id.cyan());
            }
        },
    }
    Ok(())
}
