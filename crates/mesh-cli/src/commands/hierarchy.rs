//! `mesh hierarchy` command implementation

use super::{load_index, print_json};
use crate::error::Result;
use crate::render::render_hierarchy;
use crate::OutputFormat;
use std::path::Path;

pub fn run(terms: &Path, depth: Option<usize>, format: OutputFormat) -> Result<()> {
    let index = load_index(terms)?;
    let full = index.hierarchy();
    let root = match depth {
        Some(levels) => full.pruned(levels),
        None => full,
    };

    match format {
        OutputFormat::Json => print_json(&root)?,
        OutputFormat::Text => print!("{}", render_hierarchy(&root)),
    }
    Ok(())
}
