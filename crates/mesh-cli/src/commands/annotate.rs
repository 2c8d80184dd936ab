//! `mesh annotate` command implementation
//!
//! Maps compound identifiers to the MeSH headings they are annotated with.

use super::{ensure_exists, load_index, print_json};
use crate::error::Result;
use crate::render::render_annotations;
use crate::OutputFormat;
use colored::Colorize;
use mesh_tree::{loader, Term};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct AnnotatedHeading<'a> {
    cid: &'a str,
    term: &'a Term,
}

pub fn run(terms: &Path, annotations: &Path, cids: &[String], format: OutputFormat) -> Result<()> {
    let index = load_index(terms)?;
    ensure_exists(annotations)?;
    let annotations = loader::load_annotations(annotations)?;

    let rows: Vec<AnnotatedHeading<'_>> = index
        .annotate(&annotations)
        .into_iter()
        .filter(|(annotation, _)| cids.is_empty() || cids.contains(&annotation.cid))
        .map(|(annotation, term)| AnnotatedHeading {
            cid: &annotation.cid,
            term,
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Text => {
            if rows.is_empty() {
                println!("{}", "No annotated headings found.".yellow());
                return Ok(());
            }
            let pairs: Vec<(&str, &Term)> = rows.iter().map(|r| (r.cid, r.term)).collect();
            println!("{}", render_annotations(&pairs));
        },
    }
    Ok(())
}
