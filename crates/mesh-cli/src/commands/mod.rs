//! CLI command implementations
//!
//! Each subcommand has its own module with a `run` function. Loading shared by
//! several commands lives here.

pub mod annotate;
pub mod config;
pub mod hierarchy;
pub mod lookup;
pub mod table;
pub mod tree;

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::ResultArgs;
use mesh_tree::{loader, EnrichmentFilter, EnrichmentStat, PathTreeIndex};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

/// Load and index the MeSH term file
pub fn load_index(path: &Path) -> Result<PathTreeIndex> {
    ensure_exists(path)?;
    let terms = loader::load_terms(path)?;
    let index = PathTreeIndex::build(terms)?;
    info!(path = %path.display(), terms = index.len(), "Indexed MeSH terms");
    Ok(index)
}

/// The filter selected by the flags, falling back to the configured thresholds
pub fn result_filter(args: &ResultArgs, config: &Config) -> EnrichmentFilter {
    if args.all {
        return EnrichmentFilter::permissive();
    }
    EnrichmentFilter::new(
        args.max_p_value.unwrap_or(config.max_p_value),
        args.min_count.unwrap_or(config.min_count),
    )
}

/// Load enrichment results and keep those passing the filter
pub fn load_results(args: &ResultArgs, config: &Config) -> Result<Vec<(String, EnrichmentStat)>> {
    ensure_exists(&args.results)?;
    let results = loader::load_results(&args.results)?;
    let total = results.len();
    let filter = result_filter(args, config);
    let kept = filter.apply(results);
    debug!(
        total,
        kept = kept.len(),
        max_p_value = filter.max_p_value,
        min_count = filter.min_count,
        "Filtered enrichment results"
    );
    Ok(kept)
}

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
