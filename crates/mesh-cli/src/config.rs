//! Configuration management for the MeSH CLI
//!
//! Settings come from environment variables (a `.env` file is loaded first by
//! the binary) and can be overridden per invocation with command-line flags.

use crate::error::{CliError, Result};
use mesh_tree::enrichment::{DEFAULT_MAX_P_VALUE, DEFAULT_MIN_COUNT};
use mesh_tree::EnrichmentFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the MeSH term file inside the data directory
pub const DEFAULT_TERMS_FILE_NAME: &str = "mesh-ontology.dat";

pub const ENV_TERMS_FILE: &str = "MESH_TERMS_FILE";
pub const ENV_MAX_P_VALUE: &str = "MESH_MAX_PVALUE";
pub const ENV_MIN_COUNT: &str = "MESH_MIN_COUNT";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// MeSH term file
    pub terms_file: PathBuf,

    /// Default significance cut-off for displayed results
    pub max_p_value: f64,

    /// Default minimum number of mapped query entities
    pub min_count: usize,
}

impl Config {
    /// Create a config with default values
    pub fn new() -> Self {
        let terms_file = dirs::data_dir()
            .map(|dir| dir.join("mesh").join(DEFAULT_TERMS_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TERMS_FILE_NAME));

        Self {
            terms_file,
            max_p_value: DEFAULT_MAX_P_VALUE,
            min_count: DEFAULT_MIN_COUNT,
        }
    }

    /// Load config from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(path) = lookup(ENV_TERMS_FILE) {
            config.terms_file = PathBuf::from(path);
        }

        if let Some(raw) = lookup(ENV_MAX_P_VALUE) {
            let value: f64 = raw.trim().parse().map_err(|_| {
                CliError::config(format!("{} must be a number, got '{}'", ENV_MAX_P_VALUE, raw))
            })?;
            if !(0.0..=1.0).contains(&value) {
                return Err(CliError::config(format!(
                    "{} must be between 0 and 1, got {}",
                    ENV_MAX_P_VALUE, value
                )));
            }
            config.max_p_value = value;
        }

        if let Some(raw) = lookup(ENV_MIN_COUNT) {
            config.min_count = raw.trim().parse().map_err(|_| {
                CliError::config(format!(
                    "{} must be a non-negative integer, got '{}'",
                    ENV_MIN_COUNT, raw
                ))
            })?;
        }

        Ok(config)
    }

    pub fn terms_file(&self) -> &Path {
        &self.terms_file
    }

    /// Filter from the configured thresholds
    pub fn filter(&self) -> EnrichmentFilter {
        EnrichmentFilter::new(self.max_p_value, self.min_count)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
