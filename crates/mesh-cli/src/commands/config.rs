//! `mesh config` command implementation
//!
//! Configuration is read from environment variables; these commands only
//! report the effective values.

use super::print_json;
use crate::config::{Config, ENV_MAX_P_VALUE, ENV_MIN_COUNT, ENV_TERMS_FILE};
use crate::error::{CliError, Result};
use crate::OutputFormat;
use colored::Colorize;

/// Get configuration value
pub fn get(config: &Config, key: &str) -> Result<()> {
    println!("{}", value_of(config, key)?);
    Ok(())
}

/// Show all configuration
pub fn show(config: &Config, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(config);
    }

    println!("{}", "MeSH CLI Configuration:".cyan().bold());
    println!();
    println!("{:<13} {}", "terms_file:", config.terms_file().display());
    println!("{:<13} {}", "max_p_value:", config.max_p_value);
    println!("{:<13} {}", "min_count:", config.min_count);
    println!();
    println!("{}", "Environment Variables:".cyan());
    println!("  {:<16} - MeSH term file", ENV_TERMS_FILE);
    println!("  {:<16} - Default p-value cut-off", ENV_MAX_P_VALUE);
    println!("  {:<16} - Default minimum query count", ENV_MIN_COUNT);
    Ok(())
}

fn value_of(config: &Config, key: &str) -> Result<String> {
    match key {
        "terms_file" => Ok(config.terms_file().display().to_string()),
        "max_p_value" => Ok(config.max_p_value.to_string()),
        "min_count" => Ok(config.min_count.to_string()),
        _ => Err(CliError::config(format!(
            "Unknown config key: {}. Use terms_file, max_p_value or min_count",
            key
        ))),
    }
}
