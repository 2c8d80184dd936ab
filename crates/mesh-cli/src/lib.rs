//! MeSH CLI Library
//!
//! Command-line front end for browsing MeSH headings and enrichment results.
//!
//! # Overview
//!
//! - **Result trees**: project enrichment results onto the MeSH hierarchy (`mesh tree`)
//! - **Result tables**: flat view of the same results (`mesh table`)
//! - **Lookups**: heading at a tree number (`mesh resolve`) or by name (`mesh term`)
//! - **Compounds**: headings named by compound annotations (`mesh annotate`)
//! - **Vocabulary**: the full hierarchy of the term file (`mesh hierarchy`)
//! - **Configuration**: effective settings (`mesh config`)

pub mod commands;
pub mod config;
pub mod error;
pub mod render;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, Result};

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// MeSH Browser - explore enrichment results over Medical Subject Headings
#[derive(Parser, Debug)]
#[command(name = "mesh")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// MeSH term file (tab-delimited name, tree numbers, description)
    #[arg(long, global = true)]
    pub terms: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Print the CLI reference as markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// How command output is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show enrichment results grouped by MeSH branch
    Tree {
        #[command(flatten)]
        results: ResultArgs,
    },

    /// Show enrichment results as a flat table
    Table {
        #[command(flatten)]
        results: ResultArgs,
    },

    /// Show the heading registered at a tree number
    Resolve {
        /// Dotted tree number (e.g. "D27.505.696")
        path: String,
    },

    /// Show a heading and every tree number it is filed under
    Term {
        /// Heading name
        name: String,
    },

    /// Show the headings compound identifiers are annotated with
    Annotate {
        /// Compound annotation file (`cid;name` per line)
        #[arg(short, long)]
        annotations: PathBuf,

        /// Compound identifiers to show; all annotations when omitted
        cids: Vec<String>,
    },

    /// Show the complete hierarchy of the term file
    Hierarchy {
        /// Only print this many levels (text and JSON)
        #[arg(short, long)]
        depth: Option<usize>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Enrichment result input and filtering
#[derive(Args, Debug, Clone)]
pub struct ResultArgs {
    /// Enrichment results file (tab-delimited name, query count, reference count, p-value, enrichment)
    #[arg(short, long)]
    pub results: PathBuf,

    /// Hide results with a larger p-value
    #[arg(long)]
    pub max_p_value: Option<f64>,

    /// Hide results mapping fewer query entities
    #[arg(long)]
    pub min_count: Option<usize>,

    /// Show every result with at least one mapped query entity
    #[arg(long, conflicts_with_all = ["max_p_value", "min_count"])]
    pub all: bool,
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Get configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Show all configuration
    Show,
}
