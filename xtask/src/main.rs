//! Build automation tasks for the MeSH browser
//!
//! Currently generates the CLI reference from the clap definitions.

use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for the MeSH browser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate the CLI reference in markdown
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &str) -> anyhow::Result<()> {
    println!("Generating CLI documentation...");

    let markdown = clap_markdown::help_markdown::<mesh_cli::Cli>();

    let content = format!(
        r#"# MeSH CLI Reference

This documentation is generated from the CLI source code. Last updated: {}.

## Overview

`mesh` projects enrichment results onto the Medical Subject Headings
hierarchy. Each result is shown under every tree number of its heading,
with the intermediate levels filled in.

## Input Files

- Term file: tab-delimited `name`, `;`-separated tree numbers, `description`
- Results file: tab-delimited `name`, query count, reference count, p-value, enrichment score

Neither file has a header row.

## Quick Start

```bash
# Results with p <= 0.05 and at least 5 mapped query entities
mesh --terms mesh-ontology.dat tree --results enrichment.tsv

# Every result with at least one mapped query entity
mesh --terms mesh-ontology.dat tree --results enrichment.tsv --all

# Flat table as JSON
mesh --terms mesh-ontology.dat --format json table --results enrichment.tsv

# Heading at a tree number
mesh --terms mesh-ontology.dat resolve D27.505.696
```

## Commands

{}

## Environment Variables

- `MESH_TERMS_FILE` - Term file used when `--terms` is not given
- `MESH_MAX_PVALUE` - Default p-value cut-off (default: `0.05`)
- `MESH_MIN_COUNT` - Default minimum query count (default: `5`)
- `RUST_LOG` - Logging level (e.g., `debug`, `info`, `warn`, `error`)

---

*To update, run `cargo xtask generate-cli-docs`.*
"#,
        chrono::Utc::now().format("%Y-%m-%d"),
        markdown
    );

    let output_path = PathBuf::from(output_dir);
    fs::create_dir_all(&output_path)?;

    let file_path = output_path.join("cli-reference.md");
    fs::write(&file_path, content)?;

    println!("Generated CLI documentation at: {}", file_path.display());

    Ok(())
}
