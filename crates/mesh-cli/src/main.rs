//! MeSH CLI - Main entry point

use clap::Parser;
use mesh_cli::{commands, Cli, Commands, Config, ConfigCommand};
use mesh_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

fn main() {
    // Missing .env is fine; variables may come from the shell
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    let Some(command) = cli.command.as_ref() else {
        eprintln!("Error: A subcommand is required");
        eprintln!();
        eprintln!("For more information, try '--help'.");
        process::exit(2);
    };

    let log_config = LogConfig::builder()
        .level(if cli.verbose { LogLevel::Debug } else { LogLevel::Warn })
        .output(LogOutput::Console)
        .log_file_prefix("mesh-cli")
        .build();

    // Environment variables take precedence over the flags
    let log_config = log_config.clone().merge_env().unwrap_or(log_config);

    // The CLI works without logging, so a failed init is not fatal
    let _guard = init_logging(&log_config).ok();

    if let Err(e) = execute_command(&cli, command) {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn execute_command(cli: &Cli, command: &Commands) -> mesh_cli::Result<()> {
    let config = Config::from_env()?;
    let terms = cli
        .terms
        .clone()
        .unwrap_or_else(|| config.terms_file().to_path_buf());

    match command {
        Commands::Tree { results } => commands::tree::run(&terms, results, &config, cli.format),
        Commands::Table { results } => commands::table::run(&terms, results, &config, cli.format),
        Commands::Resolve { path } => commands::lookup::resolve(&terms, path, cli.format),
        Commands::Term { name } => commands::lookup::term(&terms, name, cli.format),
        Commands::Annotate { annotations, cids } => {
            commands::annotate::run(&terms, annotations, cids, cli.format)
        },
        Commands::Hierarchy { depth } => commands::hierarchy::run(&terms, *depth, cli.format),
        Commands::Config { command } => match command {
            ConfigCommand::Get { key } => commands::config::get(&config, key),
            ConfigCommand::Show => commands::config::show(&config, cli.format),
        },
    }
}
