use clap::Parser;
use colored::*;
use gnomic::cli::{self, Cli, Commands};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // GNOMIC_LOG takes precedence over -v
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("GNOMIC_LOG").unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(gnomic::exit_code(&e));
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Parse(args) => cli::commands::parse::run(args, &config),
        Commands::Validate(args) => cli::commands::validate::run(args),
        Commands::Features(args) => cli::commands::features::run(args, &config),
    }
}
