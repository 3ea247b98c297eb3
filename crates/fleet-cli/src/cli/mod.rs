//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use fleet_core::Paths;
use tracing_subscriber::EnvFilter;

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = commands::Context {
        paths: Paths::new(&cli.root),
    };

    match cli.command {
        Commands::Compile(args) => commands::compile::execute(&ctx, args),
    }
}

/// Log to stderr so `compile zone` output stays redirectable.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
