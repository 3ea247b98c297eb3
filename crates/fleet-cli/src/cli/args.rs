//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Compile a provider's node registry into deployable artifacts.
///
/// Run from (or point --root at) a provider directory containing
/// `provider.json` and `nodes/`.
#[derive(Parser, Debug)]
#[command(name = "fleetc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Provider directory (defaults to the current directory)
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile generated files
    #[command(alias = "c")]
    Compile(CompileArgs),
}

#[derive(Args, Debug)]
pub struct CompileArgs {
    #[command(subcommand)]
    pub command: Option<CompileCommands>,
}

#[derive(Subcommand, Debug)]
pub enum CompileCommands {
    /// Compile SSH trust files and run the downstream export (default)
    All {
        /// Restrict the export to one environment
        environment: Option<String>,
    },

    /// Compile a DNS zone file for the provider to stdout
    Zone {
        /// Use a fixed SOA serial instead of the `0000` placeholder
        #[arg(long)]
        serial: Option<u32>,

        /// Derive the SOA serial from the current time (YYMMDDhhmm)
        #[arg(long, conflicts_with = "serial")]
        auto_serial: bool,
    },
}
