//! `fleetc compile` - compile generated files.

use anyhow::Result;
use colored::Colorize;

use fleet_compile::zone::{self, ZoneOptions};
use fleet_compile::{compile_all, resolve_environment, LogExporter, SshKeygen};
use fleet_core::{Provider, Registry};

use super::Context;
use crate::cli::args::{CompileArgs, CompileCommands};
use crate::config::Settings;

pub fn execute(ctx: &Context, args: CompileArgs) -> Result<()> {
    match args
        .command
        .unwrap_or(CompileCommands::All { environment: None })
    {
        CompileCommands::All { environment } => all(ctx, environment.as_deref()),
        CompileCommands::Zone {
            serial,
            auto_serial,
        } => zone_file(ctx, serial, auto_serial),
    }
}

/// SSH trust files first, then the downstream export.
fn all(ctx: &Context, environment: Option<&str>) -> Result<()> {
    let settings = Settings::load(&ctx.paths.settings())?;
    let registry = Registry::load(&ctx.paths)?;

    let selection =
        resolve_environment(&registry, settings.environment.as_deref(), environment)?;
    compile_all(&registry, &ctx.paths, &SshKeygen, &LogExporter, &selection)?;

    eprintln!("{}", "compiled ssh trust files".green());
    Ok(())
}

fn zone_file(ctx: &Context, serial: Option<u32>, auto_serial: bool) -> Result<()> {
    let registry = Registry::load(&ctx.paths)?;
    let provider = Provider::load(&ctx.paths)?;

    let options = match serial {
        Some(serial) => ZoneOptions {
            serial: serial.to_string(),
        },
        None if auto_serial => ZoneOptions {
            serial: zone::auto_serial(),
        },
        None => ZoneOptions::default(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    zone::compile_zone(&provider, &registry, &options, &mut out)?;
    Ok(())
}
