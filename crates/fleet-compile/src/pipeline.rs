//! Compile run orchestration.
//!
//! SSH compilation always runs before any export: later deployment steps
//! assume working SSH access to the fleet.

use fleet_core::{Node, Paths, Registry};

use crate::error::CompileError;
use crate::export::Exporter;
use crate::keygen::KeypairGenerator;
use crate::{monitor, ssh};
use crate::Result;

/// Which nodes a compile run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSelection<'a> {
    /// Restrict to one environment, or `None` for the full node set.
    pub environment: Option<&'a str>,

    /// Whether the downstream secrets export may prune unreferenced
    /// secrets; only true when the full node set is covered.
    pub clean_export: bool,
}

/// Resolve the environment for a run from the pinned setting and the
/// explicit argument.
///
/// # Errors
///
/// An explicit environment that conflicts with the pin, or that does not
/// exist in the registry, aborts the run.
pub fn resolve_environment<'a>(
    registry: &Registry,
    pinned: Option<&'a str>,
    requested: Option<&'a str>,
) -> Result<EnvSelection<'a>> {
    if let (Some(pinned), Some(requested)) = (pinned, requested) {
        if pinned != requested {
            return Err(CompileError::EnvironmentPinned {
                pinned: pinned.into(),
                requested: requested.into(),
            });
        }
    }
    if let Some(requested) = requested {
        if !registry.contains_environment(requested) {
            return Err(CompileError::UnknownEnvironment(requested.into()));
        }
        return Ok(EnvSelection {
            environment: Some(requested),
            clean_export: false,
        });
    }
    Ok(EnvSelection {
        environment: pinned,
        clean_export: pinned.is_none(),
    })
}

/// Provision the monitor keypair and compile both SSH trust files.
pub fn compile_ssh(
    registry: &Registry,
    paths: &Paths,
    keygen: &dyn KeypairGenerator,
) -> Result<()> {
    monitor::ensure_monitor_keys(paths, keygen)?;
    ssh::compile_authorized_keys(paths)?;
    ssh::compile_known_hosts(registry, paths)?;
    Ok(())
}

/// Full compile run: SSH trust files first, then the downstream export
/// over the selected node set.
pub fn compile_all(
    registry: &Registry,
    paths: &Paths,
    keygen: &dyn KeypairGenerator,
    exporter: &dyn Exporter,
    selection: &EnvSelection<'_>,
) -> Result<()> {
    compile_ssh(registry, paths, keygen)?;

    let nodes: Vec<&Node> = match selection.environment {
        Some(env) => registry.nodes_in(Some(env)).collect(),
        None => registry.nodes().collect(),
    };
    exporter.export_nodes(&nodes)?;
    exporter.export_secrets(selection.clean_export)?;
    Ok(())
}
