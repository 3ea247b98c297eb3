//! Downstream export seam.
//!
//! Node (hiera) and secrets export happen after SSH compilation but are
//! owned by the deployment tooling, not by this crate. The trait keeps
//! the orchestration order testable without pulling that tooling in.

use fleet_core::Node;
use tracing::info;

use crate::Result;

/// The opaque downstream export step run after SSH compilation.
pub trait Exporter {
    /// Export configuration for the given node set.
    fn export_nodes(&self, nodes: &[&Node]) -> Result<()>;

    /// Export secrets. `clean` additionally prunes secrets no longer
    /// referenced by any node and is only valid when the full,
    /// unfiltered node set was processed.
    fn export_secrets(&self, clean: bool) -> Result<()>;
}

/// Default exporter: records what would be handed to deployment tooling.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogExporter;

impl Exporter for LogExporter {
    fn export_nodes(&self, nodes: &[&Node]) -> Result<()> {
        info!(count = nodes.len(), "node export delegated to deployment tooling");
        Ok(())
    }

    fn export_secrets(&self, clean: bool) -> Result<()> {
        info!(clean, "secrets export delegated to deployment tooling");
        Ok(())
    }
}
