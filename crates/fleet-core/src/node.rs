//! Node records.
//!
//! A node is one managed machine. Records are read from `nodes/<name>.json`
//! and never mutated during a compile run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One managed node as recorded in the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique node name (also the registry key).
    pub name: String,

    /// Environment this node belongs to, or `None` if unassigned.
    #[serde(default)]
    pub environment: Option<String>,

    /// The node's hostnames.
    pub domain: Domain,

    /// IPv4 address as recorded; never validated here.
    pub ip_address: String,

    /// Services running on this node (e.g. `"mx"`).
    #[serde(default)]
    pub services: BTreeSet<String>,

    /// DNS rendering configuration.
    #[serde(default)]
    pub dns: DnsConfig,
}

/// Hostname set for a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Domain {
    /// Internal hostname (VPN-side).
    pub internal: String,

    /// Fully qualified public hostname.
    pub full: String,

    /// The full domain with the node label removed (environment suffix).
    pub full_suffix: String,
}

/// Per-node DNS settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DnsConfig {
    /// Whether the node gets a public A record.
    #[serde(default)]
    pub public: bool,

    /// Additional hostnames pointing at this node, in declared order.
    /// Absent in the source record means no aliases.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Node {
    /// Whether this node belongs to the given environment selector
    /// (`None` selects nodes with no environment assigned).
    #[must_use]
    pub fn in_environment(&self, env: Option<&str>) -> bool {
        self.environment.as_deref() == env
    }

    /// Whether the node runs the given service.
    #[must_use]
    pub fn has_service(&self, service: &str) -> bool {
        self.services.contains(service)
    }
}
