//! Conventional path layout of a provider directory.
//!
//! Every path fleetc touches is derived from the provider root through
//! this one struct, so the layout is written down exactly once.

use std::path::{Path, PathBuf};

/// Resolves the fixed, conventionally named paths under a provider root.
#[derive(Debug, Clone)]
pub struct Paths {
    root: PathBuf,
}

impl Paths {
    /// Create a resolver for the given provider root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The provider root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `provider.json` - the provider record.
    #[must_use]
    pub fn provider_record(&self) -> PathBuf {
        self.root.join("provider.json")
    }

    /// `nodes/` - one JSON record per node.
    #[must_use]
    pub fn nodes_dir(&self) -> PathBuf {
        self.root.join("nodes")
    }

    /// `fleetc.toml` - optional per-checkout settings (environment pin).
    #[must_use]
    pub fn settings(&self) -> PathBuf {
        self.root.join("fleetc.toml")
    }

    /// Private half of the monitor keypair.
    #[must_use]
    pub fn monitor_priv_key(&self) -> PathBuf {
        self.root.join("files/ssh/monitor_ssh")
    }

    /// Public half of the monitor keypair.
    #[must_use]
    pub fn monitor_pub_key(&self) -> PathBuf {
        self.root.join("files/ssh/monitor_ssh.pub")
    }

    /// Directory of user public keys; every regular file is one key.
    #[must_use]
    pub fn user_ssh_dir(&self) -> PathBuf {
        self.root.join("files/ssh/users")
    }

    /// The SSH public key recorded for a node at init time.
    #[must_use]
    pub fn node_ssh_pub_key(&self, node_name: &str) -> PathBuf {
        self.root
            .join("files/nodes")
            .join(node_name)
            .join("node_ssh.pub")
    }

    /// Compiled `authorized_keys` target.
    #[must_use]
    pub fn authorized_keys(&self) -> PathBuf {
        self.root.join("files/ssh/authorized_keys")
    }

    /// Compiled `known_hosts` target.
    #[must_use]
    pub fn known_hosts(&self) -> PathBuf {
        self.root.join("files/ssh/known_hosts")
    }

    /// Render a path relative to the provider root, for provenance labels
    /// in generated files. Paths outside the root are rendered as-is.
    #[must_use]
    pub fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
