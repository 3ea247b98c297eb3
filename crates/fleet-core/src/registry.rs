//! The node registry: read-only queries over all node records.

use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::error::CoreError;
use crate::node::Node;
use crate::paths::Paths;
use crate::Result;

/// Reserved environment name; nodes in it never appear in DNS output.
pub const LOCAL_ENV: &str = "local";

/// All node records, keyed (and therefore iterated) by node name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    nodes: BTreeMap<String, Node>,
}

impl Registry {
    /// Load every `nodes/*.json` record under the provider root.
    ///
    /// Non-JSON entries in the directory are skipped; a record that fails
    /// to parse is a fatal error.
    pub fn load(paths: &Paths) -> Result<Self> {
        let dir = paths.nodes_dir();
        let mut nodes = BTreeMap::new();
        let entries = std::fs::read_dir(&dir).map_err(|source| CoreError::io(&dir, source))?;
        for entry in entries {
            let entry = entry.map_err(|source| CoreError::io(&dir, source))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                debug!(path = %path.display(), "skipping non-record entry");
                continue;
            }
            let node = load_node(&path)?;
            nodes.insert(node.name.clone(), node);
        }
        Ok(Self { nodes })
    }

    /// Build a registry from in-memory nodes (test fixtures).
    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self {
            nodes: nodes
                .into_iter()
                .map(|n| (n.name.clone(), n))
                .collect(),
        }
    }

    /// All nodes in name-sorted order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Look up a node by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Number of nodes in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the registry holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Distinct environments in defined order: first appearance over
    /// name-sorted nodes. `None` is the partition of unassigned nodes.
    #[must_use]
    pub fn environment_names(&self) -> Vec<Option<&str>> {
        let mut names: Vec<Option<&str>> = Vec::new();
        for node in self.nodes.values() {
            let env = node.environment.as_deref();
            if !names.contains(&env) {
                names.push(env);
            }
        }
        names
    }

    /// Whether any node belongs to the named environment.
    #[must_use]
    pub fn contains_environment(&self, name: &str) -> bool {
        self.nodes
            .values()
            .any(|n| n.environment.as_deref() == Some(name))
    }

    /// Nodes in the given environment (`None` = unassigned), in registry
    /// iteration order.
    pub fn nodes_in<'a>(&'a self, env: Option<&'a str>) -> impl Iterator<Item = &'a Node> {
        self.nodes.values().filter(move |n| n.in_environment(env))
    }

    /// Nodes *not* in the named environment, in registry iteration order.
    /// Unassigned nodes always match.
    pub fn nodes_not_in<'a>(&'a self, env: &'a str) -> impl Iterator<Item = &'a Node> {
        self.nodes
            .values()
            .filter(move |n| n.environment.as_deref() != Some(env))
    }
}

fn load_node(path: &Path) -> Result<Node> {
    let content =
        std::fs::read_to_string(path).map_err(|source| CoreError::io(path, source))?;
    serde_json::from_str(&content).map_err(|source| CoreError::Record {
        path: path.to_path_buf(),
        source,
    })
}
