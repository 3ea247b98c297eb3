//! fleet-core: shared types and registry access for the fleetc compiler.
//!
//! A provider directory holds everything fleetc reads:
//! - `provider.json` - the provider record (apex domain, contacts, DNS)
//! - `nodes/*.json` - one record per managed node
//! - `files/` - generated artifacts and key material
//!
//! This crate owns the data model, the read-only registry query surface,
//! the conventional path layout and the whole-file read/write primitives.
//! It contains no generation logic; that lives in `fleet-compile`.

pub mod error;
pub mod fsutil;
pub mod node;
pub mod paths;
pub mod provider;
pub mod registry;

// Re-exports for convenience.
pub use error::CoreError;
pub use node::{DnsConfig, Domain, Node};
pub use paths::Paths;
pub use provider::{Provider, ProviderDns};
pub use registry::{Registry, LOCAL_ENV};

/// Result type for fleet-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
