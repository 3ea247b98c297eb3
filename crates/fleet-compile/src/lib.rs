//! fleet-compile: the compile subsystem of fleetc.
//!
//! Turns a provider's node registry into deployable artifacts:
//! - `authorized_keys` - every user public key plus the monitor key
//! - `known_hosts` - one host line per node with a recorded key
//! - a BIND-format DNS zone file, rendered to any output stream
//!
//! All generators are deterministic given the same registry snapshot and
//! key files; ordering never depends on filesystem enumeration order.
//! Everything runs synchronously in a single pass.

pub mod error;
pub mod export;
pub mod keygen;
pub mod monitor;
pub mod pipeline;
pub mod ssh;
pub mod zone;

// Re-exports for convenience.
pub use error::CompileError;
pub use export::{Exporter, LogExporter};
pub use keygen::{KeypairGenerator, SshKeygen};
pub use pipeline::{compile_all, compile_ssh, resolve_environment, EnvSelection};

/// Result type for compile operations.
pub type Result<T> = std::result::Result<T, CompileError>;
