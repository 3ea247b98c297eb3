//! Command implementations.

pub mod compile;

use fleet_core::Paths;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Path layout of the provider directory being compiled.
    pub paths: Paths,
}
