//! Error types for the compile subsystem.
//!
//! Fatal conditions surface here; recoverable conditions (missing monitor
//! key after generation, node without a recorded key) are logged by the
//! generators and never raised.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a compile run.
#[derive(Error, Debug)]
pub enum CompileError {
    /// No user public keys exist; the fleet would become unreachable.
    #[error(
        "no user SSH public keys found in {}; \
         add at least one before compiling", dir.display()
    )]
    NoUserKeys { dir: PathBuf },

    /// A user key file did not contain `<key-type> <key-material>`.
    #[error("malformed SSH public key file {}", path.display())]
    MalformedKey { path: PathBuf },

    /// The external key-generation command failed to run or exited non-zero.
    #[error("ssh-keygen failed: {0}")]
    Keygen(String),

    /// The requested environment does not exist in the registry.
    #[error("there is no environment named `{0}`")]
    UnknownEnvironment(String),

    /// An explicit environment argument conflicts with the pinned one.
    #[error("cannot compile environment `{requested}` while the environment is pinned to `{pinned}`")]
    EnvironmentPinned { pinned: String, requested: String },

    /// Provider/registry access failed.
    #[error(transparent)]
    Core(#[from] fleet_core::CoreError),

    /// Writing to the output stream failed.
    #[error("write error: {0}")]
    Write(#[from] std::io::Error),
}
