//! Error types for provider/registry access.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading provider state.
#[derive(Error, Debug)]
pub enum CoreError {
    /// File or directory access failed.
    #[error("io error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A node or provider record could not be parsed.
    #[error("invalid record {}: {source}", path.display())]
    Record {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The provider record is absent from the provider directory.
    #[error("no provider record at {} (is this a provider directory?)", .0.display())]
    MissingProvider(PathBuf),

    /// The provider record has an empty contact list.
    #[error("provider has no contacts configured")]
    NoContacts,
}

impl CoreError {
    /// Wrap an io error with the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
