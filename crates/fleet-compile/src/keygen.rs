//! Keypair generation capability.
//!
//! Key generation is the only external process the compiler invokes.
//! It sits behind a narrow trait so tests can substitute a fake that
//! writes fixture key bytes instead of running a real tool.

use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::error::CompileError;
use crate::Result;

/// Key size for the monitor keypair.
pub const MONITOR_KEY_BITS: u32 = 4096;

/// Comment embedded in the monitor public key.
pub const MONITOR_KEY_COMMENT: &str = "monitor";

/// Generates an SSH keypair on disk.
pub trait KeypairGenerator {
    /// Generate an RSA keypair with no passphrase at `priv_key`; the
    /// public half is written alongside as `<priv_key>.pub`.
    ///
    /// # Errors
    ///
    /// Any failure to produce the keypair is fatal to the compile run.
    fn generate(&self, priv_key: &Path, bits: u32, comment: &str) -> Result<()>;
}

/// Production generator: shells out to `ssh-keygen`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SshKeygen;

impl KeypairGenerator for SshKeygen {
    fn generate(&self, priv_key: &Path, bits: u32, comment: &str) -> Result<()> {
        debug!(path = %priv_key.display(), bits, "running ssh-keygen");
        let status = Command::new("ssh-keygen")
            .args(["-N", "", "-C", comment, "-t", "rsa"])
            .arg("-b")
            .arg(bits.to_string())
            .arg("-f")
            .arg(priv_key)
            .status()
            .map_err(|e| CompileError::Keygen(format!("could not run ssh-keygen: {e}")))?;
        if status.success() {
            Ok(())
        } else {
            Err(CompileError::Keygen(format!("exited with {status}")))
        }
    }
}
