//! Monitor keypair provisioning.
//!
//! Remote monitors connect to nodes with a dedicated keypair: every node
//! gets the public half in its authorized_keys, every monitor node holds
//! the private half. The pair is created once and never rotated here.

use fleet_core::{fsutil, Paths};
use tracing::{info, warn};

use crate::keygen::{KeypairGenerator, MONITOR_KEY_BITS, MONITOR_KEY_COMMENT};
use crate::Result;

/// Ensure the monitor keypair exists, generating it on first run.
///
/// Idempotent: if both key files are already present this is a no-op.
/// A generator that runs but leaves the files missing is logged as a
/// failure and the run continues; downstream compilation simply proceeds
/// without a monitor key. A generator that errors aborts the run.
pub fn ensure_monitor_keys(paths: &Paths, keygen: &dyn KeypairGenerator) -> Result<()> {
    let priv_key = paths.monitor_priv_key();
    let pub_key = paths.monitor_pub_key();
    if fsutil::file_exists(&[&priv_key, &pub_key]) {
        return Ok(());
    }

    for key in [&priv_key, &pub_key] {
        if let Some(parent) = key.parent() {
            fsutil::ensure_dir(parent)?;
        }
    }
    keygen.generate(&priv_key, MONITOR_KEY_BITS, MONITOR_KEY_COMMENT)?;

    if fsutil::file_exists(&[&priv_key, &pub_key]) {
        info!(path = %priv_key.display(), "created");
        info!(path = %pub_key.display(), "created");
    } else {
        warn!("failed to create monitor ssh keys");
    }
    Ok(())
}
