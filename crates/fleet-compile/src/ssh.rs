//! SSH trust file compilation: `authorized_keys` and `known_hosts`.

use std::fmt::Write as _;
use std::path::PathBuf;

use fleet_core::{fsutil, CoreError, Paths, Registry};
use tracing::debug;

use crate::error::CompileError;
use crate::Result;

/// Warning banner prepended to the generated known_hosts file.
const KNOWN_HOSTS_BANNER: &str = "\
#
# This file is automatically generated by `fleetc compile`. Do not edit.
#
";

/// Compile the `authorized_keys` artifact.
///
/// One line per user public key plus the monitor public key if present,
/// in lexicographic path order. Each line carries the root-relative
/// source path as a trailing comment so a key can be traced back to its
/// file; the comment is annotation only, not part of the key syntax.
///
/// # Errors
///
/// Fatal when no user keys exist at all: a fleet compiled without any
/// user key would be unreachable.
pub fn compile_authorized_keys(paths: &Paths) -> Result<()> {
    let dir = paths.user_ssh_dir();
    let mut keys = user_key_files(&dir)?;
    if keys.is_empty() {
        return Err(CompileError::NoUserKeys { dir });
    }
    let monitor = paths.monitor_pub_key();
    if fsutil::file_exists(&[&monitor]) {
        keys.push(monitor);
    }
    keys.sort();

    let mut buffer = String::new();
    for keyfile in &keys {
        let content = std::fs::read_to_string(keyfile)
            .map_err(|source| CoreError::io(keyfile.clone(), source))?;
        let mut tokens = content.split_whitespace();
        let (Some(key_type), Some(key_material)) = (tokens.next(), tokens.next()) else {
            return Err(CompileError::MalformedKey {
                path: keyfile.clone(),
            });
        };
        let _ = writeln!(
            buffer,
            "{key_type} {key_material} {}",
            paths.relative(keyfile)
        );
    }
    fsutil::write_file(&paths.authorized_keys(), &buffer)?;
    Ok(())
}

/// Compile the `known_hosts` artifact.
///
/// Hostnames and IP are bound late, at compile time, so the file always
/// reflects the current node configuration rather than whatever was true
/// when the node's key was recorded. Nodes without a recorded key are
/// skipped.
pub fn compile_known_hosts(registry: &Registry, paths: &Paths) -> Result<()> {
    let mut buffer = String::from(KNOWN_HOSTS_BANNER);
    for node in registry.nodes() {
        let key_path = paths.node_ssh_pub_key(&node.name);
        let Some(pub_key) = fsutil::read_file(&key_path)? else {
            debug!(node = %node.name, "no recorded ssh key, omitting from known_hosts");
            continue;
        };
        let hostnames = [
            node.name.as_str(),
            node.domain.internal.as_str(),
            node.domain.full.as_str(),
            node.ip_address.as_str(),
        ]
        .join(",");
        let _ = writeln!(buffer, "{hostnames} {}", pub_key.trim());
    }
    fsutil::write_file(&paths.known_hosts(), &buffer)?;
    Ok(())
}

/// All regular files in the user key directory, unordered.
/// A missing directory means zero keys, not an error.
fn user_key_files(dir: &std::path::Path) -> Result<Vec<PathBuf>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => return Err(CoreError::io(dir, source).into()),
    };
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CoreError::io(dir, source))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_core::node::{DnsConfig, Domain, Node};

    fn write(path: &std::path::Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn node(name: &str) -> Node {
        Node {
            name: name.into(),
            environment: None,
            domain: Domain {
                internal: format!("{name}.i"),
                full: format!("{name}.example.net"),
                full_suffix: "example.net".into(),
            },
            ip_address: "192.0.2.9".into(),
            services: std::collections::BTreeSet::new(),
            dns: DnsConfig::default(),
        }
    }

    #[test]
    fn authorized_keys_sorted_and_labeled() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::new(dir.path());
        write(
            &paths.user_ssh_dir().join("zoe.pub"),
            "ssh-ed25519 AAAAzoe zoe@laptop\n",
        );
        write(
            &paths.user_ssh_dir().join("ada.pub"),
            "ssh-rsa AAAAada ada@desk\n",
        );
        compile_authorized_keys(&paths).unwrap();

        let out = std::fs::read_to_string(paths.authorized_keys()).unwrap();
        assert_eq!(
            out,
            "ssh-rsa AAAAada files/ssh/users/ada.pub\n\
             ssh-ed25519 AAAAzoe files/ssh/users/zoe.pub\n"
        );
    }

    #[test]
    fn authorized_keys_includes_monitor_key() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::new(dir.path());
        write(&paths.user_ssh_dir().join("ada.pub"), "ssh-rsa AAAAada\n");
        write(&paths.monitor_pub_key(), "ssh-rsa AAAAmon monitor\n");
        compile_authorized_keys(&paths).unwrap();

        let out = std::fs::read_to_string(paths.authorized_keys()).unwrap();
        // One line per input file, monitor key sorted by its path.
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("ssh-rsa AAAAmon files/ssh/monitor_ssh.pub"));
    }

    #[test]
    fn no_user_keys_is_fatal_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::new(dir.path());
        // Monitor key alone must not satisfy the precondition.
        write(&paths.monitor_pub_key(), "ssh-rsa AAAAmon monitor\n");
        let err = compile_authorized_keys(&paths).unwrap_err();
        assert!(matches!(err, CompileError::NoUserKeys { .. }));
        assert!(!paths.authorized_keys().exists());
    }

    #[test]
    fn malformed_user_key_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::new(dir.path());
        write(&paths.user_ssh_dir().join("bad.pub"), "just-one-token\n");
        let err = compile_authorized_keys(&paths).unwrap_err();
        assert!(matches!(err, CompileError::MalformedKey { .. }));
    }

    #[test]
    fn authorized_keys_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::new(dir.path());
        write(&paths.user_ssh_dir().join("b.pub"), "ssh-rsa BBBB\n");
        write(&paths.user_ssh_dir().join("a.pub"), "ssh-rsa AAAA\n");
        compile_authorized_keys(&paths).unwrap();
        let first = std::fs::read_to_string(paths.authorized_keys()).unwrap();
        compile_authorized_keys(&paths).unwrap();
        let second = std::fs::read_to_string(paths.authorized_keys()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn known_hosts_skips_nodes_without_keys() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::new(dir.path());
        let registry = Registry::from_nodes([node("keyed"), node("keyless")]);
        write(
            &paths.node_ssh_pub_key("keyed"),
            "ssh-rsa AAAAhost root@keyed\n",
        );
        compile_known_hosts(&registry, &paths).unwrap();

        let out = std::fs::read_to_string(paths.known_hosts()).unwrap();
        let records: Vec<_> = out.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(
            records,
            ["keyed,keyed.i,keyed.example.net,192.0.2.9 ssh-rsa AAAAhost root@keyed"]
        );
    }

    #[test]
    fn known_hosts_carries_banner_and_sorted_nodes() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::new(dir.path());
        let registry = Registry::from_nodes([node("zulu"), node("alpha")]);
        write(&paths.node_ssh_pub_key("zulu"), "ssh-rsa ZZZZ\n");
        write(&paths.node_ssh_pub_key("alpha"), "ssh-rsa AAAA\n");
        compile_known_hosts(&registry, &paths).unwrap();

        let out = std::fs::read_to_string(paths.known_hosts()).unwrap();
        assert!(out.starts_with("#\n"));
        let records: Vec<_> = out.lines().filter(|l| !l.starts_with('#')).collect();
        assert!(records[0].starts_with("alpha,"));
        assert!(records[1].starts_with("zulu,"));
    }
}
