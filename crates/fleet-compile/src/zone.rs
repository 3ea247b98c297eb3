//! DNS zone file rendering.
//!
//! Produces a complete BIND-format zone for the provider domain on any
//! output stream. Record values are taken from the registry as-is; a
//! malformed IP in a node record yields a malformed zone file.

use std::io::Write;

use fleet_core::{Node, Provider, Registry, LOCAL_ENV};

use crate::Result;

/// SOA serial used when none is configured.
///
/// A static serial means secondaries never see the zone change; kept as
/// current behavior, overridable per run (see `ZoneOptions`).
pub const DEFAULT_SERIAL: &str = "0000";

/// Per-run zone rendering options.
#[derive(Debug, Clone)]
pub struct ZoneOptions {
    /// SOA serial; any decimal below 2^32.
    pub serial: String,
}

impl Default for ZoneOptions {
    fn default() -> Self {
        Self {
            serial: DEFAULT_SERIAL.into(),
        }
    }
}

/// A serial derived from the current time, `YYMMDDhhmm`.
/// Monotonic per minute and below 2^32 until 2043.
#[must_use]
pub fn auto_serial() -> String {
    chrono::Utc::now().format("%y%m%d%H%M").to_string()
}

/// Strips the provider domain suffix off hostnames, precomputed once per
/// zone so rendering stays linear in node count.
#[derive(Debug)]
struct HostLabeler {
    domain: String,
    dotted_suffix: String,
}

impl HostLabeler {
    fn new(domain: &str) -> Self {
        Self {
            domain: domain.to_owned(),
            dotted_suffix: format!(".{domain}"),
        }
    }

    /// The zone-relative label for a hostname: the apex itself becomes
    /// the empty label, a subdomain loses the apex suffix, and foreign
    /// names pass through unchanged.
    fn shorten<'a>(&self, fqdn: &'a str) -> &'a str {
        if fqdn == self.domain {
            ""
        } else {
            fqdn.strip_suffix(&self.dotted_suffix).unwrap_or(fqdn)
        }
    }
}

/// Emits record lines with a fixed-width hostname column.
struct RecordWriter {
    width: usize,
}

impl RecordWriter {
    fn record(&self, out: &mut dyn Write, label: &str, rdata: &str) -> std::io::Result<()> {
        let label = if label.is_empty() { "@" } else { label };
        writeln!(out, "{label:<width$} {rdata}", width = self.width)
    }
}

/// Render the complete zone file for the provider to `out`.
///
/// Section order is fixed: SOA header, origin section (bare-domain A
/// records and NS records), then one section per environment in registry
/// order. Nodes in the `"local"` environment never produce records.
pub fn compile_zone(
    provider: &Provider,
    registry: &Registry,
    options: &ZoneOptions,
    out: &mut dyn Write,
) -> Result<()> {
    let labeler = HostLabeler::new(&provider.domain);
    let contact = provider.soa_contact()?;

    // Hostname column is sized over all nodes so every section aligns.
    let width = registry
        .nodes()
        .map(|n| labeler.shorten(&n.domain.full).len())
        .max()
        .unwrap_or(0);
    let writer = RecordWriter { width };

    soa_header(out, &provider.domain, &contact, &options.serial)?;

    section_header(out, "ZONE ORIGIN")?;

    // A records for the bare provider domain, from aliases of every node
    // outside the reserved local environment.
    for node in registry.nodes_not_in(LOCAL_ENV) {
        if node.dns.aliases.iter().any(|a| *a == provider.domain) {
            writer.record(out, "", &format!("IN A      {}", node.ip_address))?;
        }
    }

    for ns in provider.nameservers() {
        writer.record(out, "", &format!("IN NS {ns}."))?;
    }

    for env in registry.environment_names() {
        if env == Some(LOCAL_ENV) {
            continue;
        }
        let nodes: Vec<&Node> = registry.nodes_in(env).collect();
        if nodes.is_empty() {
            continue;
        }
        section_header(out, &format!("ENVIRONMENT {}", env.unwrap_or("default")))?;
        for node in nodes {
            let full = labeler.shorten(&node.domain.full);
            if node.dns.public {
                writer.record(out, full, &format!("IN A      {}", node.ip_address))?;
            }
            for alias in &node.dns.aliases {
                if *alias != node.domain.full && *alias != provider.domain {
                    writer.record(
                        out,
                        labeler.shorten(alias),
                        &format!("IN CNAME  {full}"),
                    )?;
                }
            }
            if node.has_service("mx") {
                writer.record(
                    out,
                    labeler.shorten(&node.domain.full_suffix),
                    &format!("IN MX 10  {full}"),
                )?;
            }
        }
    }

    Ok(())
}

fn soa_header(
    out: &mut dyn Write,
    domain: &str,
    contact: &str,
    serial: &str,
) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, ";;")?;
    writeln!(out, ";; BIND data file for {domain}")?;
    writeln!(out, ";;")?;
    writeln!(out)?;
    writeln!(out, "$TTL 600")?;
    writeln!(out, "$ORIGIN {domain}.")?;
    writeln!(out)?;
    writeln!(out, "@ IN SOA {domain}. {contact}. (")?;
    writeln!(out, "  {serial:<14}; serial")?;
    writeln!(out, "  7200          ; refresh (  24 hours)")?;
    writeln!(out, "  3600          ; retry   (   2 hours)")?;
    writeln!(out, "  1209600       ; expire  (1000 hours)")?;
    writeln!(out, "  600 )         ; minimum (   2 days)")?;
    writeln!(out, ";")
}

fn section_header(out: &mut dyn Write, title: &str) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, ";;")?;
    writeln!(out, ";; {title}")?;
    writeln!(out, ";;")?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_core::node::{DnsConfig, Domain};
    use fleet_core::ProviderDns;
    use std::collections::BTreeSet;

    fn provider() -> Provider {
        Provider {
            domain: "example.net".into(),
            contacts: vec!["hostmaster@example.net".into()],
            dns: None,
        }
    }

    fn node(name: &str, env: &str, ip: &str) -> Node {
        Node {
            name: name.into(),
            environment: Some(env.into()),
            domain: Domain {
                internal: format!("{name}.{env}.i"),
                full: format!("{name}.{env}.example.net"),
                full_suffix: format!("{env}.example.net"),
            },
            ip_address: ip.into(),
            services: BTreeSet::new(),
            dns: DnsConfig::default(),
        }
    }

    fn render(provider: &Provider, registry: &Registry) -> String {
        let mut out = Vec::new();
        compile_zone(provider, registry, &ZoneOptions::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn labeler_shortens_relative_hostnames() {
        let labeler = HostLabeler::new("example.net");
        assert_eq!(labeler.shorten("a.prod.example.net"), "a.prod");
        assert_eq!(labeler.shorten("example.net"), "");
        assert_eq!(labeler.shorten("other.org"), "other.org");
    }

    #[test]
    fn soa_header_has_contact_and_placeholder_serial() {
        let registry = Registry::from_nodes([]);
        let zone = render(&provider(), &registry);
        assert!(zone.contains("$ORIGIN example.net."));
        assert!(zone.contains("@ IN SOA example.net. hostmaster.example.net. ("));
        assert!(zone.contains("  0000          ; serial"));
    }

    #[test]
    fn custom_serial_is_substituted() {
        let registry = Registry::from_nodes([]);
        let mut out = Vec::new();
        let options = ZoneOptions {
            serial: "2024111801".into(),
        };
        compile_zone(&provider(), &registry, &options, &mut out).unwrap();
        let zone = String::from_utf8(out).unwrap();
        assert!(zone.contains("  2024111801    ; serial"));
    }

    // The selection scenario: one public mx node in prod aliased to the
    // apex, one local node that must leave no trace in the zone.
    #[test]
    fn record_selection_per_environment() {
        let mut mx = node("a", "prod", "10.0.0.1");
        mx.dns.public = true;
        mx.dns.aliases = vec!["example.net".into()];
        mx.services.insert("mx".into());
        let mut local = node("dev", "local", "127.0.0.1");
        local.dns.public = true;
        local.dns.aliases = vec!["example.net".into()];
        let registry = Registry::from_nodes([mx, local]);

        let zone = render(&provider(), &registry);

        // Exactly one bare-domain A record; the local alias is ignored.
        // Width comes from "dev.local" (9 chars), the longest hostname.
        let bare_a: Vec<_> = zone
            .lines()
            .filter(|l| l.starts_with('@') && l.contains("IN A "))
            .collect();
        assert_eq!(bare_a, ["@         IN A      10.0.0.1"]);

        assert!(zone.contains(";; ENVIRONMENT prod"));
        assert!(zone.contains("a.prod    IN A      10.0.0.1"));
        assert!(zone.contains("prod      IN MX 10  a.prod"));

        // The local environment contributes nothing.
        assert!(!zone.contains("ENVIRONMENT local"));
        assert!(!zone.contains("127.0.0.1"));
        assert!(!zone.contains("dev"));
    }

    #[test]
    fn cname_skips_own_domain_and_apex() {
        let mut web = node("web", "prod", "192.0.2.1");
        web.dns.public = true;
        web.dns.aliases = vec![
            "web.prod.example.net".into(), // own full domain
            "example.net".into(),          // apex
            "www.example.net".into(),
        ];
        let registry = Registry::from_nodes([web]);
        let zone = render(&provider(), &registry);

        let cnames: Vec<_> = zone.lines().filter(|l| l.contains("IN CNAME")).collect();
        assert_eq!(cnames, ["www      IN CNAME  web.prod"]);
    }

    #[test]
    fn nameserver_lines_are_rooted_and_aligned() {
        let mut p = provider();
        p.dns = Some(ProviderDns {
            nameservers: vec!["ns1.example.org".into(), "ns2.example.org".into()],
        });
        let mut web = node("web", "prod", "192.0.2.1");
        web.dns.public = true;
        let registry = Registry::from_nodes([web]);
        let zone = render(&p, &registry);

        // Width comes from "web.prod" (8 chars), so every label column
        // including @ lines is padded to it.
        assert!(zone.contains("@        IN NS ns1.example.org.\n"));
        assert!(zone.contains("@        IN NS ns2.example.org.\n"));
        assert!(zone.contains("web.prod IN A      192.0.2.1\n"));
    }

    #[test]
    fn column_width_spans_all_nodes() {
        let mut short = node("a", "prod", "192.0.2.1");
        short.dns.public = true;
        let mut long = node("longname", "staging", "192.0.2.2");
        long.dns.public = true;
        let registry = Registry::from_nodes([short, long]);
        let zone = render(&provider(), &registry);

        // "longname.staging" is 16 chars; "a.prod" is padded to match.
        assert!(zone.contains("a.prod           IN A      192.0.2.1\n")); // 6 + 10 pad
        assert!(zone.contains("longname.staging IN A      192.0.2.2\n"));
    }

    #[test]
    fn unassigned_nodes_render_under_default() {
        let mut n = node("lone", "prod", "192.0.2.5");
        n.environment = None;
        n.domain.full = "lone.example.net".into();
        n.dns.public = true;
        let registry = Registry::from_nodes([n]);
        let zone = render(&provider(), &registry);
        assert!(zone.contains(";; ENVIRONMENT default"));
        assert!(zone.contains("lone IN A      192.0.2.5"));
    }

    #[test]
    fn auto_serial_fits_u32() {
        let serial = auto_serial();
        assert_eq!(serial.len(), 10);
        assert!(serial.parse::<u32>().is_ok());
    }
}
