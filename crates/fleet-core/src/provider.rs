//! The provider record.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::paths::Paths;
use crate::Result;

/// Singleton provider configuration, read from `provider.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    /// Apex domain of the provider; the zone's `$ORIGIN`.
    pub domain: String,

    /// Contact addresses; the first one becomes the SOA contact.
    #[serde(default)]
    pub contacts: Vec<String>,

    /// Optional provider-wide DNS settings.
    #[serde(default)]
    pub dns: Option<ProviderDns>,
}

/// Provider-wide DNS settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderDns {
    /// Nameservers for the zone, in declared order.
    #[serde(default)]
    pub nameservers: Vec<String>,
}

impl Provider {
    /// Read the provider record from the provider directory.
    pub fn load(paths: &Paths) -> Result<Self> {
        let path = paths.provider_record();
        let Some(content) = crate::fsutil::read_file(&path)? else {
            return Err(CoreError::MissingProvider(path));
        };
        serde_json::from_str(&content).map_err(|source| CoreError::Record { path, source })
    }

    /// The SOA contact: first configured contact with the `@` rewritten
    /// to `.` per DNS convention (`hostmaster@example.net` becomes
    /// `hostmaster.example.net`).
    pub fn soa_contact(&self) -> Result<String> {
        let contact = self.contacts.first().ok_or(CoreError::NoContacts)?;
        Ok(contact.replacen('@', ".", 1))
    }

    /// Configured nameservers, empty when `dns` is absent.
    #[must_use]
    pub fn nameservers(&self) -> &[String] {
        match &self.dns {
            Some(dns) => &dns.nameservers,
            None => &[],
        }
    }
}
