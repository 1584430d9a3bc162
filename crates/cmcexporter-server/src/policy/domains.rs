//! Allowed-domain matching for outbound fetches.
//!
//! Entries are bare host names compared exactly (case-insensitive, trailing
//! dot ignored). `coinmarketcap.com` does not admit `api.coinmarketcap.com`;
//! list each host that may be contacted.

use std::collections::HashSet;

use reqwest::Url;

use cmcexporter_core::error::{ExporterError, Result};

#[derive(Debug, Clone)]
pub struct DomainAllowlist {
    hosts: HashSet<String>,
}

impl DomainAllowlist {
    pub fn new(raw: &[String]) -> Result<Self> {
        if raw.is_empty() {
            return Err(ExporterError::BadRequest("source.allowed_domains must not be empty".into()));
        }

        let mut hosts = HashSet::with_capacity(raw.len());
        for s in raw {
            let host = canonical(s);
            if host.is_empty() || host.contains(['/', ':', ' ']) {
                return Err(ExporterError::BadRequest(format!(
                    "invalid allowed_domains entry: {s:?} (expected a bare host name)"
                )));
            }
            hosts.insert(host);
        }
        Ok(Self { hosts })
    }

    pub fn is_allowed(&self, host: &str) -> bool {
        self.hosts.contains(&canonical(host))
    }

    /// Refuse URLs whose host is not listed.
    pub fn check_url(&self, url: &Url) -> Result<()> {
        match url.host_str() {
            Some(host) if self.is_allowed(host) => Ok(()),
            Some(host) => Err(ExporterError::DomainNotAllowed(host.to_string())),
            None => Err(ExporterError::DomainNotAllowed(format!("{url} has no host"))),
        }
    }
}

fn canonical(host: &str) -> String {
    host.trim().trim_end_matches('.').to_ascii_lowercase()
}
