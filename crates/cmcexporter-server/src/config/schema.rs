use std::net::SocketAddr;
use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;

use cmcexporter_core::error::{ExporterError, Result};
use cmcexporter_core::extract::ExtractionSchema;

use crate::policy::DomainAllowlist;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub exporter: ExporterSection,

    #[serde(default)]
    pub source: SourceSection,

    #[serde(default)]
    pub exposition: ExpositionSection,

    /// Markup contract override; `None` uses the built-in table.
    #[serde(default)]
    pub schema: Option<ExtractionSchema>,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            exporter: ExporterSection::default(),
            source: SourceSection::default(),
            exposition: ExpositionSection::default(),
            schema: None,
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ExporterError::UnsupportedVersion);
        }

        self.exporter.validate()?;
        self.source.validate()?;
        if let Some(schema) = &self.schema {
            schema.compile()?;
        }

        Ok(())
    }

    /// Effective extraction schema.
    pub fn schema(&self) -> ExtractionSchema {
        self.schema.clone().unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ExporterSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl ExporterSection {
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            ExporterError::BadRequest(format!(
                "exporter.listen must be a valid socket address: {}",
                self.listen
            ))
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }
}

fn default_listen() -> String {
    "0.0.0.0:3099".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSection {
    #[serde(default = "default_source_url")]
    pub url: String,

    #[serde(default = "default_allowed_domains")]
    pub allowed_domains: Vec<String>,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Upper bound on the fetched page size.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            allowed_domains: default_allowed_domains(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl SourceSection {
    pub fn parsed_url(&self) -> Result<Url> {
        let url = Url::parse(&self.url)
            .map_err(|e| ExporterError::BadRequest(format!("source.url is invalid: {e}")))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ExporterError::BadRequest(format!(
                "source.url must use http or https (got '{other}')"
            ))),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if !(100..=300_000).contains(&self.timeout_ms) {
            return Err(ExporterError::BadRequest(
                "source.timeout_ms must be between 100 and 300000".into(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ExporterError::BadRequest("source.user_agent must not be empty".into()));
        }
        if !(1024..=256 * 1024 * 1024).contains(&self.max_body_bytes) {
            return Err(ExporterError::BadRequest(
                "source.max_body_bytes must be between 1024 and 268435456".into(),
            ));
        }

        let url = self.parsed_url()?;
        let allow = DomainAllowlist::new(&self.allowed_domains)?;
        allow.check_url(&url)
    }
}

fn default_source_url() -> String {
    "https://coinmarketcap.com/all/views/all/".into()
}
fn default_allowed_domains() -> Vec<String> {
    vec!["coinmarketcap.com".into(), "www.coinmarketcap.com".into()]
}
fn default_timeout_ms() -> u64 {
    30_000
}
fn default_user_agent() -> String {
    concat!("cmcexporter/", env!("CARGO_PKG_VERSION")).into()
}
fn default_max_body_bytes() -> usize {
    16 * 1024 * 1024
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpositionSection {
    #[serde(default = "default_escape_labels")]
    pub escape_labels: bool,
}

impl Default for ExpositionSection {
    fn default() -> Self {
        Self { escape_labels: default_escape_labels() }
    }
}

fn default_escape_labels() -> bool {
    true
}
