//! HTTP page source (single GET, domain-restricted).
//!
//! - The source URL must be in the allowlist at construction time.
//! - Redirects are followed only to allowlisted hosts, at most 10 hops.
//! - Non-2xx and non-HTML answers are scrape failures.
//! - Bodies larger than `source.max_body_bytes` are scrape failures.

use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{redirect, Client, Url};

use cmcexporter_core::error::{ExporterError, Result};

use super::PageSource;
use crate::config::SourceSection;
use crate::policy::DomainAllowlist;

const MAX_REDIRECTS: usize = 10;

/// Marker carried through reqwest's error chain when a redirect is refused.
#[derive(Debug, thiserror::Error)]
#[error("redirect to {0} refused")]
struct RedirectRefused(String);

pub struct HttpPageSource {
    url: Url,
    location: String,
    client: Client,
    max_body_bytes: usize,
}

impl HttpPageSource {
    pub fn new(cfg: &SourceSection) -> Result<Self> {
        let url = cfg.parsed_url()?;
        let allow = Arc::new(DomainAllowlist::new(&cfg.allowed_domains)?);
        allow.check_url(&url)?;

        let policy = redirect::Policy::custom(move |attempt| {
            if attempt.previous().len() >= MAX_REDIRECTS {
                return attempt.error("too many redirects");
            }
            let host = attempt.url().host_str().unwrap_or_default().to_string();
            if allow.is_allowed(&host) {
                attempt.follow()
            } else {
                attempt.error(RedirectRefused(host))
            }
        });

        let client = Client::builder()
            .timeout(cfg.timeout())
            .user_agent(cfg.user_agent.as_str())
            .redirect(policy)
            .build()
            .map_err(|e| ExporterError::Internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            location: url.to_string(),
            url,
            client,
            max_body_bytes: cfg.max_body_bytes,
        })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> Result<String> {
        let mut resp = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(classify)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ExporterError::Fetch(format!("{} answered {status}", self.location)));
        }

        if let Some(ct) = resp.headers().get(CONTENT_TYPE) {
            let ct = ct.to_str().unwrap_or_default();
            if !ct.to_ascii_lowercase().contains("html") {
                return Err(ExporterError::NotHtml(ct.to_string()));
            }
        }

        let limit = self.max_body_bytes;
        if resp.content_length().is_some_and(|n| n > limit as u64) {
            return Err(too_large(&self.location, limit));
        }

        // Content-Length may be absent or wrong; enforce the cap while reading.
        let mut buf: Vec<u8> = Vec::new();
        while let Some(chunk) = resp.chunk().await.map_err(classify)? {
            if buf.len() + chunk.len() > limit {
                return Err(too_large(&self.location, limit));
            }
            buf.extend_from_slice(&chunk);
        }

        let body = String::from_utf8_lossy(&buf).into_owned();
        tracing::debug!(%status, bytes = body.len(), "fetched source page");
        Ok(body)
    }
}

fn too_large(location: &str, limit: usize) -> ExporterError {
    ExporterError::Fetch(format!("{location} body exceeds {limit} bytes"))
}

fn classify(e: reqwest::Error) -> ExporterError {
    let mut source = Error::source(&e);
    while let Some(inner) = source {
        if let Some(refused) = inner.downcast_ref::<RedirectRefused>() {
            return ExporterError::DomainNotAllowed(refused.0.clone());
        }
        source = Error::source(inner);
    }
    ExporterError::Fetch(e.to_string())
}
