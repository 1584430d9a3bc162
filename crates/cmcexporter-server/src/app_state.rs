//! Shared application state for the exporter.
//!
//! Everything in here is immutable after startup. Request handlers only read
//! it, so cloning the state across axum tasks needs no locking.

use std::sync::Arc;

use cmcexporter_core::error::Result;
use cmcexporter_core::exposition::Renderer;

use crate::config::ExporterConfig;
use crate::pipeline::{Exporter, Extractor};
use crate::source::{HttpPageSource, PageSource};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    exporter: Exporter,
}

impl AppState {
    /// Build state that scrapes the configured source over HTTP.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        let source = Arc::new(HttpPageSource::new(&cfg.source)?);
        Self::with_source(cfg, source)
    }

    /// Build state around any page source.
    pub fn with_source(cfg: ExporterConfig, source: Arc<dyn PageSource>) -> Result<Self> {
        let schema = cfg.schema().compile()?;
        let renderer = Renderer::new(cfg.exposition.escape_labels);
        if !cfg.exposition.escape_labels {
            tracing::warn!("label escaping disabled; quotes in coin names will corrupt the output");
        }

        let exporter = Exporter::new(Extractor::new(source, schema), renderer);
        Ok(Self {
            inner: Arc::new(AppStateInner { exporter }),
        })
    }

    pub fn exporter(&self) -> &Exporter {
        &self.inner.exporter
    }
}
