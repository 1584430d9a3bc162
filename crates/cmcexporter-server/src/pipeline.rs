//! Request-scoped scrape pipeline: fetch → extract → normalize → render.
//!
//! Nothing is cached between calls; concurrent requests each run their own
//! cycle over read-only state.

use std::sync::Arc;

use tracing::Instrument;

use cmcexporter_core::error::Result;
use cmcexporter_core::exposition::Renderer;
use cmcexporter_core::extract::{extract_records, CompiledSchema};
use cmcexporter_core::normalize::normalize;
use cmcexporter_core::record::CoinRecord;

use crate::source::PageSource;

pub struct Extractor {
    source: Arc<dyn PageSource>,
    schema: CompiledSchema,
}

impl Extractor {
    pub fn new(source: Arc<dyn PageSource>, schema: CompiledSchema) -> Self {
        Self { source, schema }
    }

    pub fn location(&self) -> &str {
        self.source.location()
    }

    /// One upstream fetch, then rows in page order. Zero rows is success.
    pub async fn extract(&self) -> Result<Vec<CoinRecord>> {
        let html = self.source.fetch().await?;
        // The parsed DOM is not Send; keep it inside this synchronous call.
        Ok(extract_records(&html, &self.schema))
    }
}

pub struct Exporter {
    extractor: Extractor,
    renderer: Renderer,
}

impl Exporter {
    pub fn new(extractor: Extractor, renderer: Renderer) -> Self {
        Self { extractor, renderer }
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Produce the metrics body.
    ///
    /// Scrape failures are folded into the status line (`0`, no coins). Render
    /// failures and any other extractor error are returned to the caller.
    pub async fn scrape(&self) -> Result<String> {
        let span = tracing::info_span!("scrape", source = %self.extractor.location());
        async {
            let (up, records) = match self.extractor.extract().await {
                Ok(records) => (true, records),
                Err(e) if e.is_scrape_failure() => {
                    tracing::warn!(error = %e, code = e.client_code().as_str(), "scrape failed");
                    (false, Vec::new())
                }
                Err(e) => {
                    tracing::error!(error = %e, code = e.client_code().as_str(), "extract failed");
                    return Err(e);
                }
            };

            let coins = normalize(&records);
            match self.renderer.render(up, &coins) {
                Ok(body) => {
                    tracing::info!(up, coins = coins.len(), "scrape rendered");
                    Ok(body)
                }
                Err(e) => {
                    tracing::error!(error = %e, "render failed");
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }
}
