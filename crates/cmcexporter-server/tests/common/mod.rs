//! Shared pages, sources and request helpers.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use cmcexporter_core::error::{ExporterError, Result};
use cmcexporter_server::app_state::AppState;
use cmcexporter_server::config::ExporterConfig;
use cmcexporter_server::router::build_router;
use cmcexporter_server::source::PageSource;

pub const STATUS_UP: &str = "## Export coinmarketcap coins for prometheus indexing and analysis 1";
pub const STATUS_DOWN: &str = "## Export coinmarketcap coins for prometheus indexing and analysis 0";

pub const PAGE: &str = r#"<html><body>
<table id="currencies-all"><tbody>
  <tr>
    <td class="text-center">1</td>
    <td><a class="currency-name-container">Bitcoin</a></td>
    <td class="col-symbol">BTC</td>
    <td class="market-cap" data-usd="950000000000.0"></td>
    <td><a class="price" data-usd="50000.123456789" data-btc="1.0"></a></td>
    <td class="circulating-supply"><a data-supply="17000000"></a></td>
    <td><a class="volume" data-usd="31000000000"></a></td>
    <td class="percent-1h" data-usd="0.5"></td>
    <td class="percent-24h" data-usd="-2"></td>
    <td class="percent-7d" data-usd="10.25"></td>
  </tr>
  <tr>
    <td class="text-center">2</td>
    <td><a class="currency-name-container">Ethereum</a></td>
    <td class="col-symbol">ETH</td>
    <td class="market-cap" data-usd="?"></td>
    <td><a class="price" data-usd="3000" data-btc="0.06"></a></td>
    <td class="circulating-supply"><a data-supply="120000000"></a></td>
    <td><a class="volume" data-usd="15000000000"></a></td>
    <td class="percent-1h" data-usd=""></td>
    <td class="percent-24h" data-usd="1"></td>
    <td class="percent-7d" data-usd="None"></td>
  </tr>
</tbody></table>
</body></html>"#;

pub const EMPTY_PAGE: &str =
    r#"<html><body><table id="currencies-all"><tbody></tbody></table></body></html>"#;

pub const BAD_PAGE: &str = r#"<html><body>
<table id="currencies-all"><tbody>
  <tr>
    <td class="text-center">1</td>
    <td class="col-symbol">BRK</td>
    <td><a class="price" data-usd="abc"></a></td>
  </tr>
</tbody></table>
</body></html>"#;

/// Serves the same page on every fetch and counts fetches.
pub struct StaticSource {
    page: &'static str,
    pub hits: AtomicUsize,
}

impl StaticSource {
    pub fn new(page: &'static str) -> Arc<Self> {
        Arc::new(Self { page, hits: AtomicUsize::new(0) })
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageSource for StaticSource {
    fn location(&self) -> &str {
        "fixture://static"
    }

    async fn fetch(&self) -> Result<String> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        Ok(self.page.to_string())
    }
}

pub struct FailingSource;

#[async_trait]
impl PageSource for FailingSource {
    fn location(&self) -> &str {
        "fixture://down"
    }

    async fn fetch(&self) -> Result<String> {
        Err(ExporterError::Fetch("connection refused".into()))
    }
}

/// Fails with an error that is not a scrape failure.
pub struct BrokenSource;

#[async_trait]
impl PageSource for BrokenSource {
    fn location(&self) -> &str {
        "fixture://broken"
    }

    async fn fetch(&self) -> Result<String> {
        Err(ExporterError::Internal("source state corrupted".into()))
    }
}

pub fn app(source: Arc<dyn PageSource>) -> Router {
    let state = AppState::with_source(ExporterConfig::default(), source).unwrap();
    build_router(state)
}

pub struct Reply {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

pub async fn get(app: Router, uri: &str) -> Reply {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();

    let status = resp.status();
    let content_type = resp
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    Reply {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}
