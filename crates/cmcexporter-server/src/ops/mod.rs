//! HTTP endpoints.
//!
//! - `/`        : index page linking to the metrics
//! - `/metrics` : Prometheus text format (200 even when the scrape failed)
//! - `/healthz` : liveness

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::{app_state::AppState, error::HttpError};

pub const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

const INDEX_HTML: &str = r#"<!doctype html>
<html>
    <head>
        <meta charset="utf-8">
        <title>CoinMarketCap Prometheus Exporter</title>
    </head>
    <body>
        <h1>CoinMarketCap Prometheus Exporter</h1>
        <p><a href="/metrics">Goto Metrics page</a></p>
    </body>
</html>"#;

pub async fn index() -> Html<&'static str> {
    tracing::info!("serving /");
    Html(INDEX_HTML)
}

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Result<Response, HttpError> {
    tracing::info!("serving /metrics");
    let body = state.exporter().scrape().await.map_err(HttpError::from)?;
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, METRICS_CONTENT_TYPE)], body).into_response())
}
