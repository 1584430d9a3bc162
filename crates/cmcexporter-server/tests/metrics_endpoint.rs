#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use axum::http::StatusCode;

mod common;
use common::{app, get, BrokenSource, FailingSource, StaticSource, BAD_PAGE, EMPTY_PAGE, PAGE, STATUS_DOWN, STATUS_UP};

#[tokio::test]
async fn index_links_to_metrics() {
    let r = get(app(StaticSource::new(PAGE)), "/").await;
    assert_eq!(r.status, StatusCode::OK);
    assert!(r.content_type.unwrap().starts_with("text/html"));
    assert!(r.body.contains(r#"<a href="/metrics">"#));
}

#[tokio::test]
async fn healthz_is_ok() {
    let r = get(app(Arc::new(FailingSource)), "/healthz").await;
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.body, "ok");
}

#[tokio::test]
async fn metrics_for_scraped_page() {
    let r = get(app(StaticSource::new(PAGE)), "/metrics").await;
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.content_type.as_deref(), Some("text/plain; version=0.0.4; charset=utf-8"));

    let lines: Vec<&str> = r.body.lines().collect();
    assert_eq!(lines.len(), 1 + 2 * 9);
    assert_eq!(lines[0], STATUS_UP);
    assert_eq!(lines[1], r#"coin_rank{symbol="BTC",name="Bitcoin"} 1"#);
    assert_eq!(lines[2], r#"coin_price_usd{symbol="BTC",name="Bitcoin"} 50000.123457"#);
    assert_eq!(lines[5], r#"coin_market_cap_usd{symbol="BTC",name="Bitcoin"} 950000000000.000"#);
    assert_eq!(lines[8], r#"coin_percent_change_24h{symbol="BTC",name="Bitcoin"} -2.00"#);
    assert_eq!(lines[10], r#"coin_rank{symbol="ETH",name="Ethereum"} 2"#);
    assert_eq!(lines[14], r#"coin_market_cap_usd{symbol="ETH",name="Ethereum"} 0.000"#);
    assert_eq!(lines[18], r#"coin_percent_change_7d{symbol="ETH",name="Ethereum"} 0.00"#);
}

#[tokio::test]
async fn zero_rows_is_only_the_status_line() {
    let r = get(app(StaticSource::new(EMPTY_PAGE)), "/metrics").await;
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.body, format!("{STATUS_UP}\n"));
}

#[tokio::test]
async fn failed_fetch_is_in_band() {
    let r = get(app(Arc::new(FailingSource)), "/metrics").await;
    assert_eq!(r.status, StatusCode::OK);
    assert_eq!(r.body, format!("{STATUS_DOWN}\n"));
}

#[tokio::test]
async fn internal_source_error_is_a_500() {
    let r = get(app(Arc::new(BrokenSource)), "/metrics").await;
    assert_eq!(r.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = serde_json::from_str(&r.body).unwrap();
    assert_eq!(body["error"], "INTERNAL");
    assert!(!r.body.contains(STATUS_DOWN));
}

#[tokio::test]
async fn bad_number_fails_only_the_request() {
    let router = app(StaticSource::new(BAD_PAGE));

    let r = get(router.clone(), "/metrics").await;
    assert_eq!(r.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = serde_json::from_str(&r.body).unwrap();
    assert_eq!(body["error"], "INVALID_NUMBER");
    assert!(body["message"].as_str().unwrap().contains("abc"));
    assert!(!r.body.contains("coin_price_usd{"));

    // The server keeps answering.
    let again = get(router.clone(), "/metrics").await;
    assert_eq!(again.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(get(router, "/healthz").await.status, StatusCode::OK);
}

#[tokio::test]
async fn every_request_scrapes_afresh() {
    let source = StaticSource::new(PAGE);
    let router = app(source.clone());

    let (a, b, c) = tokio::join!(
        get(router.clone(), "/metrics"),
        get(router.clone(), "/metrics"),
        get(router, "/metrics"),
    );
    assert_eq!(source.hits(), 3);
    assert_eq!(a.body, b.body);
    assert_eq!(b.body, c.body);
}
