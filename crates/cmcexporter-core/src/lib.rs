//! cmcexporter core: the scrape-to-metrics pipeline without any transport.
//!
//! This crate turns a coin-ranking HTML page into typed [`record::CoinRecord`]s,
//! maps them onto the external metric vocabulary, and renders Prometheus
//! exposition text. Fetching pages and serving HTTP live in the server crate,
//! so everything here is synchronous and testable against saved fixtures.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! A malformed number surfaces as `ExporterError::InvalidNumber` so a single
//! bad row fails one request instead of the whole process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod exposition;
pub mod extract;
pub mod normalize;
pub mod record;

/// Shared result type.
pub use error::{ExporterError, Result};
