//! cmcexporter server library entry.
//!
//! Wires config, the HTTP page source, the scrape pipeline and the axum
//! router. Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod ops;
pub mod pipeline;
pub mod policy;
pub mod router;
pub mod source;
