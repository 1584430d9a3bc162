//! Top-level facade crate for cmcexporter.
//!
//! Re-exports the core pipeline and the server library so users can depend on a single crate.

pub mod core {
    pub use cmcexporter_core::*;
}

pub mod server {
    pub use cmcexporter_server::*;
}
