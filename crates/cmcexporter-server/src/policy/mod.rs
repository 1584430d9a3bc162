//! Outbound request policy.

pub mod domains;

pub use domains::DomainAllowlist;
