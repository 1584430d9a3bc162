//! Exporter config loader (strict parsing).

pub mod schema;

use std::fs;

use cmcexporter_core::error::{ExporterError, Result};

pub use schema::{ExporterConfig, ExporterSection, ExpositionSection, SourceSection};

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "cmcexporter.yaml";

pub fn load_from_file(path: &str) -> Result<ExporterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ExporterError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| ExporterError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
