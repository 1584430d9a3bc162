//! Declarative extraction schema and its compilation.
//!
//! The markup contract with the upstream page lives in one table: a row
//! selector plus one rule per record field. Rules are compiled once at startup
//! so a bad selector is reported as a config error, never per request.

use std::collections::HashSet;

use scraper::Selector;
use serde::Deserialize;

use crate::error::{ExporterError, Result};
use crate::record::RecordField;

/// Rows of the rankings table on `/all/views/all/`.
pub const DEFAULT_ROW_SELECTOR: &str = "#currencies-all tbody tr";

/// One field rule: where inside a row the value lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldRule {
    pub field: RecordField,
    pub selector: String,
    /// Attribute to read; `None` reads the element text.
    #[serde(default)]
    pub attr: Option<String>,
}

impl FieldRule {
    pub fn text(field: RecordField, selector: &str) -> Self {
        Self { field, selector: selector.to_string(), attr: None }
    }

    pub fn attr(field: RecordField, selector: &str, attr: &str) -> Self {
        Self { field, selector: selector.to_string(), attr: Some(attr.to_string()) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractionSchema {
    #[serde(default = "default_row_selector")]
    pub row_selector: String,
    pub fields: Vec<FieldRule>,
}

impl Default for ExtractionSchema {
    fn default() -> Self {
        use RecordField::*;
        Self {
            row_selector: default_row_selector(),
            fields: vec![
                FieldRule::text(Rank, "td.text-center"),
                FieldRule::text(Symbol, ".col-symbol"),
                FieldRule::text(Name, ".currency-name-container"),
                FieldRule::attr(Price, "a.price", "data-usd"),
                FieldRule::attr(PriceBtc, "a.price", "data-btc"),
                FieldRule::attr(Volume, "a.volume", "data-usd"),
                FieldRule::attr(MarketCap, ".market-cap", "data-usd"),
                FieldRule::attr(CirculatingSupply, ".circulating-supply > a", "data-supply"),
                FieldRule::attr(Change1h, ".percent-1h", "data-usd"),
                FieldRule::attr(Change24h, ".percent-24h", "data-usd"),
                FieldRule::attr(Change7d, ".percent-7d", "data-usd"),
            ],
        }
    }
}

fn default_row_selector() -> String {
    DEFAULT_ROW_SELECTOR.into()
}

/// How a compiled rule reads its value.
#[derive(Debug, Clone)]
pub enum FieldSource {
    Text,
    Attr(String),
}

#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub field: RecordField,
    pub selector: Selector,
    pub source: FieldSource,
}

/// Schema with parsed selectors, ready for traversal.
#[derive(Debug, Clone)]
pub struct CompiledSchema {
    pub rows: Selector,
    pub rules: Vec<CompiledRule>,
}

impl ExtractionSchema {
    /// Validate field coverage and parse every selector.
    pub fn compile(&self) -> Result<CompiledSchema> {
        let mut seen = HashSet::with_capacity(self.fields.len());
        for rule in &self.fields {
            if !seen.insert(rule.field) {
                return Err(ExporterError::BadRequest(format!(
                    "schema.fields lists {} more than once",
                    rule.field.as_str()
                )));
            }
        }
        if let Some(missing) = RecordField::ALL.iter().find(|f| !seen.contains(*f)) {
            return Err(ExporterError::BadRequest(format!(
                "schema.fields is missing {}",
                missing.as_str()
            )));
        }

        let rows = parse_selector("schema.row_selector", &self.row_selector)?;

        let mut rules = Vec::with_capacity(self.fields.len());
        for rule in &self.fields {
            let selector = parse_selector(rule.field.as_str(), &rule.selector)?;
            let source = match &rule.attr {
                None => FieldSource::Text,
                Some(a) if a.trim().is_empty() => {
                    return Err(ExporterError::BadRequest(format!(
                        "schema attr for {} must not be empty",
                        rule.field.as_str()
                    )));
                }
                Some(a) => FieldSource::Attr(a.clone()),
            };
            rules.push(CompiledRule { field: rule.field, selector, source });
        }

        Ok(CompiledSchema { rows, rules })
    }
}

fn parse_selector(what: &str, s: &str) -> Result<Selector> {
    Selector::parse(s)
        .map_err(|e| ExporterError::BadRequest(format!("invalid selector for {what}: {s} ({e})")))
}
