//! Generic row traversal driven by a compiled schema.
//!
//! Traversal never fails on field content: a missing element or attribute
//! yields an empty string and is left for the renderer to judge.

use scraper::{ElementRef, Html};

use super::schema::{CompiledSchema, FieldSource};
use crate::record::{CoinRecord, RecordField};

/// Parse a page and return one record per matching row, in document order.
pub fn extract_records(html: &str, schema: &CompiledSchema) -> Vec<CoinRecord> {
    let doc = Html::parse_document(html);

    let records: Vec<CoinRecord> = doc
        .select(&schema.rows)
        .map(|row| extract_row(row, schema))
        .collect();

    tracing::debug!(rows = records.len(), "extracted coin rows");
    records
}

fn extract_row(row: ElementRef<'_>, schema: &CompiledSchema) -> CoinRecord {
    let mut record = CoinRecord::default();
    for rule in &schema.rules {
        let value = match &rule.source {
            FieldSource::Text => {
                let text: String = row.select(&rule.selector).flat_map(|el| el.text()).collect();
                text.trim().to_string()
            }
            // Only the first match is consulted, even if it lacks the attribute.
            FieldSource::Attr(name) => row
                .select(&rule.selector)
                .next()
                .and_then(|el| el.value().attr(name))
                .map(|v| v.trim().to_string())
                .unwrap_or_default(),
        };

        let value = if rule.field == RecordField::MarketCap {
            normalize_market_cap(&value)
        } else {
            value
        };
        record.set(rule.field, value);
    }
    record
}

/// Whether a raw value stands for "no number" and coerces to zero.
pub fn is_placeholder(raw: &str) -> bool {
    matches!(raw, "" | "None" | "?")
}

/// Collapse placeholders to `"0"` and canonicalize through an `f64` round-trip.
///
/// A value that does not parse is returned as-is so rendering reports it.
pub fn normalize_market_cap(raw: &str) -> String {
    if is_placeholder(raw) {
        return "0".to_string();
    }
    match raw.parse::<f64>() {
        // `Display` for f64 is the shortest round-tripping form without an exponent.
        Ok(v) => v.to_string(),
        Err(_) => raw.to_string(),
    }
}
