//! Mapping from internal record fields to external metric keys.
//!
//! The wire vocabulary is decoupled from the scraper's field names through a
//! single table applied once per record.

use crate::exposition::MetricKey;
use crate::record::{CoinRecord, RecordField};

/// Internal field → external metric key, in emission order.
pub const FIELD_MAP: [(RecordField, MetricKey); 9] = [
    (RecordField::Rank, MetricKey::CoinRank),
    (RecordField::Price, MetricKey::PriceUsd),
    (RecordField::PriceBtc, MetricKey::PriceBtc),
    (RecordField::Volume, MetricKey::VolumeUsd24h),
    (RecordField::MarketCap, MetricKey::MarketCapUsd),
    (RecordField::CirculatingSupply, MetricKey::CirculatingSupply),
    (RecordField::Change1h, MetricKey::PercentChange1h),
    (RecordField::Change24h, MetricKey::PercentChange24h),
    (RecordField::Change7d, MetricKey::PercentChange7d),
];

/// A record keyed by the external vocabulary. Values are still raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedCoin {
    pub symbol: String,
    pub name: String,
    pub values: [(MetricKey, String); 9],
}

impl NormalizedCoin {
    pub fn from_record(record: &CoinRecord) -> Self {
        Self {
            symbol: record.symbol.clone(),
            name: record.name.clone(),
            values: FIELD_MAP.map(|(field, key)| (key, record.get(field).to_string())),
        }
    }

    pub fn value(&self, key: MetricKey) -> Option<&str> {
        self.values.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }
}

/// Normalize a scrape, preserving record order.
pub fn normalize(records: &[CoinRecord]) -> Vec<NormalizedCoin> {
    records.iter().map(NormalizedCoin::from_record).collect()
}
