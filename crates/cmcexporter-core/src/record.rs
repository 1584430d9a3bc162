//! Coin records as scraped from the ranking page.
//!
//! Every field is kept as the raw text found in the markup. Numbers are only
//! coerced when rendering, so a record is never rewritten after extraction.

use serde::Deserialize;

/// Internal names of the fields an extraction schema can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    Rank,
    Symbol,
    Name,
    Price,
    PriceBtc,
    Volume,
    MarketCap,
    CirculatingSupply,
    #[serde(rename = "change_1h")]
    Change1h,
    #[serde(rename = "change_24h")]
    Change24h,
    #[serde(rename = "change_7d")]
    Change7d,
}

impl RecordField {
    /// All fields, in record order.
    pub const ALL: [RecordField; 11] = [
        RecordField::Rank,
        RecordField::Symbol,
        RecordField::Name,
        RecordField::Price,
        RecordField::PriceBtc,
        RecordField::Volume,
        RecordField::MarketCap,
        RecordField::CirculatingSupply,
        RecordField::Change1h,
        RecordField::Change24h,
        RecordField::Change7d,
    ];

    /// Config-facing name.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordField::Rank => "rank",
            RecordField::Symbol => "symbol",
            RecordField::Name => "name",
            RecordField::Price => "price",
            RecordField::PriceBtc => "price_btc",
            RecordField::Volume => "volume",
            RecordField::MarketCap => "market_cap",
            RecordField::CirculatingSupply => "circulating_supply",
            RecordField::Change1h => "change_1h",
            RecordField::Change24h => "change_24h",
            RecordField::Change7d => "change_7d",
        }
    }
}

/// One coin's attributes for a single scrape cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoinRecord {
    /// Rank as shown on the page (numeric text).
    pub rank: String,
    pub symbol: String,
    pub name: String,
    pub price_usd: String,
    pub price_btc: String,
    pub volume_usd_24h: String,
    /// Always numeric text once extracted (placeholders collapse to `"0"`).
    pub market_cap_usd: String,
    pub circulating_supply: String,
    pub change_percent_1h: String,
    pub change_percent_24h: String,
    pub change_percent_7d: String,
}

impl CoinRecord {
    pub fn get(&self, field: RecordField) -> &str {
        match field {
            RecordField::Rank => &self.rank,
            RecordField::Symbol => &self.symbol,
            RecordField::Name => &self.name,
            RecordField::Price => &self.price_usd,
            RecordField::PriceBtc => &self.price_btc,
            RecordField::Volume => &self.volume_usd_24h,
            RecordField::MarketCap => &self.market_cap_usd,
            RecordField::CirculatingSupply => &self.circulating_supply,
            RecordField::Change1h => &self.change_percent_1h,
            RecordField::Change24h => &self.change_percent_24h,
            RecordField::Change7d => &self.change_percent_7d,
        }
    }

    pub fn set(&mut self, field: RecordField, value: String) {
        let slot = match field {
            RecordField::Rank => &mut self.rank,
            RecordField::Symbol => &mut self.symbol,
            RecordField::Name => &mut self.name,
            RecordField::Price => &mut self.price_usd,
            RecordField::PriceBtc => &mut self.price_btc,
            RecordField::Volume => &mut self.volume_usd_24h,
            RecordField::MarketCap => &mut self.market_cap_usd,
            RecordField::CirculatingSupply => &mut self.circulating_supply,
            RecordField::Change1h => &mut self.change_percent_1h,
            RecordField::Change24h => &mut self.change_percent_24h,
            RecordField::Change7d => &mut self.change_percent_7d,
        };
        *slot = value;
    }
}
