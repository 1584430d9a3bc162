//! External metric vocabulary.

/// Stable metric keys, in the order they are emitted per coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKey {
    CoinRank,
    PriceUsd,
    PriceBtc,
    VolumeUsd24h,
    MarketCapUsd,
    CirculatingSupply,
    PercentChange1h,
    PercentChange24h,
    PercentChange7d,
}

impl MetricKey {
    pub const ALL: [MetricKey; 9] = [
        MetricKey::CoinRank,
        MetricKey::PriceUsd,
        MetricKey::PriceBtc,
        MetricKey::VolumeUsd24h,
        MetricKey::MarketCapUsd,
        MetricKey::CirculatingSupply,
        MetricKey::PercentChange1h,
        MetricKey::PercentChange24h,
        MetricKey::PercentChange7d,
    ];

    /// Metric name on the wire.
    pub fn metric_name(self) -> &'static str {
        match self {
            MetricKey::CoinRank => "coin_rank",
            MetricKey::PriceUsd => "coin_price_usd",
            MetricKey::PriceBtc => "coin_price_btc",
            MetricKey::VolumeUsd24h => "coin_24h_volume_usd",
            MetricKey::MarketCapUsd => "coin_market_cap_usd",
            MetricKey::CirculatingSupply => "coin_circulating_supply",
            MetricKey::PercentChange1h => "coin_percent_change_1h",
            MetricKey::PercentChange24h => "coin_percent_change_24h",
            MetricKey::PercentChange7d => "coin_percent_change_7d",
        }
    }

    /// Digits after the decimal point.
    pub fn precision(self) -> usize {
        match self {
            MetricKey::CoinRank | MetricKey::CirculatingSupply => 0,
            MetricKey::PriceUsd | MetricKey::PriceBtc => 6,
            MetricKey::VolumeUsd24h => 1,
            MetricKey::MarketCapUsd => 3,
            MetricKey::PercentChange1h
            | MetricKey::PercentChange24h
            | MetricKey::PercentChange7d => 2,
        }
    }
}
