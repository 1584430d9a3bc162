//! Prometheus text exposition for scraped coins.
//!
//! Output shape:
//! - one status line (no labels), `1` when the scrape succeeded, `0` otherwise;
//! - nine lines per coin, `metric{symbol="S",name="N"} value`, in
//!   [`MetricKey::ALL`] order, coins in the order received.
//!
//! Rendering stops at the first value that cannot be coerced; a partial body
//! is never returned.

pub mod metric;
pub mod number;

use std::fmt::Write;

use crate::error::Result;
use crate::normalize::NormalizedCoin;

pub use metric::MetricKey;
pub use number::{format_value, parse_number};

/// Name of the scrape status line.
pub const STATUS_METRIC: &str =
    "## Export coinmarketcap coins for prometheus indexing and analysis";

/// Helper to escape label values.
pub fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Append one `name{labels} value` line; the label block is omitted when empty.
pub fn write_line(out: &mut String, name: &str, labels: &str, value: &str) {
    if labels.is_empty() {
        let _ = writeln!(out, "{} {}", name, value);
    } else {
        let _ = writeln!(out, "{}{{{}}} {}", name, labels, value);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    escape_labels: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { escape_labels: true }
    }
}

impl Renderer {
    /// `escape_labels = false` writes symbol/name verbatim, so a quote in a
    /// coin name breaks the line.
    pub fn new(escape_labels: bool) -> Self {
        Self { escape_labels }
    }

    pub fn render(&self, up: bool, coins: &[NormalizedCoin]) -> Result<String> {
        let mut out = String::with_capacity(64 + coins.len() * 9 * 64);
        write_line(&mut out, STATUS_METRIC, "", if up { "1" } else { "0" });

        for coin in coins {
            let labels = self.labels(coin);
            for (key, raw) in &coin.values {
                let v = parse_number(key.metric_name(), raw)?;
                write_line(&mut out, key.metric_name(), &labels, &format_value(v, key.precision()));
            }
        }
        Ok(out)
    }

    fn labels(&self, coin: &NormalizedCoin) -> String {
        if self.escape_labels {
            format!(
                "symbol=\"{}\",name=\"{}\"",
                escape_label(&coin.symbol),
                escape_label(&coin.name)
            )
        } else {
            format!("symbol=\"{}\",name=\"{}\"", coin.symbol, coin.name)
        }
    }
}
