//! Defines the per-asset market snapshot record.

use serde::Deserialize;
use serde::Serialize;

/// One asset's market snapshot, as returned by the markets endpoint.
///
/// Entries are immutable once fetched. Filtering and sorting always work on
/// copies held by the store, never by mutating an entry in place. Fields the
/// endpoint sends beyond these are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketEntry {
    /// Human-readable asset name, e.g. "Bitcoin".
    pub name: String,
    /// Ticker symbol as returned by the source, typically lowercase.
    pub symbol: String,
    /// URI of the asset's logo image.
    pub image: String,
    /// Current price in the quote currency.
    pub current_price: f64,
    /// 24-hour trading volume in the quote currency.
    pub total_volume: f64,
    /// Market capitalization in the quote currency.
    pub market_cap: f64,
    /// Signed 24-hour percentage price change.
    pub price_change_percentage_24h: f64,
}

impl MarketEntry {
    /// The symbol as shown in the table, upper-cased regardless of source
    /// casing.
    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }

    /// Case-insensitive substring match against name or symbol.
    ///
    /// `query` must already be normalized (trimmed and lower-cased).
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query) || self.symbol.to_lowercase().contains(query)
    }
}
