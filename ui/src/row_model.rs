//! Pure projection from market entries to display rows.
//!
//! Everything the table shows — strings, glyphs, style classes — is decided
//! here, free of any Dioxus types, so the exact visible output can be unit
//! tested without a rendering backend. The components in
//! `screens::markets` only draw what this module hands them.

use api::abbrev;
use api::MarketEntry;

/// Fixed message for the fetch-failure placeholder.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch data. Please try again later.";

/// Placeholder message shown when a search matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No cryptocurrencies found matching your search.";

/// Whether a 24-hour change counts as a gain or a loss for display.
///
/// Zero counts as a gain: a flat price gets the up glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ChangeDirection {
    Positive,
    Negative,
}

impl ChangeDirection {
    pub fn from_change(change: f64) -> Self {
        if change >= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// The style class the change badge carries.
    pub fn css_class(&self) -> &'static str {
        self.into()
    }

    /// The glyph preceding the change value.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Positive => "▲",
            Self::Negative => "▼",
        }
    }
}

/// The 24-hour-change cell: direction plus the absolute value, rendered with
/// exactly two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeCell {
    pub direction: ChangeDirection,
    /// e.g. "3.17%"
    pub value: String,
}

impl ChangeCell {
    pub fn new(change: f64) -> Self {
        Self {
            direction: ChangeDirection::from_change(change),
            value: format!("{:.2}%", change.abs()),
        }
    }
}

/// One fully formatted table row.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketRow {
    pub name: String,
    pub image: String,
    /// Upper-cased regardless of source casing.
    pub symbol: String,
    pub price: String,
    pub volume: String,
    pub market_cap: String,
    pub change: ChangeCell,
}

impl MarketRow {
    fn project(entry: &MarketEntry) -> Self {
        Self {
            name: entry.name.clone(),
            image: entry.image.clone(),
            symbol: entry.display_symbol(),
            price: abbrev::format_usd(entry.current_price),
            volume: abbrev::format_usd(entry.total_volume),
            market_cap: format!("Mkt Cap : {}", abbrev::format_usd(entry.market_cap)),
            change: ChangeCell::new(entry.price_change_percentage_24h),
        }
    }
}

/// What the table body shows: data rows, or a single placeholder row
/// spanning every column.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    /// One row per entry, in the given order.
    Rows(Vec<MarketRow>),
    /// Informational placeholder: the search matched nothing.
    NoResults,
    /// Warning placeholder: the startup fetch failed.
    FetchFailed,
}

impl TableBody {
    /// Projects a view list into rows, or the no-results placeholder for an
    /// empty list. Deterministic: the same input always yields the same
    /// body.
    pub fn from_entries(entries: &[MarketEntry]) -> Self {
        if entries.is_empty() {
            TableBody::NoResults
        } else {
            TableBody::Rows(entries.iter().map(MarketRow::project).collect())
        }
    }

    /// The fetch-failure placeholder.
    pub fn fetch_failed() -> Self {
        TableBody::FetchFailed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(
        name: &str,
        symbol: &str,
        price: f64,
        volume: f64,
        market_cap: f64,
        change: f64,
    ) -> MarketEntry {
        MarketEntry {
            name: name.to_string(),
            symbol: symbol.to_string(),
            image: format!("https://example.com/{symbol}.png"),
            current_price: price,
            total_volume: volume,
            market_cap,
            price_change_percentage_24h: change,
        }
    }

    #[test]
    fn empty_input_yields_the_no_results_placeholder() {
        assert_eq!(TableBody::from_entries(&[]), TableBody::NoResults);
    }

    #[test]
    fn one_row_per_entry_in_input_order() {
        let entries = vec![
            entry("Ethereum", "eth", 3_534.8, 15e9, 420e9, -1.07),
            entry("Bitcoin", "btc", 67_234.12, 28e9, 1_300e9, 2.53),
        ];

        let TableBody::Rows(rows) = TableBody::from_entries(&entries) else {
            panic!("expected data rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Ethereum");
        assert_eq!(rows[1].name, "Bitcoin");
    }

    #[test]
    fn row_fields_carry_the_exact_display_strings() {
        let entries = vec![entry("Bitcoin", "btc", 67_234.12, 28e9, 1.3e12, 2.53)];

        let TableBody::Rows(rows) = TableBody::from_entries(&entries) else {
            panic!("expected data rows");
        };
        let row = &rows[0];
        assert_eq!(row.symbol, "BTC");
        assert_eq!(row.price, "$67.23K");
        assert_eq!(row.volume, "$28.00B");
        assert_eq!(row.market_cap, "Mkt Cap : $1300.00B");
        assert_eq!(row.change.value, "2.53%");
    }

    #[test]
    fn change_direction_follows_the_sign() {
        let up = ChangeCell::new(5.236);
        assert!(up.direction.is_positive());
        assert_eq!(up.direction.glyph(), "▲");
        assert_eq!(up.direction.css_class(), "positive");
        assert_eq!(up.value, "5.24%");

        let down = ChangeCell::new(-90.0);
        assert!(down.direction.is_negative());
        assert_eq!(down.direction.glyph(), "▼");
        assert_eq!(down.direction.css_class(), "negative");
        assert_eq!(down.value, "90.00%");

        // non-negative means up, including a flat price
        assert!(ChangeCell::new(0.0).direction.is_positive());
    }

    #[test]
    fn projection_is_deterministic() {
        let entries = vec![entry("Tether", "usdt", 1.0, 40e9, 110e9, 0.01)];
        assert_eq!(
            TableBody::from_entries(&entries),
            TableBody::from_entries(&entries)
        );
    }

    #[test]
    fn fetch_failed_is_its_own_placeholder() {
        assert_eq!(TableBody::fetch_failed(), TableBody::FetchFailed);
        assert_ne!(TableBody::fetch_failed(), TableBody::NoResults);
    }
}
