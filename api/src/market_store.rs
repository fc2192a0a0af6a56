//! Holds the fetched market list and the currently displayed view of it.

use crate::market_entry::MarketEntry;

/// Owns the canonical fetched list and the view list derived from it.
///
/// The canonical list is replaced wholesale by a successful fetch and is
/// never filtered or sorted in place. The view list is what the table
/// renders: the subset of the canonical list selected by the active search
/// query, in whatever order the most recent sort left it. Both start empty
/// and stay empty if the fetch fails.
///
/// Single-writer by construction: the fetch continuation writes the
/// canonical list, the search and sort handlers write the view, and both run
/// on the one UI task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketStore {
    canonical: Vec<MarketEntry>,
    view: Vec<MarketEntry>,
}

impl MarketStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the canonical list with a fresh fetch result.
    ///
    /// The view resets to an unfiltered, unsorted copy of the new list, in
    /// the order the source returned it.
    pub fn load(&mut self, entries: Vec<MarketEntry>) {
        self.view = entries.clone();
        self.canonical = entries;
    }

    /// The full fetched list, in source order.
    pub fn canonical(&self) -> &[MarketEntry] {
        &self.canonical
    }

    /// The entries the table currently displays.
    pub fn view(&self) -> &[MarketEntry] {
        &self.view
    }

    /// Recomputes the view from the canonical list for a search query.
    ///
    /// The query is trimmed and matched case-insensitively as a substring of
    /// each entry's name or symbol. An empty query restores the full
    /// canonical list. Any previous sort is discarded; matches keep source
    /// order.
    pub fn apply_filter(&mut self, query: &str) {
        let query = query.trim().to_lowercase();
        self.view = if query.is_empty() {
            self.canonical.clone()
        } else {
            self.canonical
                .iter()
                .filter(|entry| entry.matches(&query))
                .cloned()
                .collect()
        };
    }

    /// Reorders the current view by market capitalization, highest first.
    pub fn sort_by_market_cap(&mut self) {
        self.view
            .sort_by(|a, b| b.market_cap.total_cmp(&a.market_cap));
    }

    /// Reorders the current view by signed 24-hour change, highest first.
    ///
    /// A +1% entry outranks a flat one, which outranks a −5% one. Ties keep
    /// their prior relative order.
    pub fn sort_by_percentage_change(&mut self) {
        self.view.sort_by(|a, b| {
            b.price_change_percentage_24h
                .total_cmp(&a.price_change_percentage_24h)
        });
    }
}
