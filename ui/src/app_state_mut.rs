//! Defines the mutable, reactive state for the application's UI.

use api::MarketStore;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// The store signal is written in exactly two places: the fetch-completion
/// path loads the canonical list, and the search/sort handlers rewrite the
/// view list. Everything else only reads it.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The market store backing the table.
    pub store: Signal<MarketStore>,
}
