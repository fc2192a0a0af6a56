//! Core market-data types and logic shared by every frontend crate.
//!
//! Nothing in here depends on a rendering backend; the `ui` crate layers the
//! Dioxus components on top of these types.

pub mod abbrev;
pub mod market_entry;
pub mod market_providers;
pub mod market_store;

pub use market_entry::MarketEntry;
pub use market_providers::FetchError;
pub use market_store::MarketStore;
