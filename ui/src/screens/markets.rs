//=============================================================================
// File: src/screens/markets.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::change_badge::ChangeBadge;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::row_model::MarketRow;
use crate::row_model::TableBody;
use crate::row_model::FETCH_ERROR_MESSAGE;
use crate::row_model::NO_RESULTS_MESSAGE;
use api::MarketEntry;
use api::MarketStore;
use dioxus::prelude::*;

/// Column headers, in display order.
const COLUMNS: [&str; 6] = [
    "Coin",
    "Symbol",
    "Price",
    "24h Volume",
    "24h Change",
    "Market Cap",
];

/// A single placeholder row spanning every column.
#[component]
fn PlaceholderRow(message: String, warning: bool) -> Element {
    rsx! {
        tr {
            td {
                colspan: "6",
                class: if warning { "placeholder warning" } else { "placeholder" },
                if warning {
                    "⚠️ {message}"
                } else {
                    "{message}"
                }
            }
        }
    }
}

/// One data row of the markets table.
#[component]
fn MarketRowTr(row: MarketRow) -> Element {
    rsx! {
        tr {
            td {
                div {
                    class: "coin-info",
                    img { src: "{row.image}", alt: "{row.name}", class: "coin-image" }
                    div { class: "coin-name", "{row.name}" }
                }
            }
            td { span { class: "coin-symbol", "{row.symbol}" } }
            td { class: "price", "{row.price}" }
            td { class: "volume", "{row.volume}" }
            td { ChangeBadge { cell: row.change } }
            td { class: "market-cap", "{row.market_cap}" }
        }
    }
}

/// The table itself: fixed header plus whatever the body model says to draw.
#[component]
fn MarketTable(body: TableBody) -> Element {
    rsx! {
        table {
            thead {
                tr {
                    for column in COLUMNS {
                        th { "{column}" }
                    }
                }
            }
            tbody {
                match body {
                    TableBody::Rows(rows) => rsx! {
                        for row in rows {
                            MarketRowTr { row }
                        }
                    },
                    TableBody::NoResults => rsx! {
                        PlaceholderRow { message: "{NO_RESULTS_MESSAGE}", warning: false }
                    },
                    TableBody::FetchFailed => rsx! {
                        PlaceholderRow { message: "{FETCH_ERROR_MESSAGE}", warning: true }
                    },
                }
            }
        }
    }
}

/// The search field. Every keystroke recomputes the view from the canonical
/// list, so typing also discards any active sort.
#[component]
fn SearchBar() -> Element {
    let mut state = use_context::<AppStateMut>();

    rsx! {
        input {
            r#type: "search",
            placeholder: "Search by name or symbol...",
            oninput: move |evt| state.store.write().apply_filter(&evt.value()),
        }
    }
}

/// The two sort actions. Both reorder the current view in place, so an
/// active search filter stays applied.
#[component]
fn SortControls() -> Element {
    let mut state = use_context::<AppStateMut>();

    rsx! {
        div {
            class: "sort-controls",
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| state.store.write().sort_by_market_cap(),
                "Sort by Mkt Cap"
            }
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| state.store.write().sort_by_percentage_change(),
                "Sort by 24h %"
            }
        }
    }
}

/// The loaded markets screen: search, sort actions, and the table.
///
/// Owns the `MarketStore` for the life of the screen and hands it to the
/// controls through the context.
#[component]
pub fn MarketsScreen(entries: Vec<MarketEntry>) -> Element {
    let store = use_signal(move || {
        let mut store = MarketStore::new();
        store.load(entries);
        store
    });
    use_context_provider(|| AppStateMut { store });

    let body = TableBody::from_entries(store.read().view());

    rsx! {
        Card {
            h3 { "Top Cryptocurrencies" }
            nav {
                class: "table-controls",
                SearchBar {}
                SortControls {}
            }
            MarketTable { body }
        }
    }
}

/// Shown when the startup fetch fails: the same table chrome with a single
/// warning row. There is no retry control; reloading the app retries.
#[component]
pub fn MarketsErrorScreen() -> Element {
    rsx! {
        Card {
            h3 { "Top Cryptocurrencies" }
            MarketTable { body: TableBody::fetch_failed() }
        }
    }
}
