// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state_mut;
mod components;
pub mod row_model;
mod screens;

use api::market_providers::coin_gecko::CoinGecko;
use api::market_providers::MarketProvider;
use components::pico::Card;
use components::pico::Container;
use dioxus_logger::tracing;
use screens::markets::MarketsErrorScreen;
use screens::markets::MarketsScreen;

const APP_CSS: &str = r#"
    table {
        width: 100%;
    }

    .table-controls {
        display: flex;
        gap: 1rem;
        align-items: center;
        margin-bottom: 1rem;
    }

    .table-controls input[type="search"] {
        flex: 1;
        margin-bottom: 0;
    }

    .sort-controls {
        display: flex;
        gap: 0.5rem;
    }

    .coin-info {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }

    .coin-image {
        width: 32px;
        height: 32px;
        border-radius: 50%;
    }

    .coin-name {
        font-weight: 600;
    }

    .coin-symbol {
        color: var(--pico-muted-color, #888);
        letter-spacing: 0.05em;
    }

    .change.positive {
        color: #16a34a;
    }

    .change.negative {
        color: #dc2626;
    }

    .placeholder {
        text-align: center;
        padding: 40px;
        color: var(--pico-muted-color, #888);
    }

    .placeholder.warning {
        color: #dc2626;
    }
"#;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{APP_CSS}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // One fetch per application load. There is no retry path; reloading the
    // app is the way to try again.
    let markets = use_resource(move || async move { CoinGecko.fetch_markets().await });

    rsx! {
        Container {
            match &*markets.read() {
                // The request has not come back yet; the table is not
                // readable until it does.
                None => rsx! {
                    Card {
                        h3 { "Top Cryptocurrencies" }
                        p { "Loading market data..." }
                        progress {}
                    }
                },
                Some(Ok(entries)) => rsx! {
                    MarketsScreen {
                        entries: entries.clone(),
                    }
                },
                Some(Err(e)) => {
                    tracing::error!("market data fetch failed: {e}");
                    rsx! {
                        MarketsErrorScreen {}
                    }
                }
            }
        }
    }
}
