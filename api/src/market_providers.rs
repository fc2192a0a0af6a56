//! Defines traits and implementations for external market-data providers.

use thiserror::Error;

use crate::market_entry::MarketEntry;

/// The single failure outcome of a market-data fetch.
///
/// Transport-level failures and non-success HTTP statuses both land here;
/// the variants only exist so the diagnostic trace can say which it was.
/// Either way the load attempt is terminal and the caller shows the error
/// surface.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection failure, or a response body that failed to decode.
    #[error("market data request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-2xx status.
    #[error("market data endpoint returned status {0}")]
    BadStatus(reqwest::StatusCode),
}

/// A trait for any service that can provide the market snapshot list.
pub trait MarketProvider {
    /// Fetches the current market list, ordered by market cap descending.
    ///
    /// Issues exactly one request and never retries; the caller decides what
    /// a failure means.
    async fn fetch_markets(&self) -> Result<Vec<MarketEntry>, FetchError>;
}

/// Provides market data from the public CoinGecko API.
pub mod coin_gecko {
    use super::*;

    /// An implementation of the `MarketProvider` trait for CoinGecko.
    pub struct CoinGecko;

    impl MarketProvider for CoinGecko {
        async fn fetch_markets(&self) -> Result<Vec<MarketEntry>, FetchError> {
            // Top 10 assets by market cap, quoted in USD, no sparkline payload.
            const URL: &str = "https://api.coingecko.com/api/v3/coins/markets?vs_currency=usd&order=market_cap_desc&per_page=10&page=1&sparkline=false";

            let client = reqwest::Client::new();
            let resp = client.get(URL).send().await?;

            if !resp.status().is_success() {
                return Err(FetchError::BadStatus(resp.status()));
            }

            let entries = resp.json::<Vec<MarketEntry>>().await?;
            dioxus_logger::tracing::info!("fetched {} market entries", entries.len());

            Ok(entries)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::market_entry::MarketEntry;

    // A trimmed two-entry response in the endpoint's wire shape, including
    // fields the data model does not carry.
    const SAMPLE_RESPONSE: &str = r#"[
        {
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
            "current_price": 67234.12,
            "market_cap": 1324567890123,
            "market_cap_rank": 1,
            "total_volume": 28345678901,
            "price_change_percentage_24h": 2.53
        },
        {
            "id": "ethereum",
            "symbol": "eth",
            "name": "Ethereum",
            "image": "https://assets.coingecko.com/coins/images/279/large/ethereum.png",
            "current_price": 3534.8,
            "market_cap": 424567890123,
            "market_cap_rank": 2,
            "total_volume": 15345678901,
            "price_change_percentage_24h": -1.07
        }
    ]"#;

    #[test]
    fn decodes_the_markets_wire_format() {
        let entries: Vec<MarketEntry> = serde_json::from_str(SAMPLE_RESPONSE).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Bitcoin");
        assert_eq!(entries[0].symbol, "btc");
        assert_eq!(entries[0].current_price, 67234.12);
        assert_eq!(entries[1].price_change_percentage_24h, -1.07);
    }
}
