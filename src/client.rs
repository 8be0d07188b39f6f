//! Main BitkubClient facade for the SDK.
//!
//! One typed method per registry endpoint, each a thin delegation to the
//! generic dispatcher.

use serde_json::Value;
use tracing::info;

use crate::api::{to_params, ApiClient, Params};
use crate::credentials::Credentials;
use crate::endpoints;
use crate::error::Result;
use crate::types::{
    MarketQuery, OrderHistoryQuery, OrderPlacement, OrderRef, SymbolQuery, TradingViewQuery,
};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.bitkub.com/api/";

/// Configuration for the Bitkub client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key generated from Bitkub
    pub api_key: String,
    /// API secret generated from Bitkub
    pub api_secret: String,
    /// API root to talk to; defaults to [`DEFAULT_BASE_URL`]
    pub base_url: String,
}

impl ClientConfig {
    /// Configuration against the production API.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API root (e.g. a sandbox).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// The main Bitkub SDK client.
///
/// Every method is bound to one entry of the endpoint registry and returns
/// the response body as raw [`serde_json::Value`], exactly as the exchange
/// sent it.
pub struct BitkubClient {
    api: ApiClient,
}

impl BitkubClient {
    /// Create a new BitkubClient from the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        let ClientConfig {
            api_key,
            api_secret,
            base_url,
        } = config;
        Self::from_parts(Credentials::new(api_key, api_secret), &base_url)
    }

    /// Create a client from prepared credentials against the production API.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self::from_parts(credentials, DEFAULT_BASE_URL)
    }

    fn from_parts(credentials: Credentials, base_url: &str) -> Self {
        let api = ApiClient::new(credentials, base_url);
        info!("Bitkub client initialized against {}", api.base_url());
        Self { api }
    }

    /// Access the underlying dispatch client.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // =========================================================================
    // Public market data
    // =========================================================================

    /// Get server timestamp.
    pub async fn server_time(&self) -> Result<Value> {
        self.api.call(&endpoints::SERVER_TIME, Params::new()).await
    }

    /// List all available symbols.
    pub async fn market_symbols(&self) -> Result<Value> {
        self.api
            .call(&endpoints::MARKET_SYMBOLS, Params::new())
            .await
    }

    /// Get ticker information for every symbol.
    pub async fn market_ticker(&self) -> Result<Value> {
        self.api
            .call(&endpoints::MARKET_TICKER, Params::new())
            .await
    }

    /// List recent trades.
    pub async fn market_trades(&self, query: &MarketQuery) -> Result<Value> {
        self.api
            .call(&endpoints::MARKET_TRADES, to_params(query)?)
            .await
    }

    /// List open buy orders.
    pub async fn market_bids(&self, query: &MarketQuery) -> Result<Value> {
        self.api
            .call(&endpoints::MARKET_BIDS, to_params(query)?)
            .await
    }

    /// List open sell orders.
    pub async fn market_asks(&self, query: &MarketQuery) -> Result<Value> {
        self.api
            .call(&endpoints::MARKET_ASKS, to_params(query)?)
            .await
    }

    /// List all open orders on both sides of the book.
    pub async fn market_books(&self, query: &MarketQuery) -> Result<Value> {
        self.api
            .call(&endpoints::MARKET_BOOKS, to_params(query)?)
            .await
    }

    /// Get candlestick data for displaying a tradingview graph.
    pub async fn market_trading_view(&self, query: &TradingViewQuery) -> Result<Value> {
        self.api
            .call(&endpoints::MARKET_TRADING_VIEW, to_params(query)?)
            .await
    }

    // =========================================================================
    // Authenticated account and trading operations
    // =========================================================================

    /// Get user available balances.
    pub async fn market_wallet(&self) -> Result<Value> {
        self.api
            .call(&endpoints::MARKET_WALLET, Params::new())
            .await
    }

    /// Get balances including both available and reserved amounts.
    pub async fn market_balances(&self) -> Result<Value> {
        self.api
            .call(&endpoints::MARKET_BALANCES, Params::new())
            .await
    }

    /// Create a buy order.
    pub async fn market_place_bid(&self, order: &OrderPlacement) -> Result<Value> {
        self.api
            .call(&endpoints::MARKET_PLACE_BID, to_params(order)?)
            .await
    }

    /// Create a sell order.
    pub async fn market_place_ask(&self, order: &OrderPlacement) -> Result<Value> {
        self.api
            .call(&endpoints::MARKET_PLACE_ASK, to_params(order)?)
            .await
    }

    /// Cancel an open order.
    pub async fn market_cancel_order(&self, order: &OrderRef) -> Result<Value> {
        self.api
            .call(&endpoints::MARKET_CANCEL_ORDER, to_params(order)?)
            .await
    }

    /// List all open orders of the given symbol.
    pub async fn market_my_open_orders(&self, query: &SymbolQuery) -> Result<Value> {
        self.api
            .call(&endpoints::MARKET_MY_OPEN_ORDERS, to_params(query)?)
            .await
    }

    /// List orders of the given symbol that have already matched.
    pub async fn market_my_order_history(&self, query: &OrderHistoryQuery) -> Result<Value> {
        self.api
            .call(&endpoints::MARKET_MY_ORDER_HISTORY, to_params(query)?)
            .await
    }

    /// Get information about the specified order.
    pub async fn market_order_info(&self, order: &OrderRef) -> Result<Value> {
        self.api
            .call(&endpoints::MARKET_ORDER_INFO, to_params(order)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_to_production() {
        let config = ClientConfig::new("k", "s");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_config_base_url_override() {
        let config = ClientConfig::new("k", "s").with_base_url("https://sandbox.example/api");
        assert_eq!(config.base_url, "https://sandbox.example/api");

        let client = BitkubClient::new(config);
        assert_eq!(client.api().base_url(), "https://sandbox.example/api/");
    }

    #[test]
    fn test_with_credentials_targets_production() {
        let client = BitkubClient::with_credentials(Credentials::new("k", "s"));
        assert_eq!(client.api().base_url(), DEFAULT_BASE_URL);
    }
}
