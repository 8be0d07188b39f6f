//! # Bitkub SDK
//!
//! A standalone Rust SDK for the Bitkub cryptocurrency exchange REST API.
//!
//! ## Features
//!
//! - Typed async methods for every public and private REST endpoint
//! - A static endpoint registry driving one generic dispatcher
//! - HMAC-SHA256 request signing for authenticated calls
//! - Responses passed through as raw JSON, exactly as the exchange sent them
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bitkub_sdk::{BitkubClient, ClientConfig, MarketQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::new("my-api-key", "my-api-secret");
//!     let client = BitkubClient::new(config);
//!
//!     // Public market data
//!     let time = client.server_time().await?;
//!     println!("server time: {}", time);
//!
//!     let trades = client
//!         .market_trades(&MarketQuery {
//!             sym: "THB_BTC".to_string(),
//!             lmt: 10,
//!         })
//!         .await?;
//!     println!("recent trades: {}", trades);
//!
//!     // Authenticated account data
//!     let wallet = client.market_wallet().await?;
//!     println!("wallet: {}", wallet);
//!
//!     Ok(())
//! }
//! ```

// Internal modules
mod api;
mod client;
mod credentials;
mod error;
mod signing;
mod types;

// The endpoint registry is public so callers can drive the generic
// dispatcher directly.
pub mod endpoints;

// Re-export public API
pub use api::{to_params, ApiClient, Params, API_KEY_HEADER};
pub use client::{BitkubClient, ClientConfig, DEFAULT_BASE_URL};
pub use credentials::Credentials;
pub use endpoints::{Endpoint, Param};
pub use error::{Result, SdkError};
pub use signing::{sign_payload, timestamp_ms};
pub use types::{
    MarketQuery, OrderHistoryQuery, OrderPlacement, OrderRef, OrderType, Side, SymbolQuery,
    TradingViewQuery,
};
