//! Typed request parameters for each endpoint.
//!
//! Field names are the exchange's wire keys, so each record serializes
//! directly into the request envelope in declaration order.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;

/// Side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

/// Order execution type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Limit,
    Market,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Limit => write!(f, "limit"),
            OrderType::Market => write!(f, "market"),
        }
    }
}

/// Symbol plus result limit, shared by the trade and order-book listings.
#[derive(Debug, Clone, Serialize)]
pub struct MarketQuery {
    /// Symbol name, e.g. `THB_BTC`.
    pub sym: String,
    /// Maximum number of entries to return.
    pub lmt: u64,
}

/// Candlestick window for the tradingview chart data.
#[derive(Debug, Clone, Serialize)]
pub struct TradingViewQuery {
    pub sym: String,
    /// Chart interval in minutes.
    pub int: u32,
    /// Start of the window (epoch seconds).
    pub from: u64,
    /// End of the window (epoch seconds).
    pub to: u64,
}

/// A new buy or sell order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderPlacement {
    pub sym: String,
    /// Amount to spend: quote currency for bids, base currency for asks.
    #[serde(serialize_with = "bare_number")]
    pub amt: Decimal,
    /// Rate for the order.
    #[serde(serialize_with = "bare_number")]
    pub rat: Decimal,
    pub typ: OrderType,
}

/// Reference to an existing order by symbol, id, and side.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRef {
    pub sym: String,
    pub id: u64,
    pub sd: Side,
}

/// Bare symbol query.
#[derive(Debug, Clone, Serialize)]
pub struct SymbolQuery {
    pub sym: String,
}

/// Matched-order history query; page and limit are optional.
#[derive(Debug, Clone, Serialize)]
pub struct OrderHistoryQuery {
    pub sym: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lmt: Option<u32>,
}

/// Serialize a decimal as a bare JSON number.
///
/// The exchange rejects amounts carrying a trailing fractional zero
/// (`1000.0` is invalid, `1000` is accepted), so integral values must go
/// out as integers.
fn bare_number<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_integer() {
        if let Some(n) = value.to_i64() {
            return serializer.serialize_i64(n);
        }
    }
    match value.to_f64() {
        Some(n) => serializer.serialize_f64(n),
        None => Err(serde::ser::Error::custom(
            "amount not representable as a JSON number",
        )),
    }
}
