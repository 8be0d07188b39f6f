//! Static registry of every supported REST operation.
//!
//! Pure data: the dispatcher in [`crate::api`] reads these descriptors to
//! validate parameters and route each call. Adding an endpoint means adding
//! one descriptor here and a typed wrapper on the client.

/// One parameter accepted by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub required: bool,
}

const fn required(name: &'static str) -> Param {
    Param {
        name,
        required: true,
    }
}

const fn optional(name: &'static str) -> Param {
    Param {
        name,
        required: false,
    }
}

/// Descriptor for one REST operation: relative path, authentication
/// requirement, and accepted parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub path: &'static str,
    /// Authenticated endpoints are signed POSTs; the rest are plain GETs.
    pub auth: bool,
    pub params: &'static [Param],
}

pub const SERVER_TIME: Endpoint = Endpoint {
    name: "server_time",
    path: "servertime",
    auth: false,
    params: &[],
};

pub const MARKET_SYMBOLS: Endpoint = Endpoint {
    name: "market_symbols",
    path: "market/symbols",
    auth: false,
    params: &[],
};

pub const MARKET_TICKER: Endpoint = Endpoint {
    name: "market_ticker",
    path: "market/ticker",
    auth: false,
    params: &[],
};

pub const MARKET_TRADES: Endpoint = Endpoint {
    name: "market_trades",
    path: "market/trades",
    auth: false,
    params: &[required("sym"), required("lmt")],
};

pub const MARKET_BIDS: Endpoint = Endpoint {
    name: "market_bids",
    path: "market/bids",
    auth: false,
    params: &[required("sym"), required("lmt")],
};

pub const MARKET_ASKS: Endpoint = Endpoint {
    name: "market_asks",
    path: "market/asks",
    auth: false,
    params: &[required("sym"), required("lmt")],
};

pub const MARKET_BOOKS: Endpoint = Endpoint {
    name: "market_books",
    path: "market/books",
    auth: false,
    params: &[required("sym"), required("lmt")],
};

pub const MARKET_TRADING_VIEW: Endpoint = Endpoint {
    name: "market_trading_view",
    path: "market/tradingview",
    auth: false,
    params: &[
        required("sym"),
        required("int"),
        required("from"),
        required("to"),
    ],
};

pub const MARKET_WALLET: Endpoint = Endpoint {
    name: "market_wallet",
    path: "market/wallet",
    auth: true,
    params: &[],
};

pub const MARKET_BALANCES: Endpoint = Endpoint {
    name: "market_balances",
    path: "market/balances",
    auth: true,
    params: &[],
};

pub const MARKET_PLACE_BID: Endpoint = Endpoint {
    name: "market_place_bid",
    path: "market/place-bid",
    auth: true,
    params: &[
        required("sym"),
        required("amt"),
        required("rat"),
        required("typ"),
    ],
};

pub const MARKET_PLACE_ASK: Endpoint = Endpoint {
    name: "market_place_ask",
    path: "market/place-ask",
    auth: true,
    params: &[
        required("sym"),
        required("amt"),
        required("rat"),
        required("typ"),
    ],
};

pub const MARKET_CANCEL_ORDER: Endpoint = Endpoint {
    name: "market_cancel_order",
    path: "market/cancel-order",
    auth: true,
    params: &[required("sym"), required("id"), required("sd")],
};

pub const MARKET_MY_OPEN_ORDERS: Endpoint = Endpoint {
    name: "market_my_open_orders",
    path: "market/my-open-orders",
    auth: true,
    params: &[required("sym")],
};

pub const MARKET_MY_ORDER_HISTORY: Endpoint = Endpoint {
    name: "market_my_order_history",
    path: "market/my-order-history",
    auth: true,
    params: &[required("sym"), optional("p"), optional("lmt")],
};

pub const MARKET_ORDER_INFO: Endpoint = Endpoint {
    name: "market_order_info",
    path: "market/order-info",
    auth: true,
    params: &[required("sym"), required("id"), required("sd")],
};

/// Every endpoint the SDK knows about.
pub const ALL: &[Endpoint] = &[
    SERVER_TIME,
    MARKET_SYMBOLS,
    MARKET_TICKER,
    MARKET_TRADES,
    MARKET_BIDS,
    MARKET_ASKS,
    MARKET_BOOKS,
    MARKET_TRADING_VIEW,
    MARKET_WALLET,
    MARKET_BALANCES,
    MARKET_PLACE_BID,
    MARKET_PLACE_ASK,
    MARKET_CANCEL_ORDER,
    MARKET_MY_OPEN_ORDERS,
    MARKET_MY_ORDER_HISTORY,
    MARKET_ORDER_INFO,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_and_paths_are_unique() {
        let names: HashSet<&str> = ALL.iter().map(|e| e.name).collect();
        let paths: HashSet<&str> = ALL.iter().map(|e| e.path).collect();
        assert_eq!(names.len(), ALL.len());
        assert_eq!(paths.len(), ALL.len());
    }

    #[test]
    fn test_auth_split() {
        let public = ALL.iter().filter(|e| !e.auth).count();
        let private = ALL.iter().filter(|e| e.auth).count();
        assert_eq!(public, 8);
        assert_eq!(private, 8);
    }

    #[test]
    fn test_paths_are_relative() {
        for endpoint in ALL {
            assert!(
                !endpoint.path.starts_with('/'),
                "{} path must not start with '/'",
                endpoint.name
            );
        }
    }

    #[test]
    fn test_trades_requires_sym_and_lmt() {
        let required: Vec<&str> = MARKET_TRADES
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();
        assert_eq!(required, ["sym", "lmt"]);
    }

    #[test]
    fn test_order_history_page_and_limit_optional() {
        let optional: Vec<&str> = MARKET_MY_ORDER_HISTORY
            .params
            .iter()
            .filter(|p| !p.required)
            .map(|p| p.name)
            .collect();
        assert_eq!(optional, ["p", "lmt"]);
    }
}
