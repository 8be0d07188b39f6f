//! Market data example demonstrating the public endpoints.
//!
//! Public endpoints need no credentials, so this runs against the production
//! API as-is.

use bitkub_sdk::{BitkubClient, ClientConfig, MarketQuery, TradingViewQuery};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== Bitkub SDK Market Data Example ===\n");

    // Public endpoints work with empty credentials.
    let client = BitkubClient::new(ClientConfig::new("", ""));

    // === Step 1: Server time ===
    println!("1. Fetching server time...");
    let time = client.server_time().await?;
    println!("   Server time: {}\n", time);

    // === Step 2: Available symbols ===
    println!("2. Fetching available symbols...");
    let symbols = client.market_symbols().await?;
    if let Some(list) = symbols["result"].as_array() {
        println!("   Found {} symbols:", list.len());
        for symbol in list.iter().take(5) {
            println!("   - {}", symbol["symbol"]);
        }
    }
    println!();

    // === Step 3: Recent trades ===
    println!("3. Fetching recent THB_BTC trades...");
    let trades = client
        .market_trades(&MarketQuery {
            sym: "THB_BTC".to_string(),
            lmt: 5,
        })
        .await?;
    println!("   Trades: {}\n", trades);

    // === Step 4: Candlestick data ===
    println!("4. Fetching one day of hourly candles...");
    let to = bitkub_sdk::timestamp_ms() / 1000;
    let from = to - 24 * 60 * 60;
    match client
        .market_trading_view(&TradingViewQuery {
            sym: "THB_BTC".to_string(),
            int: 60,
            from,
            to,
        })
        .await
    {
        Ok(candles) => println!("   Candles: {}", candles),
        Err(e) => println!("   Failed to fetch candles: {}", e),
    }

    println!("\n=== Example Complete ===");

    Ok(())
}
