//! Trading example demonstrating the authenticated endpoints.
//!
//! This example shows how to:
//! 1. Load credentials from the environment
//! 2. Check wallet balances
//! 3. Place a small limit bid
//! 4. Inspect open orders
//! 5. Cancel the order again
//!
//! Set `BITKUB_API_KEY` and `BITKUB_API_SECRET` before running. Placing and
//! cancelling orders moves real funds; the amounts below are deliberately
//! tiny.

use bitkub_sdk::{
    BitkubClient, Credentials, OrderPlacement, OrderRef, OrderType, Side, SymbolQuery,
};
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== Bitkub SDK Trading Example ===\n");

    let credentials = Credentials::from_env()?;
    let client = BitkubClient::with_credentials(credentials);

    // === Step 1: Wallet ===
    println!("1. Checking wallet...");
    let wallet = client.market_wallet().await?;
    println!("   Wallet: {}\n", wallet);

    // === Step 2: Place a limit bid ===
    println!("2. Placing a limit bid of 10 THB on THB_BTC...");
    let order = OrderPlacement {
        sym: "THB_BTC".to_string(),
        amt: dec!(10),
        rat: dec!(1000000),
        typ: OrderType::Limit,
    };

    match client.market_place_bid(&order).await {
        Ok(placed) => {
            println!("   Order placed: {}", placed);

            // === Step 3: Open orders ===
            println!("\n3. Checking open orders...");
            let open = client
                .market_my_open_orders(&SymbolQuery {
                    sym: "THB_BTC".to_string(),
                })
                .await?;
            println!("   Open orders: {}", open);

            // === Step 4: Cancel ===
            if let Some(id) = placed["result"]["id"].as_u64() {
                println!("\n4. Cancelling order {}...", id);
                match client
                    .market_cancel_order(&OrderRef {
                        sym: "THB_BTC".to_string(),
                        id,
                        sd: Side::Buy,
                    })
                    .await
                {
                    Ok(cancelled) => println!("   Cancelled: {}", cancelled),
                    Err(e) => println!("   Cancel failed: {}", e),
                }
            }
        }
        Err(e) => println!("   Order placement failed: {}", e),
    }

    println!("\n=== Example Complete ===");

    Ok(())
}
