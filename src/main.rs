use bybit_connector::{Bybit, ExchangeConfig, Side};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Public endpoints only unless BYBIT_API_KEY / BYBIT_SECRET_KEY are set
    let config = ExchangeConfig::from_env("BYBIT").unwrap_or_else(|_| ExchangeConfig::read_only());
    let bybit = Bybit::new(&config)?;
    let perpetual = bybit.inverse_perpetual();

    println!("Server time: {}", perpetual.server_time().await?);

    let announcements = perpetual.announcement().await?;
    println!("Found {} announcements", announcements.len());
    for item in announcements.iter().take(3) {
        println!("  {} ({})", item.title, item.created_at);
    }

    match perpetual.order_book("BTCUSD").await {
        Ok(book) => {
            let best_bid = book.iter().filter(|e| e.side == Side::Buy).map(|e| e.price).max();
            let best_ask = book.iter().filter(|e| e.side == Side::Sell).map(|e| e.price).min();
            println!("BTCUSD bid {:?} / ask {:?}", best_bid, best_ask);
        }
        Err(e) => println!("Error fetching order book: {}", e),
    }

    Ok(())
}
