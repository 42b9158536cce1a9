//! Sell-flow widget session demo
//!
//! Same flow as the buy demo; only the configuration point differs. With no
//! completion callback installed, the session falls back to the
//! navigate-back action when the widget reports an outcome.
//!
//! Run with: cargo run --example sell_widget

use mercuryo_sdk::{
    IpifyResolver, SessionState, SharedIdentity, TransactionType, WidgetConfig, WidgetSession,
};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let address = std::env::var("WALLET_ADDRESS").expect("WALLET_ADDRESS must be set");

    let config = WidgetConfig::from_env()?.with_transaction_type(TransactionType::Sell);

    let identity = SharedIdentity::with_address(address);
    let mut session = WidgetSession::new(identity, IpifyResolver, config)
        .with_navigate_back(|| println!("closing the widget screen"));

    let messages = session.mount();
    session.refresh().await;

    match session.state() {
        SessionState::Ready(url) => println!("open the checkout widget at:\n{url}"),
        SessionState::Error(message) => println!("widget unavailable: {message}"),
        state => println!("session still {state:?}"),
    }

    // A failed transaction still completes the session and closes the screen.
    messages
        .send(serde_json::json!({ "event": "transaction.failure" }))
        .expect("message channel closed");
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    session.unmount();
    Ok(())
}
