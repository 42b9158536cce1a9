//! Buy-flow widget session demo
//!
//! Run with: cargo run --example buy_widget
//!
//! Requires MERCURYO_WIDGET_ID, MERCURYO_WIDGET_SECRET and WALLET_ADDRESS
//! environment variables

use mercuryo_sdk::{
    IpifyResolver, SessionState, SharedIdentity, TransactionType, WidgetConfig, WidgetSession,
};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let address = std::env::var("WALLET_ADDRESS").expect("WALLET_ADDRESS must be set");

    let config = WidgetConfig::from_env()?
        .with_theme("dark")
        .with_transaction_type(TransactionType::Buy);

    let identity = SharedIdentity::with_address(address);
    let mut session = WidgetSession::new(identity, IpifyResolver, config)
        .with_on_complete(|success| println!("purchase finished, success: {success}"));

    let messages = session.mount();
    session.refresh().await;

    match session.state() {
        SessionState::Ready(url) => println!("open the checkout widget at:\n{url}"),
        SessionState::Error(message) => println!("widget unavailable: {message}"),
        state => println!("session still {state:?}"),
    }

    // Simulate the widget posting its completion message back to the shell.
    messages
        .send(serde_json::json!({ "status": "success" }))
        .expect("message channel closed");
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    session.unmount();
    Ok(())
}
