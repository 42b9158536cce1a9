//! Mercuryo Widget SDK for Rust
//!
//! A Rust SDK for embedding the Mercuryo fiat-to-crypto checkout widget in a
//! host application shell.
//!
//! # Features
//!
//! - Signed widget redirect URL construction (SHA-512, `v2:`-prefixed)
//! - Per-mount session controller (`Idle` → `Loading` → `Ready`/`Error`)
//! - Completion handshake over the widget's inbound message channel
//!
//! # Example
//!
//! ```rust,ignore
//! use mercuryo_sdk::{
//!     IpifyResolver, SessionState, SharedIdentity, TransactionType, WidgetConfig,
//!     WidgetSession,
//! };
//!
//! #[tokio::main]
//! async fn main() -> eyre::Result<()> {
//!     let config = WidgetConfig::from_env()?
//!         .with_theme("dark")
//!         .with_transaction_type(TransactionType::Buy);
//!
//!     let identity = SharedIdentity::with_address("0x...");
//!     let mut session = WidgetSession::new(identity, IpifyResolver, config)
//!         .with_on_complete(|success| println!("completed: {success}"));
//!
//!     // The host feeds widget messages into the returned sender.
//!     let messages = session.mount();
//!     session.refresh().await;
//!
//!     if let SessionState::Ready(url) = session.state() {
//!         println!("load the widget at {url}");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod identity;
pub mod ip;
pub mod messages;
pub mod session;
pub mod signature;
pub mod widget_url;

// Re-export main types for convenience
pub use config::{TransactionType, WidgetConfig};
pub use error::{Result, WidgetError};
pub use identity::{IdentityProvider, SharedIdentity, UserIdentity};
pub use ip::{ClientIpResolver, IpifyResolver};
pub use messages::{interpret_message, MessageSubscription, SessionOutcome};
pub use session::{SessionState, WidgetSession};
pub use signature::{compute_signature, merchant_transaction_id};
pub use widget_url::build_widget_url;
