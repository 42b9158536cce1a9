//! Provider contract constants for the Mercuryo SDK

/// Base endpoint of the hosted checkout widget
pub const WIDGET_BASE_URL: &str = "https://exchange.mercuryo.io/";

/// Fiat currency offered in the widget
pub const FIAT_CURRENCY: &str = "EUR";

/// Settlement network passed to the widget
pub const NETWORKS: &str = "ETHEREUM";

/// Crypto currency purchased through the widget
pub const CRYPTO_CURRENCY: &str = "USDC";

/// Version tag prefixed to the hex-encoded widget signature
pub const SIGNATURE_VERSION: &str = "v2";

/// Environment variable holding the Mercuryo widget id
pub const ENV_WIDGET_ID: &str = "MERCURYO_WIDGET_ID";

/// Environment variable holding the Mercuryo widget secret
pub const ENV_WIDGET_SECRET: &str = "MERCURYO_WIDGET_SECRET";

/// Public IP lookup endpoint used for the signature input
pub const IP_RESOLUTION_ENDPOINT: &str = "https://api.ipify.org?format=json";
