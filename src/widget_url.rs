//! Redirect URL assembly for the hosted checkout widget

use url::Url;

use crate::config::WidgetConfig;
use crate::constants::{CRYPTO_CURRENCY, FIAT_CURRENCY, NETWORKS, WIDGET_BASE_URL};
use crate::error::Result;
use crate::signature::{compute_signature, merchant_transaction_id};

/// Build the signed widget redirect URL.
///
/// Generates a fresh merchant transaction id, signs the request, and
/// assembles the fixed endpoint with the provider's documented query
/// parameters. The widget secret is consumed as signature input only and
/// never appears in the result. A signature failure propagates as the build
/// failure; the caller surfaces it instead of loading the widget.
pub fn build_widget_url(config: &WidgetConfig, address: &str, client_ip: &str) -> Result<String> {
    config.validate()?;

    let transaction_id = merchant_transaction_id();
    let signature = compute_signature(
        address,
        config.widget_secret(),
        client_ip,
        &transaction_id,
    )?;

    let mut url = Url::parse(WIDGET_BASE_URL).expect("widget base URL is valid");
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("widget_id", &config.widget_id);
        pairs.append_pair("address", address);
        pairs.append_pair("merchant_transaction_id", &transaction_id);
        pairs.append_pair("signature", &signature);
        pairs.append_pair("fiat_currency", FIAT_CURRENCY);
        pairs.append_pair("networks", NETWORKS);
        pairs.append_pair("currency", CRYPTO_CURRENCY);
        if let Some(theme) = &config.theme {
            pairs.append_pair("theme", theme);
        }
        if let Some(transaction_type) = config.transaction_type {
            pairs.append_pair("type", transaction_type.as_str());
        }
    }

    Ok(url.into())
}
