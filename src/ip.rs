//! Public IP resolution
//!
//! The widget signature covers the caller's public IP, so the session
//! controller resolves it before building the redirect URL. The trait seam
//! lets hosts substitute their own lookup (or a fixed value in tests).

use serde::Deserialize;

use crate::constants::IP_RESOLUTION_ENDPOINT;
use crate::error::Result;

/// Resolves the caller's public IP address.
pub trait ClientIpResolver: Send + Sync {
    /// Returns the public IP as a plain string (e.g. `"1.2.3.4"`).
    fn resolve(&self) -> impl std::future::Future<Output = Result<String>> + Send;
}

#[derive(Debug, Deserialize)]
struct IpResponse {
    ip: String,
}

/// Production resolver backed by the ipify lookup service. No retry; a
/// failed lookup fails the session build.
#[derive(Debug, Clone, Copy, Default)]
pub struct IpifyResolver;

impl ClientIpResolver for IpifyResolver {
    async fn resolve(&self) -> Result<String> {
        let client = reqwest::Client::builder()
            .user_agent("MercuryoRustSDK/0.1.0")
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        let response: IpResponse = client
            .get(IP_RESOLUTION_ENDPOINT)
            .send()
            .await?
            .json()
            .await?;

        Ok(response.ip)
    }
}
