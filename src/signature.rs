//! Widget signature computation
//!
//! Mercuryo authenticates a widget session with a SHA-512 digest over the
//! concatenation `address || secret || client_ip || merchant_transaction_id`,
//! hex-encoded and prefixed with a version tag. The provider recomputes the
//! same digest server-side; the signature is an authentication tag, not a
//! recoverable payload.

use sha2::{Digest, Sha512};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::constants::SIGNATURE_VERSION;
use crate::error::{Result, WidgetError};

/// Compute the version-prefixed widget signature.
///
/// All four fields must be non-empty. Identical inputs always yield an
/// identical signature; the caller is responsible for passing a fresh
/// `merchant_transaction_id` per attempt (see [`merchant_transaction_id`]).
pub fn compute_signature(
    address: &str,
    secret: &str,
    client_ip: &str,
    merchant_transaction_id: &str,
) -> Result<String> {
    for (name, value) in [
        ("address", address),
        ("secret", secret),
        ("client_ip", client_ip),
        ("merchant_transaction_id", merchant_transaction_id),
    ] {
        if value.is_empty() {
            return Err(WidgetError::SignatureComputation(format!(
                "{name} must not be empty"
            )));
        }
    }

    let mut hasher = Sha512::new();
    hasher.update(address.as_bytes());
    hasher.update(secret.as_bytes());
    hasher.update(client_ip.as_bytes());
    hasher.update(merchant_transaction_id.as_bytes());

    Ok(format!(
        "{}:{}",
        SIGNATURE_VERSION,
        hex::encode(hasher.finalize())
    ))
}

// High-water mark so ids stay strictly increasing even when the clock
// returns the same millisecond twice.
static LAST_ISSUED: AtomicU64 = AtomicU64::new(0);

/// Generate a merchant transaction id: the current Unix time in
/// milliseconds, bumped past any previously issued id. Unique per attempt
/// within the process and never persisted.
pub fn merchant_transaction_id() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0);

    let prev = LAST_ISSUED
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(0);

    now.max(prev + 1).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // SHA-512 of "0xABCs3cr3t1.2.3.41700000000000"
    const FIXTURE_DIGEST: &str = "a9d364611ea0d67dd5f6a1f9866a9f566b809825bf5ce690fb6d0e2687b25c979544b98e786adaa629c89973ed476222dd3724577103de0610fc891c6d09b22b";

    #[test]
    fn signature_matches_known_fixture() {
        let signature =
            compute_signature("0xABC", "s3cr3t", "1.2.3.4", "1700000000000").unwrap();
        assert_eq!(signature, format!("v2:{FIXTURE_DIGEST}"));
    }

    #[test]
    fn signature_is_deterministic() {
        let first = compute_signature("0xABC", "s3cr3t", "1.2.3.4", "1700000000000").unwrap();
        let second = compute_signature("0xABC", "s3cr3t", "1.2.3.4", "1700000000000").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn distinct_transaction_ids_change_the_signature() {
        let first = compute_signature("0xABC", "s3cr3t", "1.2.3.4", "1700000000000").unwrap();
        let second = compute_signature("0xABC", "s3cr3t", "1.2.3.4", "1700000000001").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn signature_carries_version_prefix() {
        let signature = compute_signature("addr", "secret", "ip", "1").unwrap();
        assert!(signature.starts_with("v2:"));
        // "v2:" + 128 hex chars of SHA-512
        assert_eq!(signature.len(), 3 + 128);
    }

    #[test]
    fn empty_fields_are_rejected() {
        for inputs in [
            ("", "secret", "ip", "1"),
            ("addr", "", "ip", "1"),
            ("addr", "secret", "", "1"),
            ("addr", "secret", "ip", ""),
        ] {
            let result = compute_signature(inputs.0, inputs.1, inputs.2, inputs.3);
            assert!(matches!(
                result,
                Err(WidgetError::SignatureComputation(_))
            ));
        }
    }

    #[test]
    fn merchant_transaction_ids_strictly_increase() {
        let ids: Vec<u64> = (0..100)
            .map(|_| merchant_transaction_id().parse().unwrap())
            .collect();
        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn merchant_transaction_id_is_timestamp_derived() {
        let id: u64 = merchant_transaction_id().parse().unwrap();
        // Sanity bound: after 2020-01-01 in milliseconds
        assert!(id > 1_577_836_800_000);
    }
}
