//! User identity collaborator
//!
//! The SDK treats the authenticated user as an opaque external dependency:
//! all it needs is the `safeAddress` attribute. `None` from the provider
//! means "nobody is signed in yet", which the session treats as
//! recoverable-by-waiting rather than an error.

use serde::Deserialize;
use std::sync::{Arc, PoisonError, RwLock};

/// Authenticated user attributes consumed by the widget session
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    /// Wallet address funds are delivered to
    #[serde(default)]
    pub safe_address: Option<String>,
}

impl UserIdentity {
    /// Identity with a known wallet address
    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            safe_address: Some(address.into()),
        }
    }
}

/// Supplies the current authenticated user, if any.
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> impl std::future::Future<Output = Option<UserIdentity>> + Send;
}

/// Shared identity slot the host shell updates when the signed-in account
/// changes. Clones observe the same slot.
#[derive(Clone, Default)]
pub struct SharedIdentity {
    inner: Arc<RwLock<Option<UserIdentity>>>,
}

impl SharedIdentity {
    pub fn new(identity: Option<UserIdentity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(identity)),
        }
    }

    /// Shared slot pre-filled with a known wallet address
    pub fn with_address(address: impl Into<String>) -> Self {
        Self::new(Some(UserIdentity::with_address(address)))
    }

    /// Replace the current identity. The host should follow up with
    /// `WidgetSession::identity_changed` so the session rebuilds.
    pub fn set(&self, identity: Option<UserIdentity>) {
        let mut slot = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *slot = identity;
    }
}

impl IdentityProvider for SharedIdentity {
    async fn current_user(&self) -> Option<UserIdentity> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn shared_identity_updates_are_visible_to_clones() {
        let identity = SharedIdentity::default();
        let observer = identity.clone();
        assert!(observer.current_user().await.is_none());

        identity.set(Some(UserIdentity::with_address("0xABC")));
        let user = observer.current_user().await.unwrap();
        assert_eq!(user.safe_address.as_deref(), Some("0xABC"));
    }

    #[test]
    fn identity_deserialises_camel_case_wire_shape() {
        let user: UserIdentity =
            serde_json::from_str(r#"{"safeAddress":"0xABC","email":"a@b.c"}"#).unwrap();
        assert_eq!(user.safe_address.as_deref(), Some("0xABC"));

        let anonymous: UserIdentity = serde_json::from_str("{}").unwrap();
        assert!(anonymous.safe_address.is_none());
    }
}
