//! Error types for the Mercuryo SDK
//!
//! The session state machine branches on error kind: a missing identity is
//! recoverable by waiting, everything else is terminal for the session.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T, E = WidgetError> = std::result::Result<T, E>;

/// Failures raised while preparing or running a widget session
#[derive(Debug, Error)]
pub enum WidgetError {
    /// No authenticated user is available yet. The session stays in
    /// `Loading` until one appears.
    #[error("no authenticated user available")]
    MissingIdentity,

    /// The authenticated user has no wallet address to fund.
    #[error("No address provided")]
    MissingAddress,

    /// A required deployment setting (widget id or secret) is absent.
    #[error("missing widget configuration: {0}")]
    MissingConfiguration(&'static str),

    /// The signature input was unusable.
    #[error("failed to compute widget signature: {0}")]
    SignatureComputation(String),

    /// Public IP lookup failed.
    #[error("failed to resolve client ip: {0}")]
    IpResolution(String),
}

impl WidgetError {
    /// Whether the session should keep waiting instead of surfacing an error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, WidgetError::MissingIdentity)
    }
}

impl From<reqwest::Error> for WidgetError {
    fn from(err: reqwest::Error) -> Self {
        WidgetError::IpResolution(err.to_string())
    }
}
