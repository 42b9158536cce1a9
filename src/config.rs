//! Widget configuration for the Mercuryo SDK

use std::fmt;

use crate::constants::{ENV_WIDGET_ID, ENV_WIDGET_SECRET};
use crate::error::{Result, WidgetError};

/// Direction of the hosted checkout flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Buy,
    Sell,
}

impl TransactionType {
    /// Wire value for the widget `type` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => "buy",
            TransactionType::Sell => "sell",
        }
    }
}

/// Widget credentials plus the optional presentation parameters.
///
/// One config covers every checkout flow; the buy and sell screens differ
/// only in `theme` and `transaction_type`.
#[derive(Clone)]
pub struct WidgetConfig {
    /// Mercuryo widget id
    pub widget_id: String,
    /// Mercuryo widget secret, consumed only as signature input. Never
    /// embedded in the redirect URL and redacted from Debug output.
    widget_secret: String,
    /// Optional widget theme (e.g. "dark")
    pub theme: Option<String>,
    /// Optional checkout direction
    pub transaction_type: Option<TransactionType>,
}

impl WidgetConfig {
    /// Create a configuration from explicit credentials
    pub fn new(widget_id: impl Into<String>, widget_secret: impl Into<String>) -> Self {
        Self {
            widget_id: widget_id.into(),
            widget_secret: widget_secret.into(),
            theme: None,
            transaction_type: None,
        }
    }

    /// Read credentials from `MERCURYO_WIDGET_ID` / `MERCURYO_WIDGET_SECRET`
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            env_value(ENV_WIDGET_ID)?,
            env_value(ENV_WIDGET_SECRET)?,
        ))
    }

    /// Set the widget theme
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Set the checkout direction
    pub fn with_transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }

    /// Check that both credentials are present
    pub fn validate(&self) -> Result<()> {
        if self.widget_id.trim().is_empty() {
            return Err(WidgetError::MissingConfiguration(ENV_WIDGET_ID));
        }
        if self.widget_secret.trim().is_empty() {
            return Err(WidgetError::MissingConfiguration(ENV_WIDGET_SECRET));
        }
        Ok(())
    }

    pub(crate) fn widget_secret(&self) -> &str {
        &self.widget_secret
    }
}

impl fmt::Debug for WidgetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetConfig")
            .field("widget_id", &self.widget_id)
            .field("widget_secret", &"<redacted>")
            .field("theme", &self.theme)
            .field("transaction_type", &self.transaction_type)
            .finish()
    }
}

fn env_value(key: &'static str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(WidgetError::MissingConfiguration(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_complete_credentials() {
        let config = WidgetConfig::new("widget-id", "widget-secret");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_widget_id() {
        let config = WidgetConfig::new("", "widget-secret");
        assert!(matches!(
            config.validate(),
            Err(WidgetError::MissingConfiguration(ENV_WIDGET_ID))
        ));
    }

    #[test]
    fn validate_rejects_missing_widget_secret() {
        let config = WidgetConfig::new("widget-id", "  ");
        assert!(matches!(
            config.validate(),
            Err(WidgetError::MissingConfiguration(ENV_WIDGET_SECRET))
        ));
    }

    #[test]
    fn transaction_type_wire_values() {
        assert_eq!(TransactionType::Buy.as_str(), "buy");
        assert_eq!(TransactionType::Sell.as_str(), "sell");
    }

    #[test]
    fn debug_output_redacts_the_secret() {
        let config = WidgetConfig::new("widget-id", "super-secret").with_theme("dark");
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
