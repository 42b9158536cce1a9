//! Completion handshake with the embedded widget
//!
//! The widget posts structured messages back to the host shell for the
//! lifetime of the session. Only two shapes matter: a `status` of
//! `success`/`failure`, or an `event` of `transaction.success`/
//! `transaction.failure`. Everything else is ignored; malformed payloads are
//! logged and dropped without touching session state.

use serde::Deserialize;
use serde_json::Value;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

/// Terminal outcome reported by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub success: bool,
}

#[derive(Debug, Deserialize)]
struct WidgetMessage {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    event: Option<String>,
}

/// Interpret one inbound widget message.
///
/// Returns `Some` only for a recognised completion notification. Payloads
/// that are not objects, or objects with neither field set to a known
/// value, yield `None`.
pub fn interpret_message(payload: &Value) -> Option<SessionOutcome> {
    let message: WidgetMessage = match serde_json::from_value(payload.clone()) {
        Ok(message) => message,
        Err(err) => {
            tracing::warn!("ignoring malformed widget message: {err}");
            return None;
        }
    };

    match (message.status.as_deref(), message.event.as_deref()) {
        (Some("success"), _) | (_, Some("transaction.success")) => {
            Some(SessionOutcome { success: true })
        }
        (Some("failure"), _) | (_, Some("transaction.failure")) => {
            Some(SessionOutcome { success: false })
        }
        _ => None,
    }
}

/// Owned handle over the inbound message subscription.
///
/// The subscription drains the channel until the first completion outcome,
/// delivers it to the handler exactly once, and exits. Dropping the handle
/// aborts the task, so the listener is released on every exit path.
pub struct MessageSubscription {
    task: JoinHandle<()>,
}

impl MessageSubscription {
    /// Start draining `messages`, invoking `on_outcome` with the first
    /// completion notification. Must be called from within a tokio runtime.
    pub fn spawn(
        mut messages: UnboundedReceiver<Value>,
        on_outcome: impl Fn(SessionOutcome) + Send + 'static,
    ) -> Self {
        let task = tokio::spawn(async move {
            while let Some(payload) = messages.recv().await {
                if let Some(outcome) = interpret_message(&payload) {
                    tracing::debug!(success = outcome.success, "widget reported completion");
                    on_outcome(outcome);
                    break;
                }
            }
        });
        Self { task }
    }
}

impl Drop for MessageSubscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}
