//! WidgetSession - per-mount controller for the embedded checkout widget
//!
//! One controller instance owns one session: it is created when the hosting
//! screen mounts and dropped when the screen goes away. State moves one way
//! within a session (`Idle` → `Loading` → `Ready` or `Error`); only a fresh
//! mount or an identity change re-enters `Loading`.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::config::WidgetConfig;
use crate::error::{Result, WidgetError};
use crate::identity::IdentityProvider;
use crate::ip::ClientIpResolver;
use crate::messages::{MessageSubscription, SessionOutcome};
use crate::widget_url::build_widget_url;

/// Lifecycle state of a widget session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Not mounted
    Idle,
    /// Waiting on identity, IP resolution, or the URL build
    Loading,
    /// Widget URL is ready for the host to display
    Ready(String),
    /// Terminal, user-visible failure. Not retried automatically.
    Error(String),
}

type CompleteFn = dyn Fn(bool) + Send + Sync;
type NavigateBackFn = dyn Fn() + Send + Sync;

/// Completion side of the session: the caller-supplied callback wins,
/// otherwise the navigate-back action runs.
#[derive(Clone, Default)]
struct CompletionHooks {
    on_complete: Option<Arc<CompleteFn>>,
    navigate_back: Option<Arc<NavigateBackFn>>,
}

impl CompletionHooks {
    fn deliver(&self, outcome: SessionOutcome) {
        if let Some(on_complete) = &self.on_complete {
            on_complete(outcome.success);
        } else if let Some(navigate_back) = &self.navigate_back {
            navigate_back();
        } else {
            tracing::debug!(
                success = outcome.success,
                "widget completed with no completion hook installed"
            );
        }
    }
}

/// Controller owning one widget session's state and message subscription
pub struct WidgetSession<I, R> {
    identity: I,
    resolver: R,
    config: WidgetConfig,
    state: SessionState,
    hooks: CompletionHooks,
    subscription: Option<MessageSubscription>,
}

impl<I: IdentityProvider, R: ClientIpResolver> WidgetSession<I, R> {
    /// Create an unmounted session controller
    pub fn new(identity: I, resolver: R, config: WidgetConfig) -> Self {
        Self {
            identity,
            resolver,
            config,
            state: SessionState::Idle,
            hooks: CompletionHooks::default(),
            subscription: None,
        }
    }

    /// Install the completion callback fired with the widget's outcome
    pub fn with_on_complete(mut self, on_complete: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.hooks.on_complete = Some(Arc::new(on_complete));
        self
    }

    /// Install the fallback action used when no completion callback is set
    pub fn with_navigate_back(mut self, navigate_back: impl Fn() + Send + Sync + 'static) -> Self {
        self.hooks.navigate_back = Some(Arc::new(navigate_back));
        self
    }

    /// Current session state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Mount the session: enter `Loading` and register the inbound message
    /// subscription immediately, before and independent of the URL build.
    ///
    /// Returns the sender the host shell feeds widget messages into. Must be
    /// called from within a tokio runtime. Follow up with [`refresh`] to
    /// drive the build sequence.
    ///
    /// [`refresh`]: WidgetSession::refresh
    pub fn mount(&mut self) -> UnboundedSender<Value> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let hooks = self.hooks.clone();
        self.subscription = Some(MessageSubscription::spawn(receiver, move |outcome| {
            hooks.deliver(outcome)
        }));
        self.state = SessionState::Loading;
        sender
    }

    /// Run the build sequence: identity → address → configuration → public
    /// IP → signed URL.
    ///
    /// A missing identity leaves the session in `Loading` (somebody may
    /// still sign in); every other failure is terminal and surfaces as
    /// `Error`. There is no timeout: a hung IP lookup keeps the session in
    /// `Loading`.
    pub async fn refresh(&mut self) {
        self.state = SessionState::Loading;

        match self.try_build().await {
            Ok(url) => {
                tracing::info!("widget session ready");
                self.state = SessionState::Ready(url);
            }
            Err(err) if err.is_recoverable() => {
                tracing::debug!("widget session waiting: {err}");
            }
            Err(err) => {
                tracing::warn!("widget session failed: {err}");
                self.state = SessionState::Error(err.to_string());
            }
        }
    }

    /// React to a signed-in account change: re-enter `Loading` and rebuild,
    /// invalidating any previously built URL.
    pub async fn identity_changed(&mut self) {
        self.refresh().await;
    }

    /// Tear the session down: release the message subscription and return
    /// to `Idle`. Dropping the controller releases the subscription too.
    pub fn unmount(&mut self) {
        self.subscription = None;
        self.state = SessionState::Idle;
    }

    async fn try_build(&self) -> Result<String> {
        let user = self
            .identity
            .current_user()
            .await
            .ok_or(WidgetError::MissingIdentity)?;

        let address = user
            .safe_address
            .filter(|address| !address.is_empty())
            .ok_or(WidgetError::MissingAddress)?;

        self.config.validate()?;

        let client_ip = self.resolver.resolve().await?;
        build_widget_url(&self.config, &address, &client_ip)
    }
}
