//! The generic call seam into the native platform layer.
//!
//! The web layer never talks to a concrete WebView here. It hands a
//! `(service, action, args)` triple plus a pair of one-shot callbacks to a
//! `NativeBridge` implementation, which dispatches on the action name and
//! settles the call at an indeterminate later point.

use std::fmt;

use serde_json::Value;

/// Command namespace the native dispatcher matches first.
pub const SERVICE: &str = "EmbeddedWebView";

/// Every command forwarded across the native bridge.
///
/// The native dispatcher matches on the wire name, so the names here are
/// fixed protocol, not a style choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Destroy,
    LoadUrl,
    ExecuteScript,
    SetVisible,
    Reload,
    GoBack,
    GoForward,
    CanGoBack,
}

impl Action {
    /// Wire name the native side dispatches on.
    pub fn name(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Destroy => "destroy",
            Self::LoadUrl => "loadUrl",
            Self::ExecuteScript => "executeScript",
            Self::SetVisible => "setVisible",
            Self::Reload => "reload",
            Self::GoBack => "goBack",
            Self::GoForward => "goForward",
            Self::CanGoBack => "canGoBack",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Success callback. Receives the native result payload.
pub type SuccessFn = Box<dyn FnOnce(Value) + Send + 'static>;

/// Error callback. Receives a descriptive error string — either a local
/// validation message or the native error passed through unmodified.
pub type ErrorFn = Box<dyn FnOnce(String) + Send + 'static>;

/// Result callbacks for a single bridge call.
///
/// A call settles at most once: `succeed` and `fail` consume the pair, so
/// double delivery is unrepresentable. Either side may be absent — settling
/// a missing side is a silent no-op, mirroring callers that only care about
/// one outcome.
#[derive(Default)]
pub struct Callbacks {
    on_success: Option<SuccessFn>,
    on_error: Option<ErrorFn>,
}

impl Callbacks {
    /// Fire-and-forget: neither outcome is observed.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn on_success(f: impl FnOnce(Value) + Send + 'static) -> Self {
        Self {
            on_success: Some(Box::new(f)),
            on_error: None,
        }
    }

    pub fn on_error(f: impl FnOnce(String) + Send + 'static) -> Self {
        Self {
            on_success: None,
            on_error: Some(Box::new(f)),
        }
    }

    /// Attach an error callback to an existing pair.
    pub fn and_error(mut self, f: impl FnOnce(String) + Send + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    /// Settle the call successfully with the native result payload.
    pub fn succeed(self, value: Value) {
        if let Some(f) = self.on_success {
            f(value);
        }
    }

    /// Settle the call with a descriptive error string.
    pub fn fail(self, message: impl Into<String>) {
        if let Some(f) = self.on_error {
            f(message.into());
        }
    }
}

/// The generic mechanism by which web-layer code invokes native platform
/// functionality.
///
/// `exec` must not block; results arrive later through `callbacks`, exactly
/// once per call. No ordering is guaranteed between in-flight calls, and a
/// forwarded call cannot be aborted.
pub trait NativeBridge: Send + Sync {
    fn exec(&self, service: &str, action: Action, args: Vec<Value>, callbacks: Callbacks);
}
