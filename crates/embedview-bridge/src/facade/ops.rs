use std::sync::Arc;

use embedview_common::{new_correlation_id, HeaderMap, ValidationError};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::bridge::{Action, Callbacks, SERVICE};
use crate::events::{channel_name, EventKind};
use crate::router::ListenerFn;

use super::{validate, CreateOptions, EmbeddedWebView};

impl EmbeddedWebView {
    /// Create and show a WebView instance loading `url`.
    ///
    /// `top` and `height` defaults are filled here; everything else in
    /// `options` is forwarded as supplied.
    pub fn create(&self, id: &str, url: &str, options: CreateOptions, callbacks: Callbacks) {
        if let Err(err) = validate::require_id(id) {
            return reject(Action::Create, err, callbacks);
        }
        if let Err(err) = validate::require_url(url) {
            return reject(Action::Create, err, callbacks);
        }

        let options = options.into_wire(self.viewport.height());
        self.forward(
            Action::Create,
            vec![Value::from(id), Value::from(url), options],
            callbacks,
        );
    }

    /// Destroy an instance. Whether it existed is the native side's call to
    /// report.
    pub fn destroy(&self, id: &str, callbacks: Callbacks) {
        self.instance_op(Action::Destroy, id, callbacks);
    }

    /// Navigate an instance to a new URL, optionally with custom headers.
    /// Absent headers are forwarded as null.
    pub fn load_url(&self, id: &str, url: &str, headers: Option<&HeaderMap>, callbacks: Callbacks) {
        if let Err(err) = validate::require_id(id) {
            return reject(Action::LoadUrl, err, callbacks);
        }
        if let Err(err) = validate::require_url(url) {
            return reject(Action::LoadUrl, err, callbacks);
        }

        let headers = match headers {
            Some(map) => serde_json::to_value(map).unwrap_or(Value::Null),
            None => Value::Null,
        };
        self.forward(
            Action::LoadUrl,
            vec![Value::from(id), Value::from(url), headers],
            callbacks,
        );
    }

    /// Execute JavaScript inside an instance. The result of the last
    /// statement comes back through the success callback.
    pub fn execute_script(&self, id: &str, script: &str, callbacks: Callbacks) {
        if let Err(err) = validate::require_id(id) {
            return reject(Action::ExecuteScript, err, callbacks);
        }
        if let Err(err) = validate::require_script(script) {
            return reject(Action::ExecuteScript, err, callbacks);
        }

        self.forward(
            Action::ExecuteScript,
            vec![Value::from(id), Value::from(script)],
            callbacks,
        );
    }

    /// Show or hide an instance.
    pub fn set_visible(&self, id: &str, visible: bool, callbacks: Callbacks) {
        if let Err(err) = validate::require_id(id) {
            return reject(Action::SetVisible, err, callbacks);
        }

        self.forward(
            Action::SetVisible,
            vec![Value::from(id), Value::Bool(visible)],
            callbacks,
        );
    }

    /// Reload the current page of an instance.
    pub fn reload(&self, id: &str, callbacks: Callbacks) {
        self.instance_op(Action::Reload, id, callbacks);
    }

    /// Go back in an instance's history.
    pub fn go_back(&self, id: &str, callbacks: Callbacks) {
        self.instance_op(Action::GoBack, id, callbacks);
    }

    /// Go forward in an instance's history.
    pub fn go_forward(&self, id: &str, callbacks: Callbacks) {
        self.instance_op(Action::GoForward, id, callbacks);
    }

    /// Ask the native side whether an instance can go back. The answer
    /// (1/0) arrives through the success callback.
    pub fn can_go_back(&self, id: &str, callbacks: Callbacks) {
        self.instance_op(Action::CanGoBack, id, callbacks);
    }

    /// Subscribe `listener` to one event kind of one instance.
    ///
    /// Misuse has no callback path here: an empty id is logged and the call
    /// no-ops. Removal later requires the exact `Arc` registered now.
    pub fn add_event_listener(&self, id: &str, kind: EventKind, listener: Arc<ListenerFn>) {
        if id.is_empty() {
            error!(event = %kind, "id must be a non-empty string");
            return;
        }
        self.router.subscribe(channel_name(id, kind), listener);
    }

    /// Remove a previously registered listener, matched by identity.
    pub fn remove_event_listener(&self, id: &str, kind: EventKind, listener: &Arc<ListenerFn>) {
        if id.is_empty() {
            error!(event = %kind, "id must be a non-empty string");
            return;
        }
        self.router.unsubscribe(&channel_name(id, kind), listener);
    }

    /// Ops whose argument list is just the instance id.
    fn instance_op(&self, action: Action, id: &str, callbacks: Callbacks) {
        if let Err(err) = validate::require_id(id) {
            return reject(action, err, callbacks);
        }
        self.forward(action, vec![Value::from(id)], callbacks);
    }

    fn forward(&self, action: Action, args: Vec<Value>, callbacks: Callbacks) {
        let correlation_id = new_correlation_id();
        debug!(action = %action, correlation_id = %correlation_id, "forwarding bridge call");
        self.bridge.exec(SERVICE, action, args, callbacks);
    }
}

fn reject(action: Action, err: ValidationError, callbacks: Callbacks) {
    warn!(action = %action, error = %err, "call rejected before reaching the bridge");
    callbacks.fail(err.to_string());
}
