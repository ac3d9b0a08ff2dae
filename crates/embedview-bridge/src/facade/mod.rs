//! The call façade: validate, shape, forward.
//!
//! `EmbeddedWebView` is the whole web-layer surface of the plugin. It keeps
//! no per-instance state of its own — every WebView lives behind the native
//! bridge, distinguished by its caller-chosen instance id.

use std::sync::Arc;

use crate::bridge::NativeBridge;
use crate::router::EventRouter;

mod ops;
mod options;
mod validate;

pub use options::CreateOptions;

/// Host-page viewport metrics, read at call time for option defaults.
pub trait Viewport: Send + Sync {
    /// Current viewport height in px.
    fn height(&self) -> f64;
}

/// Web-layer façade over the native embedded WebView plugin.
pub struct EmbeddedWebView {
    bridge: Arc<dyn NativeBridge>,
    viewport: Arc<dyn Viewport>,
    router: Arc<EventRouter>,
}

impl EmbeddedWebView {
    pub fn new(bridge: Arc<dyn NativeBridge>, viewport: Arc<dyn Viewport>) -> Self {
        Self {
            bridge,
            viewport,
            router: Arc::new(EventRouter::new()),
        }
    }

    /// The event router. Native glue dispatches fired events into it; the
    /// listener surface on the façade subscribes against it.
    pub fn router(&self) -> &Arc<EventRouter> {
        &self.router
    }
}
