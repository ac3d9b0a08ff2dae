use embedview_common::HeaderMap;
use serde::Serialize;
use serde_json::Value;

/// Layout and configuration options for `create`.
///
/// `top` and `height` get call-time defaults; every other field stays off
/// the wire when absent so the native side applies its own defaults
/// (progress color `#2196F3`, progress height 5 px).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOptions {
    /// Top offset in px. Defaults to 0 at call time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,

    /// Visible height in px. Defaults to the viewport height at call time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Bottom offset in px.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,

    /// Custom HTTP headers for the initial load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HeaderMap>,

    /// Progress bar color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_color: Option<String>,

    /// Progress bar height in px.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_height: Option<f64>,

    /// Enable zoom controls.
    #[serde(skip_serializing_if = "is_false")]
    pub enable_zoom: bool,

    /// Clear the cache before loading.
    #[serde(skip_serializing_if = "is_false")]
    pub clear_cache: bool,

    /// Custom User-Agent string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(b: &bool) -> bool {
    !*b
}

impl CreateOptions {
    /// Options with an explicit frame.
    pub fn with_frame(top: f64, height: f64) -> Self {
        Self {
            top: Some(top),
            height: Some(height),
            ..Default::default()
        }
    }

    /// Fill call-time defaults and serialize to the wire shape.
    pub(super) fn into_wire(mut self, viewport_height: f64) -> Value {
        if self.top.is_none() {
            self.top = Some(0.0);
        }
        if self.height.is_none() {
            self.height = Some(viewport_height);
        }
        serde_json::to_value(&self).unwrap_or_else(|_| Value::Object(Default::default()))
    }
}
