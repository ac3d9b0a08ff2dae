use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Custom HTTP headers forwarded alongside a URL load.
pub type HeaderMap = HashMap<String, String>;

/// Detail payload of a `navigationStateChanged` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Detail payload of a `loadError` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadErrorDetail {
    pub url: String,
    pub code: i32,
    pub message: String,
}
