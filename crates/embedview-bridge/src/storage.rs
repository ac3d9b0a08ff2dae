//! Storage access helpers.
//!
//! Builds one-line scripts driving the Web Storage API inside an instance
//! and hands them to `execute_script`. Every caller-supplied key/value is
//! embedded as a JSON string literal, never concatenated raw, so quotes,
//! backslashes, and control characters cannot terminate or extend the
//! generated statement.

use std::fmt;

use crate::bridge::Callbacks;
use crate::facade::EmbeddedWebView;

/// Storage key used when `inject_auth_token` is not given one.
pub const DEFAULT_TOKEN_KEY: &str = "authToken";

/// Which browser storage object a helper script targets.
///
/// A closed set on purpose: the object name lands in identifier position
/// of the generated script, where literal encoding cannot protect it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageArea {
    #[default]
    Local,
    Session,
}

impl StorageArea {
    /// The global object the script dereferences.
    pub fn object_name(self) -> &'static str {
        match self {
            Self::Local => "localStorage",
            Self::Session => "sessionStorage",
        }
    }
}

impl fmt::Display for StorageArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.object_name())
    }
}

/// Encode a value as a JS string literal (JSON string syntax is a subset).
fn js_string_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// `<area>.setItem(<key>, <value>);`
pub fn set_item_script(area: StorageArea, key: &str, value: &str) -> String {
    format!(
        "{}.setItem({}, {});",
        area.object_name(),
        js_string_literal(key),
        js_string_literal(value)
    )
}

/// `<area>.getItem(<key>);`
pub fn get_item_script(area: StorageArea, key: &str) -> String {
    format!(
        "{}.getItem({});",
        area.object_name(),
        js_string_literal(key)
    )
}

impl EmbeddedWebView {
    /// Store an authentication token in an instance's storage.
    ///
    /// `key` defaults to [`DEFAULT_TOKEN_KEY`]; a `None` token stores the
    /// empty string.
    pub fn inject_auth_token(
        &self,
        id: &str,
        token: Option<&str>,
        area: StorageArea,
        key: Option<&str>,
        callbacks: Callbacks,
    ) {
        let script = set_item_script(
            area,
            key.unwrap_or(DEFAULT_TOKEN_KEY),
            token.unwrap_or(""),
        );
        self.execute_script(id, &script, callbacks);
    }

    /// Read a storage value from an instance. The value (or null) arrives
    /// through the success callback.
    pub fn get_storage_value(&self, id: &str, key: &str, area: StorageArea, callbacks: Callbacks) {
        let script = get_item_script(area, key);
        self.execute_script(id, &script, callbacks);
    }
}
