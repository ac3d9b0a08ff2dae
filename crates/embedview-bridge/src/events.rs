//! Status event kinds and channel naming.
//!
//! The native side reports per-instance status by firing a named broadcast
//! on a channel derived from the instance id and the event kind. Channel
//! names are protocol: `embeddedwebview.<id>.<eventName>`, plus a
//! non-scoped `embeddedwebview.<eventName>` form fired for all instances.

use std::fmt;

use serde::{Deserialize, Serialize};

pub use embedview_common::types::{LoadErrorDetail, NavigationState};

/// Prefix shared by every event channel.
pub const CHANNEL_PREFIX: &str = "embeddedwebview";

/// Status events a WebView instance can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    /// Navigation started. Detail: the URL.
    LoadStart,
    /// Page finished loading. Detail: the URL.
    LoadStop,
    /// Page failed to load. Detail: [`LoadErrorDetail`].
    LoadError,
    /// Back/forward availability recomputed. Detail: [`NavigationState`].
    NavigationStateChanged,
    CanGoBackChanged,
    CanGoForwardChanged,
}

impl EventKind {
    pub const ALL: [EventKind; 6] = [
        Self::LoadStart,
        Self::LoadStop,
        Self::LoadError,
        Self::NavigationStateChanged,
        Self::CanGoBackChanged,
        Self::CanGoForwardChanged,
    ];

    /// Wire name used in channel names and serialized payloads.
    pub fn name(self) -> &'static str {
        match self {
            Self::LoadStart => "loadStart",
            Self::LoadStop => "loadStop",
            Self::LoadError => "loadError",
            Self::NavigationStateChanged => "navigationStateChanged",
            Self::CanGoBackChanged => "canGoBackChanged",
            Self::CanGoForwardChanged => "canGoForwardChanged",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Channel scoped to one instance: `embeddedwebview.<id>.<eventName>`.
pub fn channel_name(id: &str, kind: EventKind) -> String {
    format!("{CHANNEL_PREFIX}.{id}.{}", kind.name())
}

/// Non-scoped channel: `embeddedwebview.<eventName>`.
pub fn global_channel_name(kind: EventKind) -> String {
    format!("{CHANNEL_PREFIX}.{}", kind.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Wire names ---

    #[test]
    fn event_wire_names() {
        assert_eq!(EventKind::LoadStart.name(), "loadStart");
        assert_eq!(EventKind::LoadStop.name(), "loadStop");
        assert_eq!(EventKind::LoadError.name(), "loadError");
        assert_eq!(
            EventKind::NavigationStateChanged.name(),
            "navigationStateChanged"
        );
        assert_eq!(EventKind::CanGoBackChanged.name(), "canGoBackChanged");
        assert_eq!(EventKind::CanGoForwardChanged.name(), "canGoForwardChanged");
    }

    #[test]
    fn serde_names_match_wire_names() {
        for kind in EventKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
    }

    #[test]
    fn all_covers_every_kind() {
        assert_eq!(EventKind::ALL.len(), 6);
    }

    // --- Channel names ---

    #[test]
    fn scoped_channel_name() {
        assert_eq!(
            channel_name("classroom", EventKind::LoadStart),
            "embeddedwebview.classroom.loadStart"
        );
        assert_eq!(
            channel_name("payment", EventKind::NavigationStateChanged),
            "embeddedwebview.payment.navigationStateChanged"
        );
    }

    #[test]
    fn global_channel_name_has_no_id_segment() {
        assert_eq!(
            global_channel_name(EventKind::LoadStop),
            "embeddedwebview.loadStop"
        );
    }

    #[test]
    fn distinct_instances_get_distinct_channels() {
        let a = channel_name("a", EventKind::LoadError);
        let b = channel_name("b", EventKind::LoadError);
        assert_ne!(a, b);
    }
}
