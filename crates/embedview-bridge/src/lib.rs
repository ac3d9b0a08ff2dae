//! Web-layer bridge for the native embedded WebView plugin.
//!
//! Everything heavy — rendering, navigation history, process boundaries —
//! lives on the native side of a generic call mechanism. This crate is the
//! thin surface in front of it:
//! - Call façade: validate inputs, shape options, forward under the
//!   `EmbeddedWebView` command namespace
//! - Storage helpers: safely parameterized `setItem`/`getItem` snippets
//! - Event router: per-instance status channels backed by an explicit
//!   observer registry

pub mod bridge;
pub mod events;
pub mod facade;
pub mod router;
pub mod storage;

pub use bridge::{Action, Callbacks, NativeBridge, SERVICE};
pub use events::{channel_name, global_channel_name, EventKind};
pub use facade::{CreateOptions, EmbeddedWebView, Viewport};
pub use router::{EventRouter, ListenerFn};
pub use storage::{get_item_script, set_item_script, StorageArea, DEFAULT_TOKEN_KEY};
