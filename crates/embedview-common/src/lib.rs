pub mod errors;
pub mod id;
pub mod types;

pub use errors::{BridgeError, ValidationError};
pub use id::new_correlation_id;
pub use types::{HeaderMap, LoadErrorDetail, NavigationState};

pub type Result<T> = std::result::Result<T, BridgeError>;
