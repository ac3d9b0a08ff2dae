#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("id must be a non-empty string")]
    EmptyInstanceId,

    #[error("URL must be a non-empty string")]
    EmptyUrl,

    #[error("script must be a non-empty string")]
    EmptyScript,
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Opaque error string reported by the native collaborator.
    #[error("{0}")]
    Native(String),
}
