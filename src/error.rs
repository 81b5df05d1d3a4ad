use thiserror::Error;

/// Failures local to one request. Both variants are rendered to the
/// caller as a server error with an empty body; nothing here is fatal
/// to the process and nothing is retried at this layer.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("failed to decode request body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("engine returned no response")]
    EngineRefusal,
}

pub type Result<T> = std::result::Result<T, BridgeError>;
