use thiserror::Error;

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Errors that can occur while bridging a renderer to the stream host
#[derive(Error, Debug)]
pub enum BridgeError {
    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error on the line channel
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Renderer action or subscription failed
    #[error("Renderer error: {0}")]
    Renderer(String),

    /// Subscription setup did not complete within the allowed time
    #[error("Subscription setup timed out")]
    SetupTimeout,

    /// Outbound line channel was closed
    #[error("Output channel closed")]
    ChannelClosed,
}
