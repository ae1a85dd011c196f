//! Error types and handling for the MCP server.
//!
//! The unified error type covers server setup and transport failures.
//! Per-call API failures never reach this level; they are [`EiaError`]
//! values serialized inline into the tool result channel.
//!
//! [`EiaError`]: crate::domains::eia::EiaError

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the EIA domain surfaced outside a tool call.
    #[error("EIA error: {0}")]
    Eia(#[from] crate::domains::eia::EiaError),

    /// Transport-layer error.
    #[error("Transport error: {0}")]
    Transport(#[from] crate::core::transport::TransportError),

    /// Configuration or startup-validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
