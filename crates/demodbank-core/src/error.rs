//! Error types for the demodbank snapshot layer.

use thiserror::Error;

/// Main error type for monitor operations.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// An index past the end of the bank. Unreachable while the channel
    /// count stays fixed for the process lifetime, but kept as an explicit
    /// condition rather than an out-of-bounds access.
    #[error("Channel not found: {index}")]
    ChannelNotFound { index: usize },

    /// A remote handle id that was released or never minted.
    #[error("Stale channel handle: {handle}")]
    StaleHandle { handle: u64 },

    #[error("Invalid params: {message}")]
    InvalidParams { message: String },

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for monitor operations.
pub type Result<T> = std::result::Result<T, MonitorError>;

impl From<serde_json::Error> for MonitorError {
    fn from(err: serde_json::Error) -> Self {
        MonitorError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl MonitorError {
    /// Convert to a JSON-RPC error code.
    ///
    /// Standard JSON-RPC error codes:
    /// - -32601: Method not found
    /// - -32602: Invalid params
    /// - -32603: Internal error
    ///
    /// Custom error codes (application-defined, -32000 to -32099):
    /// - -32001: Channel not found
    /// - -32002: Stale channel handle
    pub fn to_rpc_error_code(&self) -> i32 {
        match self {
            MonitorError::ChannelNotFound { .. } => -32001,
            MonitorError::StaleHandle { .. } => -32002,
            MonitorError::MethodNotFound(_) => -32601,
            MonitorError::InvalidParams { .. } => -32602,
            MonitorError::Json { .. } | MonitorError::Other(_) => -32603,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MonitorError::ChannelNotFound { index: 7 };
        assert_eq!(err.to_string(), "Channel not found: 7");

        let err = MonitorError::StaleHandle { handle: 42 };
        assert_eq!(err.to_string(), "Stale channel handle: 42");
    }

    #[test]
    fn test_rpc_error_codes() {
        assert_eq!(
            MonitorError::ChannelNotFound { index: 0 }.to_rpc_error_code(),
            -32001
        );
        assert_eq!(
            MonitorError::StaleHandle { handle: 1 }.to_rpc_error_code(),
            -32002
        );
        assert_eq!(
            MonitorError::MethodNotFound("bogus".into()).to_rpc_error_code(),
            -32601
        );
        assert_eq!(
            MonitorError::InvalidParams {
                message: "missing handle".into()
            }
            .to_rpc_error_code(),
            -32602
        );
        assert_eq!(
            MonitorError::Other("boom".into()).to_rpc_error_code(),
            -32603
        );
    }
}
