//! Error taxonomy for EIA API calls.
//!
//! Every failure mode of a tool invocation is one of these variants. They
//! are returned as values and serialized inline into the result channel;
//! nothing here is ever thrown past the tool boundary.

use thiserror::Error;

/// Errors produced while building or executing an EIA API request.
#[derive(Debug, Error)]
pub enum EiaError {
    /// No API key was configured; surfaced on the first tool call, before
    /// any network activity.
    #[error("EIA_API_KEY environment variable not set")]
    MissingCredential,

    /// The caller asked for a tool that is not in the catalog.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The upstream API answered with a non-2xx status. The raw body is
    /// kept for diagnostics.
    #[error("HTTP error: {status}")]
    UpstreamStatus { status: u16, body: String },

    /// The request never completed: DNS failure, connection refused,
    /// timeout, and the like.
    #[error("Request error: {0}")]
    Transport(String),

    /// A 2xx response whose body was not valid JSON.
    #[error("Failed to parse JSON response")]
    MalformedResponse,
}

impl EiaError {
    /// The inline payload handed back to the MCP caller.
    ///
    /// Only the upstream-status variant carries extra detail; the JSON
    /// decode path deliberately drops the body.
    pub fn to_payload(&self) -> serde_json::Value {
        match self {
            Self::UpstreamStatus { body, .. } => serde_json::json!({
                "error": self.to_string(),
                "details": body,
            }),
            _ => serde_json::json!({ "error": self.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_payload_keeps_body() {
        let err = EiaError::UpstreamStatus {
            status: 403,
            body: "invalid api key".to_string(),
        };
        let payload = err.to_payload();
        assert_eq!(payload["error"], "HTTP error: 403");
        assert_eq!(payload["details"], "invalid api key");
    }

    #[test]
    fn malformed_response_payload_has_no_details() {
        let payload = EiaError::MalformedResponse.to_payload();
        assert_eq!(payload["error"], "Failed to parse JSON response");
        assert!(payload.get("details").is_none());
    }

    #[test]
    fn unknown_tool_payload_names_the_tool() {
        let payload = EiaError::UnknownTool("eia_coal".to_string()).to_payload();
        assert_eq!(payload["error"], "Unknown tool: eia_coal");
    }
}
