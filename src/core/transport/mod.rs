//! Transport layer for the MCP server.
//!
//! Only STDIO is offered: tool-invocation envelopes arrive on stdin and
//! text-content responses leave on stdout.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
