//! Shared glue between tool routes and the EIA client.
//!
//! Every tool handler funnels through [`run_query`], which keeps the
//! contract uniform: successes and failures are both rendered inline as
//! text content, and no fault ever crosses the MCP boundary.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::{info, warn};

use crate::domains::eia::{EiaClient, EiaError, ToolArguments, build_query};

/// Render the raw upstream payload for the result channel.
pub fn success_result(payload: &Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
    CallToolResult::success(vec![Content::text(text)])
}

/// Render an error payload inline; the transport never sees a fault.
pub fn error_result(error: &EiaError) -> CallToolResult {
    warn!("{error}");
    let payload = error.to_payload();
    let text = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string());
    CallToolResult::error(vec![Content::text(text)])
}

/// Build the query for `tool`, execute it, and fold the outcome into a
/// tool result.
pub async fn run_query(client: &EiaClient, tool: &str, args: ToolArguments) -> CallToolResult {
    info!(tool, "handling tool call");
    let query = match build_query(tool, &args) {
        Ok(query) => query,
        Err(e) => return error_result(&e),
    };
    match client.execute(&query).await {
        Ok(payload) => success_result(&payload),
        Err(e) => error_result(&e),
    }
}
