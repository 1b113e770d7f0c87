use crate::context::ToolContext;
use crate::protocol::{McpErrorCode, McpErrorResponse, StopLocationParams, ToolResult};
use crate::stops::{get_stop_code_by_location, StopLookup};

/// Handle a `get_stop_code_by_location` tool call.
///
/// The stops directory is re-read on every call. "No stop found" is a
/// regular result; an unreadable directory is a tool error.
pub async fn handle(params: StopLocationParams, ctx: &ToolContext) -> ToolResult {
    let stops_dir = ctx.config.stops_dir.clone();
    let timeout = ctx.config.tool_timeout;

    // Directory scan and parsing are blocking filesystem work
    let task = tokio::task::spawn_blocking(move || {
        get_stop_code_by_location(&stops_dir, &params.location)
    });

    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(Ok(lookup))) => lookup_result(&lookup),
        Ok(Ok(Err(stops_err))) => {
            tracing::error!(error = %stops_err, "stop lookup failed");
            McpErrorResponse::new(McpErrorCode::IoError, stops_err.to_string()).into()
        }
        Ok(Err(join_err)) => {
            tracing::error!(error = %join_err, "stop lookup task failed");
            McpErrorResponse::canonical(McpErrorCode::InternalError).into()
        }
        Err(_) => {
            tracing::error!("stop lookup timed out after {} seconds", timeout.as_secs());
            McpErrorResponse::canonical(McpErrorCode::Timeout).into()
        }
    }
}

fn lookup_result(lookup: &StopLookup) -> ToolResult {
    match serde_json::to_value(lookup) {
        Ok(value) => ToolResult::json(&value),
        Err(e) => {
            tracing::error!(error = %e, "serializing stop lookup failed");
            McpErrorResponse::canonical(McpErrorCode::InternalError).into()
        }
    }
}
