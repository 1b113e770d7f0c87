use crate::context::ToolContext;
use crate::protocol::{BusTimetableParams, McpErrorCode, McpErrorResponse, ToolResult};

/// Handle a `get_bus_timetable` tool call.
///
/// Upstream failures come back as an ordinary result holding `{error}`;
/// only exceeding the tool timeout marks the result as an error.
pub async fn handle(params: BusTimetableParams, ctx: &ToolContext) -> ToolResult {
    let timeout = ctx.config.tool_timeout;

    match tokio::time::timeout(timeout, ctx.timetable.get_bus_timetable(params.stop)).await {
        Ok(timetable) => ToolResult::json(&timetable),
        Err(_) => {
            tracing::error!(stop = params.stop, "timetable call timed out after {}s", timeout.as_secs());
            McpErrorResponse::canonical(McpErrorCode::Timeout).into()
        }
    }
}
