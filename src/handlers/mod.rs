pub mod bus_timetable;
pub mod catalog;
pub mod stop_code;

use std::time::Instant;

use serde::de::DeserializeOwned;

use crate::context::ToolContext;
use crate::protocol::{
    BusTimetableParams, InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    McpErrorCode, McpErrorResponse, StopLocationParams, ToolCallParams, ToolResult,
};
use crate::schema::validate_json;

/// MCP protocol revision implemented by this server.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Name reported in `serverInfo`.
pub const SERVER_NAME: &str = "bus-finder";

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub async fn dispatch(req: &JsonRpcRequest, ctx: &ToolContext) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => {
            let params: InitializeParams = req
                .params
                .clone()
                .and_then(|v| serde_json::from_value(v).ok())
                .unwrap_or_default();
            let client = params.client_info.as_ref();
            tracing::info!(
                client = client.and_then(|c| c.name.as_deref()).unwrap_or("unknown"),
                client_version = client.and_then(|c| c.version.as_deref()).unwrap_or("unknown"),
                requested_protocol = params.protocol_version.as_deref().unwrap_or("unspecified"),
                "initialize"
            );

            let result = serde_json::json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "notifications/initialized" => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        "tools/list" => Some(JsonRpcResponse::success(req.id.clone(), catalog::tool_list())),

        "tools/call" => {
            let params: ToolCallParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!("Invalid tools/call params: {e}")),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for tools/call"),
                    ));
                }
            };

            let started = Instant::now();
            let tool_result = dispatch_tool_call(&params, ctx).await;
            tracing::info!(
                tool = %params.name,
                is_error = tool_result.is_error,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "tool call"
            );

            match serde_json::to_value(&tool_result) {
                Ok(result_json) => Some(JsonRpcResponse::success(req.id.clone(), result_json)),
                Err(e) => Some(JsonRpcResponse::error(
                    req.id.clone(),
                    JsonRpcError::internal_error(format!("Cannot serialize tool result: {e}")),
                )),
            }
        }

        _ => {
            // Unknown notifications are ignored
            req.id.as_ref()?;
            Some(JsonRpcResponse::error(
                req.id.clone(),
                JsonRpcError::method_not_found(&req.method),
            ))
        }
    }
}

async fn dispatch_tool_call(params: &ToolCallParams, ctx: &ToolContext) -> ToolResult {
    match params.name.as_str() {
        catalog::GET_BUS_TIMETABLE => match parse_arguments::<BusTimetableParams>(params) {
            Ok(args) => bus_timetable::handle(args, ctx).await,
            Err(err) => err,
        },

        catalog::GET_STOP_CODE_BY_LOCATION => match parse_arguments::<StopLocationParams>(params) {
            Ok(args) => stop_code::handle(args, ctx).await,
            Err(err) => err,
        },

        _ => McpErrorResponse::new(
            McpErrorCode::UnknownTool,
            format!("Unknown tool: {}", params.name),
        )
        .into(),
    }
}

/// Validate tool arguments against the advertised input schema, then decode them.
fn parse_arguments<T: DeserializeOwned>(params: &ToolCallParams) -> Result<T, ToolResult> {
    let invalid = |detail: String| -> ToolResult {
        McpErrorResponse::new(
            McpErrorCode::InvalidArguments,
            format!("Invalid arguments for {}: {detail}", params.name),
        )
        .into()
    };

    let arguments = params
        .arguments
        .clone()
        .ok_or_else(|| invalid("missing arguments".to_string()))?;

    if let Some(schema) = catalog::input_schema(&params.name) {
        validate_json(&schema, &arguments).map_err(|e| invalid(e.to_string()))?;
    }

    serde_json::from_value(arguments).map_err(|e| invalid(e.to_string()))
}
