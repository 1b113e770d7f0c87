pub mod request;
pub mod response;

pub use request::{
    BusTimetableParams, ClientInfo, InitializeParams, JsonRpcRequest, RpcId, StopLocationParams,
    ToolCallParams,
};
pub use response::{
    JsonRpcError, JsonRpcResponse, McpError, McpErrorCode, McpErrorResponse, ToolResult,
    ToolResultContent,
};
