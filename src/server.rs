use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::context::ToolContext;
use crate::handlers;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};

/// Maximum bytes per JSON-RPC message (1 MiB).
const MAX_MESSAGE_BYTES: usize = 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("stdio error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

/// MCP server that communicates over stdio using newline-delimited JSON-RPC 2.0.
pub struct McpServer {
    ctx: ToolContext,
    initialized: bool,
}

impl McpServer {
    pub fn new(ctx: ToolContext) -> Self {
        Self {
            ctx,
            initialized: false,
        }
    }

    /// Serve on stdin/stdout until the host closes stdin or the process is interrupted.
    pub async fn run(&mut self) -> Result<(), ServerError> {
        let reader = BufReader::new(tokio::io::stdin());
        let writer = tokio::io::stdout();

        tokio::select! {
            result = self.serve(reader, writer) => result,
            signal = tokio::signal::ctrl_c() => {
                signal?;
                tracing::info!("interrupted, shutting down");
                Ok(())
            }
        }
    }

    /// Serve requests from `reader`, writing responses to `writer`, until EOF.
    pub async fn serve<R, W>(&mut self, mut reader: R, mut writer: W) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut raw = Vec::new();

        loop {
            raw.clear();
            let n = reader.read_until(b'\n', &mut raw).await?;
            if n == 0 {
                tracing::info!("stdin closed, shutting down");
                break;
            }

            if n > MAX_MESSAGE_BYTES {
                tracing::warn!("message too large: {n} bytes (limit {MAX_MESSAGE_BYTES})");
                write_response(
                    &mut writer,
                    &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                )
                .await?;
                continue;
            }

            let trimmed = match std::str::from_utf8(&raw) {
                Ok(s) => s.trim(),
                Err(_) => {
                    write_response(
                        &mut writer,
                        &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                    )
                    .await?;
                    continue;
                }
            };

            if trimmed.is_empty() {
                continue;
            }

            let req: JsonRpcRequest = match serde_json::from_str(trimmed) {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!(error = %e, "parse error");
                    write_response(
                        &mut writer,
                        &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                    )
                    .await?;
                    continue;
                }
            };

            if let Some(resp) = self.handle(&req).await {
                write_response(&mut writer, &resp).await?;
            }
        }

        Ok(())
    }

    /// Answer one request, applying the version check and initialization gate.
    pub async fn handle(&mut self, req: &JsonRpcRequest) -> Option<JsonRpcResponse> {
        if req.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                req.id.clone(),
                JsonRpcError::invalid_request(),
            ));
        }

        // Only `initialize` is allowed before the handshake completes
        if !self.initialized && req.method != "initialize" {
            req.id.as_ref()?;
            return Some(JsonRpcResponse::error(
                req.id.clone(),
                JsonRpcError::invalid_request_with("Server not initialized"),
            ));
        }

        let resp = handlers::dispatch(req, &self.ctx).await;

        if req.method == "initialize" {
            self.initialized = true;
        }

        resp
    }
}

async fn write_response<W>(writer: &mut W, resp: &JsonRpcResponse) -> Result<(), ServerError>
where
    W: AsyncWrite + Unpin,
{
    let out = serde_json::to_string(resp)?;
    writer.write_all(out.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
