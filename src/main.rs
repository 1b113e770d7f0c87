use mcp_bus_finder::config::ServerConfig;
use mcp_bus_finder::context::ToolContext;
use mcp_bus_finder::lines::duplicate_line_codes;
use mcp_bus_finder::server::McpServer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mcp_bus_finder=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("mcp-bus-finder: configuration error: {e}");
            std::process::exit(1);
        }
    };

    for dup in duplicate_line_codes() {
        tracing::warn!(
            code = dup.code,
            names = ?dup.names,
            "line code defined more than once; the last name is used"
        );
    }

    let ctx = match ToolContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("mcp-bus-finder: cannot create HTTP client: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        stops_dir = %ctx.config.stops_dir.display(),
        timetable_url = %ctx.config.timetable_url,
        "starting MCP server"
    );

    let mut server = McpServer::new(ctx);
    if let Err(e) = server.run().await {
        eprintln!("mcp-bus-finder: fatal error: {e}");
        std::process::exit(1);
    }
}
