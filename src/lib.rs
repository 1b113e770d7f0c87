//! MCP server for A Coruña bus information.
//!
//! Exposes `get_bus_timetable` and `get_stop_code_by_location` tools over
//! JSON-RPC 2.0 stdio transport, compatible with any MCP-aware AI agent.

pub mod config;
pub mod context;
pub mod handlers;
pub mod lines;
pub mod protocol;
pub mod server;
pub mod stops;
pub mod timetable;

pub mod schema;
