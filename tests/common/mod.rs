#![allow(dead_code)]

use std::fs;
use std::path::Path;

use mcp_bus_finder::config::ServerConfig;
use mcp_bus_finder::context::ToolContext;

pub const LINEA_1: &str = r#"{
  "directions": [
    { "stops": [
        { "code": 101, "name": "Plaza de Lugo" },
        { "code": 102, "name": "Avenida de Linares Rivas" }
    ] },
    { "stops": [
        { "code": 103, "name": "Praza de Lugo" }
    ] }
  ]
}"#;

pub const LINEA_2: &str = r#"{
  "directions": [
    { "stops": [ { "code": 201, "name": "Plaza de Lugo Norte" } ] }
  ]
}"#;

/// Write the two well-formed route files into `dir`.
pub fn write_stops(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("linea_1.json"), LINEA_1).unwrap();
    fs::write(dir.join("linea_2.json"), LINEA_2).unwrap();
}

/// Add files that must never contribute stops.
pub fn write_broken_stops(dir: &Path) {
    fs::write(dir.join("broken.json"), "{not json").unwrap();
    // second stop has no name, so the whole file is dropped
    fs::write(
        dir.join("partial.json"),
        r#"{"directions":[{"stops":[{"code":301,"name":"Plaza de Lugo Sur"},{"code":302}]}]}"#,
    )
    .unwrap();
    fs::write(dir.join("notes.txt"), "Plaza de Lugo").unwrap();
}

pub fn test_config(stops_dir: &Path) -> ServerConfig {
    ServerConfig::with_stops_dir(stops_dir)
}

pub fn test_context(stops_dir: &Path, timetable_url: &str) -> ToolContext {
    let mut config = test_config(stops_dir);
    config.timetable_url = timetable_url.to_string();
    ToolContext::new(config).unwrap()
}
