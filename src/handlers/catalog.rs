use serde_json::{json, Value};

pub const GET_BUS_TIMETABLE: &str = "get_bus_timetable";
pub const GET_STOP_CODE_BY_LOCATION: &str = "get_stop_code_by_location";

/// Input schema for a tool, or `None` if no such tool exists.
pub fn input_schema(tool: &str) -> Option<Value> {
    match tool {
        GET_BUS_TIMETABLE => Some(json!({
            "type": "object",
            "required": ["stop"],
            "properties": {
                "stop": {
                    "type": "integer",
                    "description": "Numeric stop code, as returned by get_stop_code_by_location"
                }
            }
        })),
        GET_STOP_CODE_BY_LOCATION => Some(json!({
            "type": "object",
            "required": ["location"],
            "properties": {
                "location": {
                    "type": "string",
                    "description": "Free-text stop or street name"
                }
            }
        })),
        _ => None,
    }
}

/// Body of the `tools/list` response.
pub fn tool_list() -> Value {
    json!({
        "tools": [
            {
                "name": GET_BUS_TIMETABLE,
                "description": "Get a bus timetable for a given stop number",
                "inputSchema": input_schema(GET_BUS_TIMETABLE),
            },
            {
                "name": GET_STOP_CODE_BY_LOCATION,
                "description": "Return stop code(s) given a location by searching all JSON files in the stops directory. Uses fuzzy matching for similar names.",
                "inputSchema": input_schema(GET_STOP_CODE_BY_LOCATION),
            }
        ]
    })
}
