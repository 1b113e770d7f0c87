use mcp_bus_finder::lines::{
    duplicate_line_codes, friendly_name, lookup, map_line_numbers_to_friendly_names,
    DuplicateLineCode, LINE_NAMES,
};
use serde_json::json;

#[test]
fn known_codes_use_table_names() {
    assert_eq!(lookup(100), Some("Linea 1"));
    assert_eq!(lookup(1500), Some("Linea 12A"));
    assert_eq!(lookup(2451), Some("Linea Campus UDC"));
    assert_eq!(friendly_name(&json!(1800)), "Linea BUHO");
}

#[test]
fn every_table_code_resolves_to_its_last_entry() {
    for (code, _) in LINE_NAMES {
        let last = LINE_NAMES.iter().rev().find(|(c, _)| c == code).unwrap().1;
        assert_eq!(friendly_name(&json!(code)), last);
    }
}

#[test]
fn unknown_codes_fall_back() {
    assert_eq!(friendly_name(&json!(9999)), "Line 9999");
    assert_eq!(friendly_name(&json!("100")), "Line 100");
    assert_eq!(friendly_name(&json!(null)), "Line null");
}

#[test]
fn duplicate_code_800_is_reported() {
    assert_eq!(
        duplicate_line_codes(),
        vec![DuplicateLineCode {
            code: 800,
            names: vec!["Linea 2A", "Linea 8"],
        }]
    );
    // later entries overwrite earlier ones
    assert_eq!(lookup(800), Some("Linea 8"));
}

#[test]
fn remapper_adds_friendly_name() {
    let doc = json!({"buses": {"lineas": [{"linea": 100}]}});
    let out = map_line_numbers_to_friendly_names(&doc);
    assert_eq!(out, json!({"buses": {"lineas": [{"linea": 100, "friendlyName": "Linea 1"}]}}));
}

#[test]
fn remapper_does_not_mutate_input() {
    let doc = json!({
        "buses": {
            "parada": 42,
            "lineas": [
                {"linea": 100, "buses": [{"bus": 3456, "tiempo": 4}]},
                {"linea": 4242}
            ]
        }
    });
    let before = doc.clone();

    let out = map_line_numbers_to_friendly_names(&doc);

    assert_eq!(doc, before);
    assert_ne!(out, before);
    assert_eq!(out["buses"]["parada"], 42);
    assert_eq!(out["buses"]["lineas"][0]["buses"], before["buses"]["lineas"][0]["buses"]);
    assert_eq!(out["buses"]["lineas"][0]["friendlyName"], "Linea 1");
    assert_eq!(out["buses"]["lineas"][1]["friendlyName"], "Line 4242");
}

#[test]
fn remapper_keeps_order_and_odd_entries() {
    let doc = json!({"buses": {"lineas": [{"linea": 200}, "oops", {"other": true}, {"linea": 100}]}});
    let out = map_line_numbers_to_friendly_names(&doc);

    let lines = out["buses"]["lineas"].as_array().unwrap();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["friendlyName"], "Linea 2");
    assert_eq!(lines[1], "oops");
    assert_eq!(lines[2], json!({"other": true, "friendlyName": "Line null"}));
    assert_eq!(lines[3]["friendlyName"], "Linea 1");
}

#[test]
fn remapper_ignores_documents_without_lines() {
    for doc in [
        json!({}),
        json!({"buses": {}}),
        json!({"buses": "none"}),
        json!({"buses": {"lineas": {"linea": 100}}}),
        json!({"error": "Error during API analysis: timeout"}),
        json!([1, 2, 3]),
    ] {
        assert_eq!(map_line_numbers_to_friendly_names(&doc), doc);
    }
}
