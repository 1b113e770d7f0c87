//! Line-number to display-name remapping for timetable documents.

use serde_json::Value;

/// Field added to every line entry of a timetable document.
pub const FRIENDLY_NAME_FIELD: &str = "friendlyName";

/// Line code → display name, in authoring order.
///
/// Lookups resolve to the last entry for a code. Code 800 appears twice
/// ("Linea 2A", then "Linea 8"); see [`duplicate_line_codes`].
pub const LINE_NAMES: &[(i64, &str)] = &[
    (100, "Linea 1"),
    (1900, "Linea 1A"),
    (200, "Linea 2"),
    (800, "Linea 2A"),
    (300, "Linea 3"),
    (301, "Linea 3A"),
    (400, "Linea 4"),
    (500, "Linea 5"),
    (600, "Linea 6"),
    (601, "Linea 6A"),
    (700, "Linea 7"),
    (800, "Linea 8"),
    (1100, "Linea 11"),
    (1200, "Linea 12"),
    (1500, "Linea 12A"),
    (1400, "Linea 14"),
    (1700, "Linea 17"),
    (2000, "Linea 20"),
    (2100, "Linea 21"),
    (2200, "Linea 22"),
    (2300, "Linea 23"),
    (2301, "Linea 23A"),
    (2400, "Linea 24"),
    (1800, "Linea BUHO"),
    (1801, "Linea BUHO A"),
    (2450, "Linea Campus UDC"),
    (2451, "Linea Campus UDC"),
];

/// A line code that appears more than once in [`LINE_NAMES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateLineCode {
    pub code: i64,
    /// Every name bound to the code, in table order. The last one wins.
    pub names: Vec<&'static str>,
}

/// Look up a line code in the static table.
pub fn lookup(code: i64) -> Option<&'static str> {
    LINE_NAMES
        .iter()
        .rev()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Display name for a raw `linea` value, falling back to `"Line <code>"`.
pub fn friendly_name(code: &Value) -> String {
    if let Some(name) = code.as_i64().and_then(lookup) {
        return name.to_string();
    }
    match code {
        Value::String(s) => format!("Line {s}"),
        other => format!("Line {other}"),
    }
}

/// Report codes bound more than once in [`LINE_NAMES`], in first-seen order.
pub fn duplicate_line_codes() -> Vec<DuplicateLineCode> {
    let mut seen: Vec<DuplicateLineCode> = Vec::new();
    for (code, name) in LINE_NAMES {
        match seen.iter_mut().find(|d| d.code == *code) {
            Some(entry) => entry.names.push(*name),
            None => seen.push(DuplicateLineCode {
                code: *code,
                names: vec![*name],
            }),
        }
    }
    seen.retain(|d| d.names.len() > 1);
    seen
}

/// Return a copy of `doc` with a `friendlyName` on every `buses.lineas[]` entry.
///
/// The input is never modified. Documents without `buses.lineas`, and
/// entries that are not objects, pass through unchanged.
pub fn map_line_numbers_to_friendly_names(doc: &Value) -> Value {
    let mut copy = doc.clone();

    let lines = copy
        .get_mut("buses")
        .and_then(|buses| buses.get_mut("lineas"))
        .and_then(Value::as_array_mut);

    if let Some(lines) = lines {
        for line in lines.iter_mut() {
            let Some(entry) = line.as_object_mut() else {
                continue;
            };
            let name = friendly_name(entry.get("linea").unwrap_or(&Value::Null));
            entry.insert(FRIENDLY_NAME_FIELD.to_string(), Value::String(name));
        }
    }

    copy
}
