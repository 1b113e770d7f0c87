//! Stop resolver tests: corpus loading, matching, and ranking.

mod common;

use mcp_bus_finder::stops::similarity::ratio;
use mcp_bus_finder::stops::{
    find_matches, get_stop_code_by_location, match_stop, MatchType, StopCorpus, StopLookup,
    StopRecord, StopsError,
};

fn stop(code: i64, name: &str) -> StopRecord {
    StopRecord {
        code,
        name: name.to_string(),
    }
}

fn expect_matches(lookup: StopLookup) -> Vec<mcp_bus_finder::stops::MatchResult> {
    match lookup {
        StopLookup::Matches { matches } => matches,
        StopLookup::NotFound { error } => panic!("expected matches, got error: {error}"),
    }
}

// ---------------------------------------------------------------------------
// similarity
// ---------------------------------------------------------------------------

#[test]
fn ratio_known_values() {
    assert_eq!(ratio("abcd", "bcde"), 0.75);
    assert_eq!(ratio("lugo", "lugo"), 1.0);
    assert_eq!(ratio("abc", "xyz"), 0.0);
    assert_eq!(ratio("abc", ""), 0.0);
    assert_eq!(ratio("", ""), 1.0);
}

#[test]
fn ratio_depends_on_argument_order() {
    // only the longest block and what lies beside it count
    assert_eq!(ratio("tide", "diet"), 0.25);
    assert_eq!(ratio("diet", "tide"), 0.5);
}

#[test]
fn ratio_counts_blocks_on_both_sides() {
    // "aza de lugo" plus the leading "p"
    let r = ratio("praza de lugo", "plaza de lugo");
    assert!((r - 24.0 / 26.0).abs() < 1e-12, "got {r}");
}

#[test]
fn ratio_handles_multibyte_characters() {
    let r = ratio("rúa real", "rua real");
    assert!((r - 14.0 / 16.0).abs() < 1e-12, "got {r}");
}

#[test]
fn ratio_long_inputs_stay_in_range() {
    let a = "a".repeat(300);
    let b = format!("{}b", "a".repeat(299));
    let r = ratio(&a, &b);
    assert!((0.0..=1.0).contains(&r));
    assert!(r > 0.9, "extension must still join the common run, got {r}");
}

// ---------------------------------------------------------------------------
// single-stop matching
// ---------------------------------------------------------------------------

#[test]
fn substring_match_is_case_insensitive() {
    let m = match_stop("lugo", &stop(101, "Plaza de LUGO"));
    assert_eq!(m, Some((MatchType::Substring, 1.0)));
}

#[test]
fn fuzzy_match_above_threshold() {
    let (kind, similarity) = match_stop("praza de lugo", &stop(101, "Plaza de Lugo")).unwrap();
    assert_eq!(kind, MatchType::Fuzzy);
    assert!((similarity - 24.0 / 26.0).abs() < 1e-12);
}

#[test]
fn below_threshold_is_no_match() {
    assert_eq!(match_stop("zzzz", &stop(101, "Plaza de Lugo")), None);
    assert_eq!(match_stop("plaza de lugo", &stop(102, "Avenida de Linares Rivas")), None);
}

#[test]
fn empty_query_is_a_substring_of_everything() {
    assert_eq!(
        match_stop("", &stop(101, "Plaza de Lugo")),
        Some((MatchType::Substring, 1.0))
    );
}

// ---------------------------------------------------------------------------
// corpus loading
// ---------------------------------------------------------------------------

#[test]
fn load_discards_unparseable_files_whole() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_stops(tmp.path());
    common::write_broken_stops(tmp.path());

    let corpus = StopCorpus::load(tmp.path()).unwrap();

    let loaded: Vec<&str> = corpus.files.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(loaded, vec!["linea_1.json", "linea_2.json"]);

    let skipped: Vec<&str> = corpus.skipped.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(skipped, vec!["broken.json", "partial.json"]);
    assert!(corpus.skipped.iter().all(|s| !s.reason.is_empty()));
}

#[test]
fn load_tolerates_missing_keys() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("empty.json"), "{}").unwrap();
    std::fs::write(tmp.path().join("nostops.json"), r#"{"directions":[{}]}"#).unwrap();

    let corpus = StopCorpus::load(tmp.path()).unwrap();
    assert_eq!(corpus.files.len(), 2);
    assert!(corpus.skipped.is_empty());
    assert_eq!(corpus.files.iter().map(|f| f.contents.stops().count()).sum::<usize>(), 0);
}

#[test]
fn load_does_not_recurse() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_stops(&tmp.path().join("nested"));

    let corpus = StopCorpus::load(tmp.path()).unwrap();
    assert!(corpus.files.is_empty());
}

#[test]
fn load_missing_directory_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let err = StopCorpus::load(&tmp.path().join("nope")).unwrap_err();
    assert!(matches!(err, StopsError::ReadDir { .. }));
}

// ---------------------------------------------------------------------------
// resolution
// ---------------------------------------------------------------------------

#[test]
fn lugo_resolves_to_plaza_de_lugo() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_stops(tmp.path());

    let matches = expect_matches(get_stop_code_by_location(tmp.path(), "lugo").unwrap());
    let first = &matches[0];
    assert_eq!(first.code, 101);
    assert_eq!(first.name, "Plaza de Lugo");
    assert_eq!(first.source_file, "linea_1.json");
    assert_eq!(first.match_type, MatchType::Substring);
    assert_eq!(first.similarity, 1.0);
}

#[test]
fn results_sorted_by_similarity_with_stable_ties() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_stops(tmp.path());

    let corpus = StopCorpus::load(tmp.path()).unwrap();
    let matches = find_matches(&corpus, "Plaza de Lugo");

    let codes: Vec<i64> = matches.iter().map(|m| m.code).collect();
    // 101 and 201 tie at 1.0 and keep corpus order; 103 is the fuzzy hit
    assert_eq!(codes, vec![101, 201, 103]);
    assert_eq!(matches[2].match_type, MatchType::Fuzzy);
    assert!(matches
        .windows(2)
        .all(|pair| pair[0].similarity >= pair[1].similarity));
}

#[test]
fn broken_files_never_contribute_matches() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_stops(tmp.path());
    common::write_broken_stops(tmp.path());

    let matches = expect_matches(get_stop_code_by_location(tmp.path(), "lugo").unwrap());
    assert!(matches.iter().all(|m| m.code != 301));
    assert!(matches
        .iter()
        .all(|m| m.source_file == "linea_1.json" || m.source_file == "linea_2.json"));
}

#[test]
fn no_match_reports_error() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_stops(tmp.path());

    let lookup = get_stop_code_by_location(tmp.path(), "zzzz").unwrap();
    assert_eq!(
        lookup,
        StopLookup::NotFound {
            error: "No stop found for location: zzzz".to_string()
        }
    );
}

#[test]
fn empty_directory_reports_error() {
    let tmp = tempfile::tempdir().unwrap();
    let lookup = get_stop_code_by_location(tmp.path(), "lugo").unwrap();
    assert!(matches!(lookup, StopLookup::NotFound { .. }));
}

#[test]
fn lookup_serializes_to_wire_shape() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_stops(tmp.path());

    let lookup = get_stop_code_by_location(tmp.path(), "lugo norte").unwrap();
    let value = serde_json::to_value(&lookup).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "matches": [{
                "code": 201,
                "name": "Plaza de Lugo Norte",
                "sourceFile": "linea_2.json",
                "matchType": "substring",
                "similarity": 1.0
            }]
        })
    );

    let missing = serde_json::to_value(StopLookup::from_matches("x", Vec::new())).unwrap();
    assert_eq!(missing, serde_json::json!({ "error": "No stop found for location: x" }));
}
