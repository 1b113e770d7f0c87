use std::path::Path;

use serde::Serialize;

use super::corpus::{StopCorpus, StopRecord, StopsError};
use super::similarity::ratio;

/// Minimum similarity for a fuzzy (non-substring) match.
pub const FUZZY_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Substring,
    Fuzzy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub code: i64,
    pub name: String,
    pub source_file: String,
    pub match_type: MatchType,
    pub similarity: f64,
}

/// Outcome of a location lookup, serialized as `{matches}` or `{error}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StopLookup {
    Matches { matches: Vec<MatchResult> },
    NotFound { error: String },
}

/// Compare an already-lowercased query against one stop.
///
/// Containment wins outright; otherwise the ratio must reach
/// [`FUZZY_THRESHOLD`].
pub fn match_stop(query_lower: &str, stop: &StopRecord) -> Option<(MatchType, f64)> {
    let name_lower = stop.name.to_lowercase();
    if name_lower.contains(query_lower) {
        return Some((MatchType::Substring, 1.0));
    }

    let similarity = ratio(query_lower, &name_lower);
    (similarity >= FUZZY_THRESHOLD).then_some((MatchType::Fuzzy, similarity))
}

/// All stops in `corpus` matching `query`, best first.
///
/// Equal similarities keep corpus order (file name, direction, stop).
pub fn find_matches(corpus: &StopCorpus, query: &str) -> Vec<MatchResult> {
    let query_lower = query.to_lowercase();

    let mut matches: Vec<MatchResult> = corpus
        .files
        .iter()
        .flat_map(|file| file.contents.stops().map(move |stop| (file, stop)))
        .filter_map(|(file, stop)| {
            let (match_type, similarity) = match_stop(&query_lower, stop)?;
            Some(MatchResult {
                code: stop.code,
                name: stop.name.clone(),
                source_file: file.file_name.clone(),
                match_type,
                similarity,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    matches
}

impl StopLookup {
    pub fn from_matches(query: &str, matches: Vec<MatchResult>) -> Self {
        if matches.is_empty() {
            Self::NotFound {
                error: format!("No stop found for location: {query}"),
            }
        } else {
            Self::Matches { matches }
        }
    }
}

/// Load the stops directory and resolve `query` against it.
pub fn get_stop_code_by_location(stops_dir: &Path, query: &str) -> Result<StopLookup, StopsError> {
    let corpus = StopCorpus::load(stops_dir)?;
    let matches = find_matches(&corpus, query);
    tracing::debug!(
        query,
        files = corpus.files.len(),
        skipped = corpus.skipped.len(),
        matches = matches.len(),
        "resolved stop location"
    );
    Ok(StopLookup::from_matches(query, matches))
}
