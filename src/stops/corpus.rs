use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Extension of reference files picked up from the stops directory.
const STOPS_FILE_EXTENSION: &str = ".json";

#[derive(Debug, thiserror::Error)]
pub enum StopsError {
    #[error("cannot read stops directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A physical stop as listed in a reference file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StopRecord {
    pub code: i64,
    pub name: String,
}

/// One direction of travel on a route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Direction {
    #[serde(default)]
    pub stops: Vec<StopRecord>,
}

/// Contents of one reference file (one route).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopsFile {
    #[serde(default)]
    pub directions: Vec<Direction>,
}

impl StopsFile {
    /// Every stop in every direction, in file order.
    pub fn stops(&self) -> impl Iterator<Item = &StopRecord> {
        self.directions.iter().flat_map(|d| d.stops.iter())
    }
}

#[derive(Debug, Clone)]
pub struct LoadedStopsFile {
    pub file_name: String,
    pub contents: StopsFile,
}

/// A reference file left out of the corpus, with the reason.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: String,
}

/// All reference files readable from the stops directory.
///
/// Loading keeps every file that reads and parses, and discards the rest
/// whole: a broken file contributes no stops and is only recorded in
/// `skipped`, never reported to callers of the resolver.
#[derive(Debug, Clone, Default)]
pub struct StopCorpus {
    pub files: Vec<LoadedStopsFile>,
    pub skipped: Vec<SkippedFile>,
}

impl StopCorpus {
    /// Read every `*.json` entry of `dir` (non-recursive, sorted by name).
    ///
    /// Only enumerating the directory itself can fail.
    pub fn load(dir: &Path) -> Result<Self, StopsError> {
        let read_dir_err = |source: std::io::Error| StopsError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut candidates = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
            let entry = entry.map_err(read_dir_err)?;
            let file_name = entry.file_name().to_string_lossy().to_string();
            if file_name.ends_with(STOPS_FILE_EXTENSION) {
                candidates.push((file_name, entry.path()));
            }
        }
        candidates.sort_by(|a, b| a.0.cmp(&b.0));

        let mut corpus = StopCorpus::default();
        for (file_name, path) in candidates {
            match read_stops_file(&path) {
                Ok(contents) => corpus.files.push(LoadedStopsFile { file_name, contents }),
                Err(reason) => {
                    tracing::debug!(file = %file_name, %reason, "skipping stops file");
                    corpus.skipped.push(SkippedFile { file_name, reason });
                }
            }
        }

        Ok(corpus)
    }
}

fn read_stops_file(path: &Path) -> Result<StopsFile, String> {
    let text = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&text).map_err(|e| e.to_string())
}
