//! Stop-name resolution against the static reference files.

pub mod corpus;
pub mod resolver;
pub mod similarity;

pub use corpus::{
    Direction, LoadedStopsFile, SkippedFile, StopCorpus, StopRecord, StopsError, StopsFile,
};
pub use resolver::{
    find_matches, get_stop_code_by_location, match_stop, MatchResult, MatchType, StopLookup,
    FUZZY_THRESHOLD,
};
