//! Genre expansion.
//!
//! The source file tags many songs with multi-label genre strings such as
//! `"pop, Dance/Electronic"`. Expansion denormalizes those into one row per
//! genre token so that per-genre grouping works, keeping the unsplit label
//! on every row for reference.

use super::{SourceRecord, TrackRecord};

/// Genre value meaning "no genre data" in the source file.
pub const NO_GENRE_SENTINEL: &str = "set()";

/// Delimiter between labels in a multi-genre string.
const GENRE_DELIMITER: &str = ", ";

/// Splits a raw genre string into its valid tokens.
///
/// Tokens are trimmed; empty tokens and the no-data sentinel are dropped.
/// Malformed strings degrade to zero or one tokens, never an error.
pub fn genre_tokens(raw: &str) -> Vec<&str> {
    raw.split(GENRE_DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty() && *token != NO_GENRE_SENTINEL)
        .collect()
}

/// Expands one source row into one track record per valid genre token.
///
/// A row with k valid tokens yields k records; a row with none yields none.
pub fn expand_record(source: &SourceRecord) -> Vec<TrackRecord> {
    genre_tokens(&source.genre)
        .into_iter()
        .map(|token| TrackRecord::from_source(source, token))
        .collect()
}

/// Expands a whole table, preserving row order.
pub fn expand_genres(sources: &[SourceRecord]) -> Vec<TrackRecord> {
    sources.iter().flat_map(expand_record).collect()
}
