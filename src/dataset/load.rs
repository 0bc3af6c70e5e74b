//! Dataset loading.
//!
//! Reads the one input table, either the raw file (multi-label genre
//! strings, expanded here) or a pre-expanded file carrying an
//! `original_genre` column. Year handling mirrors the cleaning the analysis
//! expects: rows without an integer year or outside the configured window
//! are dropped. Numeric cells parse leniently, unparseable values become
//! missing rather than failing the row.

use super::{expand_genres, genre_tokens, Dataset, SourceRecord, TrackRecord};
use crate::error::{LoadError, LoadResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Inclusive release-year window the analysis is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearWindow {
    pub start: u16,
    pub end: u16,
}

impl YearWindow {
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, year: u16) -> bool {
        self.start <= year && year <= self.end
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self {
            start: 2000,
            end: 2019,
        }
    }
}

/// Loads the analysis dataset from a CSV file.
///
/// Required columns: `artist`, `song`, `year`, `genre`. When an
/// `original_genre` column is present the file is treated as already
/// expanded and rows are taken as-is; otherwise multi-label genre strings
/// are expanded into one row per token. The `popularity` column and all
/// feature columns are optional; absent columns yield missing values.
pub fn load_dataset<P: AsRef<Path>>(path: P, window: YearWindow) -> LoadResult<Dataset> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let headers = reader.headers()?.clone();
    let columns: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim().to_owned(), idx))
        .collect();

    let artist_col = required_column(&columns, "artist")?;
    let song_col = required_column(&columns, "song")?;
    let year_col = required_column(&columns, "year")?;
    let genre_col = required_column(&columns, "genre")?;

    let original_genre_col = columns.get("original_genre").copied();
    let popularity_col = columns.get("popularity").copied();
    let danceability_col = columns.get("danceability").copied();
    let energy_col = columns.get("energy").copied();
    let valence_col = columns.get("valence").copied();
    let acousticness_col = columns.get("acousticness").copied();
    let speechiness_col = columns.get("speechiness").copied();
    let liveness_col = columns.get("liveness").copied();
    let instrumentalness_col = columns.get("instrumentalness").copied();
    let tempo_col = columns.get("tempo").copied();
    let loudness_col = columns.get("loudness").copied();

    let pre_expanded = original_genre_col.is_some();
    let mut dropped_rows = 0usize;
    let mut sources: Vec<SourceRecord> = Vec::new();
    let mut records: Vec<TrackRecord> = Vec::new();

    for row in reader.records() {
        let row = row?;

        let year = match row.get(year_col).and_then(parse_year) {
            Some(year) if window.contains(year) => year,
            _ => {
                dropped_rows += 1;
                continue;
            }
        };

        let source = SourceRecord {
            artist: cell(&row, artist_col),
            song: cell(&row, song_col),
            year,
            genre: cell(&row, genre_col),
            danceability: numeric_cell(&row, danceability_col),
            energy: numeric_cell(&row, energy_col),
            valence: numeric_cell(&row, valence_col),
            acousticness: numeric_cell(&row, acousticness_col),
            speechiness: numeric_cell(&row, speechiness_col),
            liveness: numeric_cell(&row, liveness_col),
            instrumentalness: numeric_cell(&row, instrumentalness_col),
            tempo: numeric_cell(&row, tempo_col),
            loudness: numeric_cell(&row, loudness_col),
            popularity: numeric_cell(&row, popularity_col),
        };

        if pre_expanded {
            // Rows are already one-genre-per-row; keep only valid tokens.
            if genre_tokens(&source.genre).len() != 1 {
                dropped_rows += 1;
                continue;
            }
            let mut record = TrackRecord::from_source(&source, source.genre.trim());
            let original = original_genre_col
                .and_then(|idx| row.get(idx))
                .map(str::trim)
                .unwrap_or_default();
            if !original.is_empty() {
                record.original_genre = original.to_owned();
            }
            records.push(record);
        } else {
            sources.push(source);
        }
    }

    if !pre_expanded {
        records = expand_genres(&sources);
    }

    info!(
        "Loaded {} track records from {:?} ({} rows dropped by year or genre cleaning)",
        records.len(),
        path.as_ref(),
        dropped_rows
    );

    Ok(Dataset::new(records, popularity_col.is_some()))
}

fn required_column(
    columns: &HashMap<String, usize>,
    name: &'static str,
) -> LoadResult<usize> {
    columns
        .get(name)
        .copied()
        .ok_or(LoadError::MissingColumn(name))
}

fn cell(row: &csv::StringRecord, col: usize) -> String {
    row.get(col).unwrap_or_default().trim().to_owned()
}

fn numeric_cell(row: &csv::StringRecord, col: Option<usize>) -> Option<f64> {
    col.and_then(|idx| row.get(idx)).and_then(parse_lenient_f64)
}

/// Lenient numeric coercion: blank or unparseable cells become missing.
fn parse_lenient_f64(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Accepts integer-like year strings only. `"2001"` parses, `"2001.0"` and
/// `"unknown"` do not.
fn parse_year(cell: &str) -> Option<u16> {
    let trimmed = cell.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<u16>().ok()
}
