use super::TrackRecord;
use serde::Serialize;
use std::collections::HashSet;

/// The immutable analysis dataset.
///
/// Holds the expanded track records plus one file-level fact the popularity
/// resolver needs: whether the source table carried a `popularity` column at
/// all. A present column with blank cells is not the same thing as an absent
/// column.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    records: Vec<TrackRecord>,
    has_popularity_column: bool,
}

impl Dataset {
    pub fn new(records: Vec<TrackRecord>, has_popularity_column: bool) -> Self {
        Self {
            records,
            has_popularity_column,
        }
    }

    pub fn records(&self) -> &[TrackRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrackRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_popularity_column(&self) -> bool {
        self.has_popularity_column
    }

    /// All records credited to one artist, in dataset order.
    pub fn artist_records(&self, artist: &str) -> Vec<&TrackRecord> {
        self.records.iter().filter(|r| r.artist == artist).collect()
    }

    /// All records tagged with one genre token, in dataset order.
    pub fn genre_records(&self, genre: &str) -> Vec<&TrackRecord> {
        self.records.iter().filter(|r| r.genre == genre).collect()
    }

    pub fn distinct_artist_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.artist.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn distinct_genre_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.genre.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Unique (artist, song) pairs. Expansion duplicates rows, so this is
    /// the count of actual songs rather than table rows.
    pub fn unique_song_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| (r.artist.as_str(), r.song.as_str()))
            .collect::<HashSet<_>>()
            .len()
    }

    /// Earliest and latest release year present, if any rows exist.
    pub fn year_span(&self) -> Option<(u16, u16)> {
        let mut years = self.records.iter().map(|r| r.year);
        let first = years.next()?;
        let (min, max) = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
        Some((min, max))
    }
}
