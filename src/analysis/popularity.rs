//! Popularity measure resolution.
//!
//! The native platform score and the appearances proxy have different
//! scales and different meanings. They stay distinguishable as a typed
//! source carrying its own label, never merged into one untyped column.

use crate::dataset::Dataset;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Where a resolved popularity measure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PopularitySource {
    /// The dataset's own `popularity` column. Bounded platform score.
    NativeScore,
    /// Occurrence count of the (artist, song) key across the expanded
    /// dataset. Unbounded, only meaningful within this dataset.
    AppearanceProxy,
}

impl PopularitySource {
    /// Human-readable measure label for presentation-facing tables.
    pub fn label(&self) -> &'static str {
        match self {
            PopularitySource::NativeScore => "Spotify Popularity (Dataset Field)",
            PopularitySource::AppearanceProxy => "Popularity Proxy (Appearances in Dataset)",
        }
    }
}

/// Per-row popularity measure, aligned index-for-index with the dataset it
/// was resolved from.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPopularity {
    pub source: PopularitySource,
    pub values: Vec<Option<f64>>,
}

impl ResolvedPopularity {
    pub fn label(&self) -> &'static str {
        self.source.label()
    }

    pub fn get(&self, row: usize) -> Option<f64> {
        self.values.get(row).copied().flatten()
    }
}

/// Resolves the popularity measure for a dataset.
///
/// When the source file carried a popularity column the per-row values are
/// used directly; a value is missing only where the cell did not parse.
/// Otherwise every row gets the appearance count of its (artist, song) key,
/// which is always present.
pub fn resolve_popularity(dataset: &Dataset) -> ResolvedPopularity {
    if dataset.has_popularity_column() {
        let values = dataset.iter().map(|r| r.popularity).collect();
        return ResolvedPopularity {
            source: PopularitySource::NativeScore,
            values,
        };
    }

    let mut appearances: HashMap<(&str, &str), usize> = HashMap::new();
    for record in dataset.iter() {
        *appearances
            .entry((record.artist.as_str(), record.song.as_str()))
            .or_insert(0) += 1;
    }
    debug!(
        "No popularity column; derived appearance proxy over {} songs",
        appearances.len()
    );

    let values = dataset
        .iter()
        .map(|r| {
            let count = appearances[&(r.artist.as_str(), r.song.as_str())];
            Some(count as f64)
        })
        .collect();

    ResolvedPopularity {
        source: PopularitySource::AppearanceProxy,
        values,
    }
}
