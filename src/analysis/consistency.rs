//! Artist sound consistency.
//!
//! Summarizes how consistent an artist's sound is across songs. Genre
//! expansion duplicates rows, so songs are deduplicated by title first and
//! every summary reflects songs, not table rows. Consistency inverts the
//! per-feature standard deviation and clamps it into [0, 1]; the clamp is
//! deliberate, so scores are only meaningful for unit-scaled features.

use super::stats;
use crate::dataset::{AudioFeature, Dataset, FeatureScale, TrackRecord};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::warn;

/// Unit-scale value at or above which a feature reads as "High".
pub const UNIT_HIGH_THRESHOLD: f64 = 0.66;
/// Unit-scale value at or above which a feature reads as "Medium".
pub const UNIT_MEDIUM_THRESHOLD: f64 = 0.33;
/// Tempo at or above which a track reads as "High", in BPM.
pub const TEMPO_HIGH_BPM: f64 = 130.0;
/// Tempo at or above which a track reads as "Medium", in BPM.
pub const TEMPO_MEDIUM_BPM: f64 = 90.0;
/// Standard deviations at or above this clamp floor the consistency score
/// at zero.
pub const CONSISTENCY_STD_CLAMP: f64 = 1.0;

/// Coarse category for a feature value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeatureLevel {
    High,
    Medium,
    Low,
}

impl FeatureLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureLevel::High => "High",
            FeatureLevel::Medium => "Medium",
            FeatureLevel::Low => "Low",
        }
    }
}

impl fmt::Display for FeatureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a continuous feature value into a coarse category.
///
/// Unit-scaled features and tempo have their own threshold schemes. Other
/// scales have no scheme and fall back to `Medium`; the fallback is logged
/// so it cannot be mistaken for a genuinely medium value.
pub fn categorize_value(value: f64, scale: FeatureScale) -> FeatureLevel {
    match scale {
        FeatureScale::UnitInterval => {
            if value >= UNIT_HIGH_THRESHOLD {
                FeatureLevel::High
            } else if value >= UNIT_MEDIUM_THRESHOLD {
                FeatureLevel::Medium
            } else {
                FeatureLevel::Low
            }
        }
        FeatureScale::BeatsPerMinute => {
            if value >= TEMPO_HIGH_BPM {
                FeatureLevel::High
            } else if value >= TEMPO_MEDIUM_BPM {
                FeatureLevel::Medium
            } else {
                FeatureLevel::Low
            }
        }
        FeatureScale::Decibels => {
            warn!("No categorization thresholds for decibel-scaled features; defaulting to Medium");
            FeatureLevel::Medium
        }
    }
}

/// Per-feature slice of an artist profile.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureConsistency {
    pub feature: AudioFeature,
    /// Mean over the artist's deduplicated songs.
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    /// `1 - min(std_dev, 1)`. Missing when the deviation is.
    pub consistency: Option<f64>,
    /// Category of the mean value.
    pub level: Option<FeatureLevel>,
}

/// Sound profile of one artist over their deduplicated songs.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistProfile {
    pub artist: String,
    /// Unique songs, counting each title once despite genre expansion.
    pub song_count: usize,
    /// Distinct genre tokens across all of the artist's rows.
    pub genre_count: usize,
    pub mean_popularity: Option<f64>,
    pub mean_tempo: Option<f64>,
    /// One entry per tracked feature, in tracked order.
    pub features: Vec<FeatureConsistency>,
}

impl ArtistProfile {
    /// Readable label summary, e.g. `"High Energy • Medium Valence"`.
    /// Features without a computed level are omitted.
    pub fn signature(&self) -> String {
        self.features
            .iter()
            .filter_map(|f| {
                f.level
                    .map(|level| format!("{} {}", level, f.feature.display_name()))
            })
            .collect::<Vec<_>>()
            .join(" \u{2022} ")
    }
}

/// Builds the consistency profile for one artist.
///
/// Returns `None` when the dataset has no rows for the artist.
pub fn artist_profile(dataset: &Dataset, artist: &str) -> Option<ArtistProfile> {
    let rows = dataset.artist_records(artist);
    if rows.is_empty() {
        return None;
    }

    let deduped = dedupe_by_song(&rows);
    let genre_count = rows
        .iter()
        .map(|r| r.genre.as_str())
        .collect::<HashSet<_>>()
        .len();

    let mean_popularity =
        stats::mean(&stats::present(deduped.iter().map(|r| r.popularity)));
    let mean_tempo = stats::mean(&stats::present(deduped.iter().map(|r| r.tempo)));

    let features = AudioFeature::CONVERGENCE_FEATURES
        .iter()
        .map(|&feature| feature_consistency(&deduped, feature))
        .collect();

    Some(ArtistProfile {
        artist: artist.to_owned(),
        song_count: deduped.len(),
        genre_count,
        mean_popularity,
        mean_tempo,
        features,
    })
}

/// Labels one record's tracked features, e.g. `"High Energy • Low Valence"`.
/// Missing features are omitted.
pub fn sonic_signature(record: &TrackRecord) -> String {
    AudioFeature::CONVERGENCE_FEATURES
        .iter()
        .filter_map(|&feature| {
            feature.value(record).map(|value| {
                let level = categorize_value(value, feature.scale());
                format!("{} {}", level, feature.display_name())
            })
        })
        .collect::<Vec<_>>()
        .join(" \u{2022} ")
}

fn feature_consistency(deduped: &[&TrackRecord], feature: AudioFeature) -> FeatureConsistency {
    let values = stats::present(deduped.iter().map(|r| feature.value(r)));
    let mean = stats::mean(&values);
    let std_dev = stats::sample_std_dev(&values);
    let consistency = std_dev.map(|std| 1.0 - std.min(CONSISTENCY_STD_CLAMP));
    let level = mean.map(|m| categorize_value(m, feature.scale()));

    FeatureConsistency {
        feature,
        mean,
        std_dev,
        consistency,
        level,
    }
}

/// First occurrence wins, matching how repeated rows from genre expansion
/// carry the same feature values.
fn dedupe_by_song<'a>(rows: &[&'a TrackRecord]) -> Vec<&'a TrackRecord> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter(|r| seen.insert(r.song.as_str()))
        .copied()
        .collect()
}
