//! Audio feature enumeration.
//!
//! Every aggregation addresses columns through this enum rather than by
//! string name, so a schema mismatch is a compile error instead of a silent
//! empty aggregate.

use super::TrackRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A platform-computed numeric descriptor of a track's sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioFeature {
    Danceability,
    Energy,
    Valence,
    Acousticness,
    Speechiness,
    Liveness,
    Instrumentalness,
    Tempo,
    Loudness,
}

/// Scale class of a feature. Categorization thresholds depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureScale {
    /// Bounded to [0, 1] by the platform.
    UnitInterval,
    /// Beats per minute, positive.
    BeatsPerMinute,
    /// Decibels, typically negative.
    Decibels,
}

impl AudioFeature {
    /// The features whose within-genre variation is tracked over time.
    pub const CONVERGENCE_FEATURES: [AudioFeature; 4] = [
        AudioFeature::Energy,
        AudioFeature::Danceability,
        AudioFeature::Valence,
        AudioFeature::Acousticness,
    ];

    /// All features carried by a track record.
    pub const ALL: [AudioFeature; 9] = [
        AudioFeature::Danceability,
        AudioFeature::Energy,
        AudioFeature::Valence,
        AudioFeature::Acousticness,
        AudioFeature::Speechiness,
        AudioFeature::Liveness,
        AudioFeature::Instrumentalness,
        AudioFeature::Tempo,
        AudioFeature::Loudness,
    ];

    /// Column name as it appears in the source file.
    pub fn column_name(&self) -> &'static str {
        match self {
            AudioFeature::Danceability => "danceability",
            AudioFeature::Energy => "energy",
            AudioFeature::Valence => "valence",
            AudioFeature::Acousticness => "acousticness",
            AudioFeature::Speechiness => "speechiness",
            AudioFeature::Liveness => "liveness",
            AudioFeature::Instrumentalness => "instrumentalness",
            AudioFeature::Tempo => "tempo",
            AudioFeature::Loudness => "loudness",
        }
    }

    /// Capitalized name for presentation-facing tables.
    pub fn display_name(&self) -> &'static str {
        match self {
            AudioFeature::Danceability => "Danceability",
            AudioFeature::Energy => "Energy",
            AudioFeature::Valence => "Valence",
            AudioFeature::Acousticness => "Acousticness",
            AudioFeature::Speechiness => "Speechiness",
            AudioFeature::Liveness => "Liveness",
            AudioFeature::Instrumentalness => "Instrumentalness",
            AudioFeature::Tempo => "Tempo",
            AudioFeature::Loudness => "Loudness",
        }
    }

    pub fn scale(&self) -> FeatureScale {
        match self {
            AudioFeature::Tempo => FeatureScale::BeatsPerMinute,
            AudioFeature::Loudness => FeatureScale::Decibels,
            _ => FeatureScale::UnitInterval,
        }
    }

    /// Reads this feature's value from a record. Missing stays missing.
    pub fn value(&self, record: &TrackRecord) -> Option<f64> {
        match self {
            AudioFeature::Danceability => record.danceability,
            AudioFeature::Energy => record.energy,
            AudioFeature::Valence => record.valence,
            AudioFeature::Acousticness => record.acousticness,
            AudioFeature::Speechiness => record.speechiness,
            AudioFeature::Liveness => record.liveness,
            AudioFeature::Instrumentalness => record.instrumentalness,
            AudioFeature::Tempo => record.tempo,
            AudioFeature::Loudness => record.loudness,
        }
    }
}

impl fmt::Display for AudioFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}
