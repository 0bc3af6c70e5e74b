//! Within-genre sonic variation over time.
//!
//! For each (genre, year) group the sample standard deviation of the
//! tracked features measures how tightly clustered the genre's songs are
//! along that dimension. Decreasing deviation across years reads as
//! convergence, increasing deviation as diversification. Sparse groups are
//! excluded so the variation estimate is not noisy.

use super::stats;
use crate::dataset::{AudioFeature, Dataset};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Minimum rows a (genre, year) group needs to be included.
pub const DEFAULT_MIN_GROUP_SIZE: usize = 10;

/// Per-(genre, year) variation summary.
///
/// A `None` deviation means the group had fewer than 2 non-missing values
/// for that feature, which is not the same as zero variation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreYearVariation {
    pub genre: String,
    pub year: u16,
    pub sample_size: usize,
    pub energy_std: Option<f64>,
    pub danceability_std: Option<f64>,
    pub valence_std: Option<f64>,
    pub acousticness_std: Option<f64>,
}

impl GenreYearVariation {
    /// Deviation for one of the tracked features. Untracked features have
    /// no deviation here.
    pub fn std_for(&self, feature: AudioFeature) -> Option<f64> {
        match feature {
            AudioFeature::Energy => self.energy_std,
            AudioFeature::Danceability => self.danceability_std,
            AudioFeature::Valence => self.valence_std,
            AudioFeature::Acousticness => self.acousticness_std,
            _ => None,
        }
    }
}

/// First-versus-last-year change of one genre's deviation in one feature.
///
/// `None` change fields mean "not applicable": fewer than two year points,
/// a missing deviation at either end, or a zero start for the percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeSummary {
    pub genre: String,
    pub feature: AudioFeature,
    pub start_std: Option<f64>,
    pub end_std: Option<f64>,
    pub absolute_change: Option<f64>,
    pub percent_change: Option<f64>,
}

/// Computes per-(genre, year) feature deviations over the whole dataset.
///
/// Groups with fewer than `min_group_size` rows are absent from the output.
/// Rows come back ordered by (genre, year).
pub fn genre_year_variation(dataset: &Dataset, min_group_size: usize) -> Vec<GenreYearVariation> {
    let mut groups: BTreeMap<(&str, u16), Vec<usize>> = BTreeMap::new();
    for (row, record) in dataset.iter().enumerate() {
        groups
            .entry((record.genre.as_str(), record.year))
            .or_default()
            .push(row);
    }

    let records = dataset.records();
    let mut rows = Vec::new();
    for ((genre, year), members) in groups {
        if members.len() < min_group_size {
            continue;
        }

        let std_of = |feature: AudioFeature| {
            let values =
                stats::present(members.iter().map(|&row| feature.value(&records[row])));
            stats::sample_std_dev(&values)
        };

        rows.push(GenreYearVariation {
            genre: genre.to_owned(),
            year,
            sample_size: members.len(),
            energy_std: std_of(AudioFeature::Energy),
            danceability_std: std_of(AudioFeature::Danceability),
            valence_std: std_of(AudioFeature::Valence),
            acousticness_std: std_of(AudioFeature::Acousticness),
        });
    }

    debug!(
        "Variation aggregate kept {} (genre, year) groups at min size {}",
        rows.len(),
        min_group_size
    );
    rows
}

/// Summarizes the deviation change of one genre over the aggregated years.
///
/// Expects rows from [`genre_year_variation`]. Returns `None` when the
/// genre has no aggregate rows at all.
pub fn change_summary(
    rows: &[GenreYearVariation],
    genre: &str,
    feature: AudioFeature,
) -> Option<ChangeSummary> {
    let mut genre_rows: Vec<&GenreYearVariation> =
        rows.iter().filter(|r| r.genre == genre).collect();
    if genre_rows.is_empty() {
        return None;
    }
    genre_rows.sort_by_key(|r| r.year);

    let start_std = genre_rows.first().and_then(|r| r.std_for(feature));
    let end_std = genre_rows.last().and_then(|r| r.std_for(feature));

    let (absolute_change, percent_change) = if genre_rows.len() < 2 {
        (None, None)
    } else {
        match (start_std, end_std) {
            (Some(start), Some(end)) => {
                let absolute = end - start;
                // A zero start makes the percentage undefined, not infinite.
                let percent = (start != 0.0).then(|| absolute / start * 100.0);
                (Some(absolute), percent)
            }
            _ => (None, None),
        }
    };

    Some(ChangeSummary {
        genre: genre.to_owned(),
        feature,
        start_std,
        end_std,
        absolute_change,
        percent_change,
    })
}

/// Change summaries for every genre present in the aggregate rows, in row
/// order.
pub fn change_summaries(rows: &[GenreYearVariation], feature: AudioFeature) -> Vec<ChangeSummary> {
    let mut seen = Vec::new();
    for row in rows {
        if !seen.contains(&row.genre.as_str()) {
            seen.push(row.genre.as_str());
        }
    }
    seen.iter()
        .filter_map(|genre| change_summary(rows, genre, feature))
        .collect()
}
