//! Descriptive catalog summaries.
//!
//! The small tables the presentation layer shows around the main
//! aggregates: dataset overview metrics, per-genre sonic profiles against
//! the catalog average, top-genre and top-artist rankings, genre/year mean
//! trajectories, and feature histograms.

use super::stats;
use crate::dataset::{display_genre_name, AudioFeature, Dataset};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Default bin count for feature distribution histograms.
pub const DEFAULT_HISTOGRAM_BINS: usize = 40;

/// Headline counts for the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetOverview {
    pub unique_songs: usize,
    pub first_year: Option<u16>,
    pub last_year: Option<u16>,
    pub genre_count: usize,
    pub artist_count: usize,
}

pub fn dataset_overview(dataset: &Dataset) -> DatasetOverview {
    let span = dataset.year_span();
    DatasetOverview {
        unique_songs: dataset.unique_song_count(),
        first_year: span.map(|(first, _)| first),
        last_year: span.map(|(_, last)| last),
        genre_count: dataset.distinct_genre_count(),
        artist_count: dataset.distinct_artist_count(),
    }
}

/// Genre mean next to the overall catalog mean for one feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureComparison {
    pub feature: AudioFeature,
    pub genre_mean: Option<f64>,
    pub overall_mean: Option<f64>,
}

/// Sonic profile of one genre against the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct GenreProfile {
    pub genre: String,
    pub display_name: String,
    pub song_rows: usize,
    pub artist_count: usize,
    pub mean_energy: Option<f64>,
    pub mean_tempo: Option<f64>,
    /// Tracked features, genre mean vs. overall mean.
    pub features: Vec<FeatureComparison>,
}

/// Profiles one genre. `None` when the genre has no rows.
pub fn genre_profile(dataset: &Dataset, genre: &str) -> Option<GenreProfile> {
    let rows = dataset.genre_records(genre);
    if rows.is_empty() {
        return None;
    }

    let artist_count = rows
        .iter()
        .map(|r| r.artist.as_str())
        .collect::<HashSet<_>>()
        .len();

    let features = AudioFeature::CONVERGENCE_FEATURES
        .iter()
        .map(|&feature| FeatureComparison {
            feature,
            genre_mean: stats::mean(&stats::present(
                rows.iter().map(|r| feature.value(r)),
            )),
            overall_mean: stats::mean(&stats::present(
                dataset.iter().map(|r| feature.value(r)),
            )),
        })
        .collect();

    Some(GenreProfile {
        genre: genre.to_owned(),
        display_name: display_genre_name(genre),
        song_rows: rows.len(),
        artist_count,
        mean_energy: stats::mean(&stats::present(rows.iter().map(|r| r.energy))),
        mean_tempo: stats::mean(&stats::present(rows.iter().map(|r| r.tempo))),
        features,
    })
}

/// One entry of the top-genres ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreRank {
    pub genre: String,
    pub display_name: String,
    pub row_count: usize,
    pub artist_count: usize,
}

/// Genres ordered by row count descending, ties broken by name.
pub fn top_genres(dataset: &Dataset, limit: usize) -> Vec<GenreRank> {
    let mut counts: HashMap<&str, (usize, HashSet<&str>)> = HashMap::new();
    for record in dataset.iter() {
        let entry = counts.entry(record.genre.as_str()).or_default();
        entry.0 += 1;
        entry.1.insert(record.artist.as_str());
    }

    let mut ranks: Vec<GenreRank> = counts
        .into_iter()
        .map(|(genre, (row_count, artists))| GenreRank {
            genre: genre.to_owned(),
            display_name: display_genre_name(genre),
            row_count,
            artist_count: artists.len(),
        })
        .collect();
    ranks.sort_by(|a, b| b.row_count.cmp(&a.row_count).then(a.genre.cmp(&b.genre)));
    ranks.truncate(limit);
    ranks
}

/// One entry of the top-artists ranking.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistRank {
    pub artist: String,
    /// Unique song titles, not expanded rows.
    pub unique_songs: usize,
    /// Mean popularity over the deduplicated songs.
    pub mean_popularity: Option<f64>,
}

/// Artists ordered by unique-song count descending, ties broken by name.
pub fn top_artists(dataset: &Dataset, limit: usize) -> Vec<ArtistRank> {
    let mut by_artist: HashMap<&str, HashMap<&str, Option<f64>>> = HashMap::new();
    for record in dataset.iter() {
        by_artist
            .entry(record.artist.as_str())
            .or_default()
            .entry(record.song.as_str())
            .or_insert(record.popularity);
    }

    let mut ranks: Vec<ArtistRank> = by_artist
        .into_iter()
        .map(|(artist, songs)| {
            let popularity = stats::mean(&stats::present(songs.values().copied()));
            ArtistRank {
                artist: artist.to_owned(),
                unique_songs: songs.len(),
                mean_popularity: popularity,
            }
        })
        .collect();
    ranks.sort_by(|a, b| {
        b.unique_songs
            .cmp(&a.unique_songs)
            .then(a.artist.cmp(&b.artist))
    });
    ranks.truncate(limit);
    ranks
}

/// Per-genre slice of one artist's catalog presence.
#[derive(Debug, Clone, Serialize)]
pub struct GenreRepresentation {
    pub genre: String,
    pub unique_songs: usize,
    /// Mean popularity over the artist's rows in this genre.
    pub mean_popularity: Option<f64>,
}

/// How one artist's songs distribute over genres, ordered by unique-song
/// count descending.
pub fn artist_genre_representation(dataset: &Dataset, artist: &str) -> Vec<GenreRepresentation> {
    let mut by_genre: HashMap<&str, (HashSet<&str>, Vec<Option<f64>>)> = HashMap::new();
    for record in dataset.iter().filter(|r| r.artist == artist) {
        let entry = by_genre.entry(record.genre.as_str()).or_default();
        entry.0.insert(record.song.as_str());
        entry.1.push(record.popularity);
    }

    let mut rows: Vec<GenreRepresentation> = by_genre
        .into_iter()
        .map(|(genre, (songs, popularity))| GenreRepresentation {
            genre: genre.to_owned(),
            unique_songs: songs.len(),
            mean_popularity: stats::mean(&stats::present(popularity)),
        })
        .collect();
    rows.sort_by(|a, b| {
        b.unique_songs
            .cmp(&a.unique_songs)
            .then(a.genre.cmp(&b.genre))
    });
    rows
}

/// Mean position of a genre in feature space for one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreYearMeans {
    pub genre: String,
    pub year: u16,
    pub mean_danceability: Option<f64>,
    pub mean_energy: Option<f64>,
    pub song_count: usize,
}

/// Per-(genre, year) mean danceability and energy, the trajectory the
/// drift view animates. Ordered by (genre, year).
pub fn genre_year_means(dataset: &Dataset) -> Vec<GenreYearMeans> {
    let mut groups: BTreeMap<(&str, u16), Vec<usize>> = BTreeMap::new();
    for (row, record) in dataset.iter().enumerate() {
        groups
            .entry((record.genre.as_str(), record.year))
            .or_default()
            .push(row);
    }

    let records = dataset.records();
    groups
        .into_iter()
        .map(|((genre, year), members)| {
            let danceability = stats::present(
                members.iter().map(|&row| records[row].danceability),
            );
            let energy =
                stats::present(members.iter().map(|&row| records[row].energy));
            GenreYearMeans {
                genre: genre.to_owned(),
                year,
                mean_danceability: stats::mean(&danceability),
                mean_energy: stats::mean(&energy),
                song_count: members.len(),
            }
        })
        .collect()
}

/// One bucket of an equal-width feature histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram over the non-missing values of one feature.
///
/// Empty input yields an empty histogram. A degenerate range (every value
/// identical) yields a single bin holding all values.
pub fn feature_histogram(
    dataset: &Dataset,
    feature: AudioFeature,
    bins: usize,
) -> Vec<HistogramBin> {
    let values = stats::present(dataset.iter().map(|r| feature.value(r)));
    if values.is_empty() {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len(),
        }];
    }

    let bins = bins.max(1);
    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for value in &values {
        let mut index = ((value - min) / width) as usize;
        // The maximum lands exactly on the upper edge; keep it in range.
        if index >= bins {
            index = bins - 1;
        }
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::{make_track, make_track_with};
    use crate::dataset::Dataset;

    fn sample_dataset() -> Dataset {
        Dataset::new(
            vec![
                make_track_with("a", "s1", 2001, "pop", Some(0.8), Some(70.0)),
                make_track_with("a", "s1", 2001, "rock", Some(0.8), Some(70.0)),
                make_track_with("a", "s2", 2003, "pop", Some(0.6), Some(50.0)),
                make_track_with("b", "s3", 2005, "pop", Some(0.4), Some(30.0)),
            ],
            true,
        )
    }

    #[test]
    fn overview_counts_unique_entities() {
        let overview = dataset_overview(&sample_dataset());

        assert_eq!(overview.unique_songs, 3);
        assert_eq!(overview.first_year, Some(2001));
        assert_eq!(overview.last_year, Some(2005));
        assert_eq!(overview.genre_count, 2);
        assert_eq!(overview.artist_count, 2);
    }

    #[test]
    fn overview_of_empty_dataset() {
        let overview = dataset_overview(&Dataset::new(vec![], false));

        assert_eq!(overview.unique_songs, 0);
        assert_eq!(overview.first_year, None);
        assert_eq!(overview.last_year, None);
    }

    #[test]
    fn genre_profile_compares_against_catalog() {
        let profile = genre_profile(&sample_dataset(), "pop").unwrap();

        assert_eq!(profile.display_name, "Pop");
        assert_eq!(profile.song_rows, 3);
        assert_eq!(profile.artist_count, 2);

        let energy = profile
            .features
            .iter()
            .find(|f| f.feature == AudioFeature::Energy)
            .unwrap();
        let genre_mean = energy.genre_mean.unwrap();
        let overall_mean = energy.overall_mean.unwrap();
        assert!((genre_mean - 0.6).abs() < 1e-12);
        assert!((overall_mean - 0.65).abs() < 1e-12);
    }

    #[test]
    fn missing_genre_has_no_profile() {
        assert!(genre_profile(&sample_dataset(), "latin").is_none());
    }

    #[test]
    fn top_genres_rank_by_row_count() {
        let ranks = top_genres(&sample_dataset(), 10);

        assert_eq!(ranks[0].genre, "pop");
        assert_eq!(ranks[0].row_count, 3);
        assert_eq!(ranks[0].artist_count, 2);
        assert_eq!(ranks[1].genre, "rock");
        assert_eq!(ranks[1].row_count, 1);
    }

    #[test]
    fn top_genres_honors_limit() {
        assert_eq!(top_genres(&sample_dataset(), 1).len(), 1);
    }

    #[test]
    fn top_artists_count_unique_songs() {
        let ranks = top_artists(&sample_dataset(), 10);

        // Artist "a" has 3 rows but only 2 unique songs.
        assert_eq!(ranks[0].artist, "a");
        assert_eq!(ranks[0].unique_songs, 2);
        assert_eq!(ranks[0].mean_popularity, Some(60.0));
        assert_eq!(ranks[1].artist, "b");
        assert_eq!(ranks[1].unique_songs, 1);
    }

    #[test]
    fn genre_representation_orders_by_song_count() {
        let rows = artist_genre_representation(&sample_dataset(), "a");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].genre, "pop");
        assert_eq!(rows[0].unique_songs, 2);
        assert_eq!(rows[1].genre, "rock");
        assert_eq!(rows[1].unique_songs, 1);
    }

    #[test]
    fn genre_year_means_cover_every_group() {
        let means = genre_year_means(&sample_dataset());

        assert_eq!(means.len(), 4);
        let pop_2001 = means
            .iter()
            .find(|m| m.genre == "pop" && m.year == 2001)
            .unwrap();
        assert_eq!(pop_2001.song_count, 1);
        assert_eq!(pop_2001.mean_energy, Some(0.8));
    }

    #[test]
    fn histogram_spans_value_range() {
        let dataset = Dataset::new(
            (0..100)
                .map(|i| {
                    make_track_with("a", &format!("s{i}"), 2001, "pop", Some(i as f64 / 100.0), None)
                })
                .collect(),
            false,
        );

        let bins = feature_histogram(&dataset, AudioFeature::Energy, 10);

        assert_eq!(bins.len(), 10);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 100);
        assert_eq!(bins[0].lower, 0.0);
        assert!((bins[9].upper - 0.99).abs() < 1e-12);
    }

    #[test]
    fn histogram_of_constant_feature_is_one_bin() {
        let dataset = Dataset::new(
            vec![
                make_track("a", "s1", 2001, "pop"),
                make_track("b", "s2", 2001, "pop"),
            ],
            false,
        );

        let bins = feature_histogram(&dataset, AudioFeature::Energy, 40);

        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 2);
        assert_eq!(bins[0].lower, bins[0].upper);
    }

    #[test]
    fn histogram_of_missing_feature_is_empty() {
        let dataset = Dataset::new(
            vec![make_track_with("a", "s1", 2001, "pop", None, None)],
            false,
        );
        assert!(feature_histogram(&dataset, AudioFeature::Energy, 40).is_empty());
    }
}
