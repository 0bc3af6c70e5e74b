//! End-to-end tests for the analysis pipeline
//!
//! Loads a small CSV fixture, runs expansion, popularity resolution, and
//! every aggregation the way a presentation layer would.

use anyhow::Result;
use groovelens::{
    artist_profile, build_response_curve, change_summary, dataset_overview, expand_genres,
    genre_year_variation, load_dataset, resolve_popularity, top_artists, top_genres, AudioFeature,
    Dataset, PopularitySource, SourceRecord, YearWindow, DEFAULT_BIN_TARGET,
    DEFAULT_MIN_GROUP_SIZE,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

fn make_source(artist: &str, song: &str, year: u16, genre: &str, energy: f64) -> SourceRecord {
    SourceRecord {
        artist: artist.to_owned(),
        song: song.to_owned(),
        year,
        genre: genre.to_owned(),
        danceability: Some(0.6),
        energy: Some(energy),
        valence: Some(0.5),
        acousticness: Some(0.2),
        speechiness: Some(0.05),
        liveness: Some(0.15),
        instrumentalness: Some(0.0),
        tempo: Some(118.0),
        loudness: Some(-6.5),
        popularity: None,
    }
}

// =============================================================================
// Expansion + proxy popularity
// =============================================================================

#[test]
fn test_expansion_feeds_the_appearance_proxy() {
    // Three songs; the multi-genre one appears once per token.
    let sources = vec![
        make_source("A", "S1", 2001, "pop", 0.5),
        make_source("B", "S2", 2001, "pop, rock", 0.6),
        make_source("C", "S3", 2001, "rock", 0.7),
    ];

    let records = expand_genres(&sources);
    assert_eq!(records.len(), 4);

    let dataset = Dataset::new(records, false);
    let popularity = resolve_popularity(&dataset);

    assert_eq!(popularity.source, PopularitySource::AppearanceProxy);
    // The expanded song counts twice, the single-genre songs once.
    let measures: Vec<f64> = popularity.values.iter().map(|v| v.unwrap()).collect();
    assert_eq!(measures, vec![1.0, 2.0, 2.0, 1.0]);
}

// =============================================================================
// Convergence over time
// =============================================================================

#[test]
fn test_variation_detects_convergence() {
    // 2001: energies evenly spread over [0.1, 1.0]; 2019: clustered at 0.5.
    let mut sources = Vec::new();
    for i in 0..10 {
        sources.push(make_source(
            &format!("A{i}"),
            &format!("early-{i}"),
            2001,
            "rock",
            0.1 + i as f64 * 0.1,
        ));
        sources.push(make_source(
            &format!("B{i}"),
            &format!("late-{i}"),
            2019,
            "rock",
            0.5 + i as f64 * 0.002,
        ));
    }

    let dataset = Dataset::new(expand_genres(&sources), false);
    let rows = genre_year_variation(&dataset, DEFAULT_MIN_GROUP_SIZE);

    assert_eq!(rows.len(), 2);
    let early = rows.iter().find(|r| r.year == 2001).unwrap();
    let late = rows.iter().find(|r| r.year == 2019).unwrap();
    assert!(early.energy_std.unwrap() > late.energy_std.unwrap());

    let summary = change_summary(&rows, "rock", AudioFeature::Energy).unwrap();
    assert!(summary.absolute_change.unwrap() < 0.0);
    assert!(summary.percent_change.unwrap() < 0.0);
}

// =============================================================================
// CSV load through the whole pipeline
// =============================================================================

#[test]
fn test_csv_load_to_response_curve() -> Result<()> {
    init_tracing();

    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        "artist,song,year,genre,danceability,energy,valence,acousticness,speechiness,liveness,instrumentalness,tempo,loudness,popularity"
    )
    .unwrap();
    for i in 0..30 {
        writeln!(
            file,
            "Artist{i},Song{i},{},pop,0.{:02},0.{:02},0.5,0.2,0.05,0.15,0.0,118.0,-6.5,{}",
            2000 + (i % 20),
            10 + i,
            10 + i,
            30 + i
        )
        .unwrap();
    }
    // One row outside the window and one with a junk year.
    writeln!(
        file,
        "Old,OldSong,1995,pop,0.5,0.5,0.5,0.2,0.05,0.15,0.0,118.0,-6.5,10"
    )
    .unwrap();
    writeln!(
        file,
        "Junk,JunkSong,199X,pop,0.5,0.5,0.5,0.2,0.05,0.15,0.0,118.0,-6.5,10"
    )
    .unwrap();
    file.flush().unwrap();

    let dataset = load_dataset(file.path(), YearWindow::default())?;
    assert_eq!(dataset.len(), 30);
    assert!(dataset.has_popularity_column());

    let overview = dataset_overview(&dataset);
    assert_eq!(overview.unique_songs, 30);
    assert_eq!(overview.genre_count, 1);

    let popularity = resolve_popularity(&dataset);
    assert_eq!(popularity.source, PopularitySource::NativeScore);
    assert_eq!(
        popularity.label(),
        "Spotify Popularity (Dataset Field)"
    );

    let curve = build_response_curve(
        &dataset,
        &popularity,
        AudioFeature::Danceability,
        DEFAULT_BIN_TARGET,
    );
    assert!(!curve.is_empty());
    assert_eq!(curve.iter().map(|p| p.count).sum::<usize>(), 30);
    // Popularity was constructed to rise with danceability.
    assert!(curve
        .windows(2)
        .all(|w| w[0].outcome_mean <= w[1].outcome_mean));

    // The presentation layer consumes these tables as JSON.
    let json = serde_json::to_value(&curve)?;
    assert_eq!(json.as_array().unwrap().len(), curve.len());

    Ok(())
}

// =============================================================================
// Artist-facing summaries
// =============================================================================

#[test]
fn test_rankings_and_profiles_agree_on_dedup() {
    let sources = vec![
        make_source("A", "S1", 2001, "pop, rock", 0.8),
        make_source("A", "S2", 2002, "pop", 0.8),
        make_source("B", "S3", 2001, "rock", 0.4),
    ];
    let dataset = Dataset::new(expand_genres(&sources), false);

    let genres = top_genres(&dataset, 10);
    assert_eq!(genres[0].genre, "pop");
    assert_eq!(genres[0].row_count, 2);

    let artists = top_artists(&dataset, 10);
    assert_eq!(artists[0].artist, "A");
    assert_eq!(artists[0].unique_songs, 2);

    let profile = artist_profile(&dataset, "A").unwrap();
    assert_eq!(profile.song_count, 2);
    assert_eq!(profile.genre_count, 2);
    let energy = profile
        .features
        .iter()
        .find(|f| f.feature == AudioFeature::Energy)
        .unwrap();
    // Identical energy across songs reads as perfectly consistent.
    assert_eq!(energy.consistency, Some(1.0));
}
