//! Groovelens
//!
//! Analytics core behind an exploratory dashboard of audio features,
//! genres, and popularity in the Spotify top-hits dataset (2000-2019).
//!
//! The crate owns the data transformations only: genre expansion,
//! popularity measure resolution, within-genre variation over time,
//! feature-to-popularity response curves, artist consistency profiles, and
//! the small descriptive summaries around them. Rendering, layout, and
//! navigation state belong to whatever presentation layer sits on top;
//! every function here takes the dataset and explicit parameters and
//! returns an owned, serializable table or series.
//!
//! ## Quick start
//!
//! ```no_run
//! use groovelens::{load_dataset, resolve_popularity, build_response_curve};
//! use groovelens::{AudioFeature, YearWindow, DEFAULT_BIN_TARGET};
//!
//! let dataset = load_dataset("songs_expanded_genres.csv", YearWindow::default())?;
//! let popularity = resolve_popularity(&dataset);
//! let curve = build_response_curve(
//!     &dataset,
//!     &popularity,
//!     AudioFeature::Danceability,
//!     DEFAULT_BIN_TARGET,
//! );
//! println!("{} ({} bins)", popularity.label(), curve.len());
//! # Ok::<(), groovelens::LoadError>(())
//! ```
//!
//! Aggregations never fail: insufficient data surfaces as empty results or
//! missing values. The only fallible operation is loading the input table.

pub mod analysis;
pub mod dataset;
pub mod error;

// Re-export the main types and entry points.
pub use analysis::{
    artist_genre_representation, artist_profile, build_response_curve, categorize_value,
    change_summaries, change_summary, dataset_overview, feature_histogram, genre_profile,
    genre_year_means, genre_year_variation, resolve_popularity, sonic_signature, top_artists,
    top_genres, ArtistProfile, ArtistRank, ChangeSummary, DatasetOverview, FeatureLevel,
    GenreProfile, GenreRank, GenreYearMeans, GenreYearVariation, HistogramBin, PopularitySource,
    ResolvedPopularity, ResponseCurvePoint, DEFAULT_BIN_TARGET, DEFAULT_HISTOGRAM_BINS,
    DEFAULT_MIN_GROUP_SIZE,
};
pub use dataset::{
    display_genre_name, expand_genres, expand_record, load_dataset, AudioFeature, Dataset,
    FeatureScale, SourceRecord, TrackRecord, YearWindow,
};
pub use error::{LoadError, LoadResult};
