mod consistency;
mod popularity;
mod profiles;
mod response_curve;
mod stats;
mod variation;

pub use consistency::{
    artist_profile, categorize_value, sonic_signature, ArtistProfile, FeatureConsistency,
    FeatureLevel, CONSISTENCY_STD_CLAMP, TEMPO_HIGH_BPM, TEMPO_MEDIUM_BPM, UNIT_HIGH_THRESHOLD,
    UNIT_MEDIUM_THRESHOLD,
};
pub use popularity::{resolve_popularity, PopularitySource, ResolvedPopularity};
pub use profiles::{
    artist_genre_representation, dataset_overview, feature_histogram, genre_profile,
    genre_year_means, top_artists, top_genres, ArtistRank, DatasetOverview, FeatureComparison,
    GenreProfile, GenreRank, GenreRepresentation, GenreYearMeans, HistogramBin,
    DEFAULT_HISTOGRAM_BINS,
};
pub use response_curve::{build_response_curve, ResponseCurvePoint, DEFAULT_BIN_TARGET};
pub use variation::{
    change_summaries, change_summary, genre_year_variation, ChangeSummary, GenreYearVariation,
    DEFAULT_MIN_GROUP_SIZE,
};
