use serde::{Deserialize, Serialize};

/// One row of the source file before genre expansion.
///
/// The `genre` field may hold a single label, a comma-space separated
/// multi-label string, or the no-data sentinel. Numeric fields are lenient:
/// anything that did not parse is carried as `None` and excluded from
/// aggregates downstream, never coerced to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub artist: String,
    pub song: String,
    pub year: u16,
    pub genre: String,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub valence: Option<f64>,
    pub acousticness: Option<f64>,
    pub speechiness: Option<f64>,
    pub liveness: Option<f64>,
    pub instrumentalness: Option<f64>,
    pub tempo: Option<f64>,
    pub loudness: Option<f64>,
    pub popularity: Option<f64>,
}

/// One row of the analysis dataset: a song tagged with exactly one genre
/// token. A song carrying multiple genre labels appears once per token,
/// with the unsplit label retained in `original_genre`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub artist: String,
    pub song: String,
    pub year: u16,
    /// Single non-empty genre token.
    pub genre: String,
    /// The genre string as it appeared in the source file.
    pub original_genre: String,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub valence: Option<f64>,
    pub acousticness: Option<f64>,
    pub speechiness: Option<f64>,
    pub liveness: Option<f64>,
    pub instrumentalness: Option<f64>,
    pub tempo: Option<f64>,
    pub loudness: Option<f64>,
    pub popularity: Option<f64>,
}

impl TrackRecord {
    /// Builds an expanded record from a source row and one of its genre tokens.
    pub fn from_source(source: &SourceRecord, genre: &str) -> Self {
        Self {
            artist: source.artist.clone(),
            song: source.song.clone(),
            year: source.year,
            genre: genre.to_owned(),
            original_genre: source.genre.clone(),
            danceability: source.danceability,
            energy: source.energy,
            valence: source.valence,
            acousticness: source.acousticness,
            speechiness: source.speechiness,
            liveness: source.liveness,
            instrumentalness: source.instrumentalness,
            tempo: source.tempo,
            loudness: source.loudness,
            popularity: source.popularity,
        }
    }
}
