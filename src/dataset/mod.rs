mod dataset;
mod expand;
mod feature;
mod genre_names;
mod load;
mod track;

pub use dataset::Dataset;
pub use expand::{expand_genres, expand_record, genre_tokens, NO_GENRE_SENTINEL};
pub use feature::{AudioFeature, FeatureScale};
pub use genre_names::display_genre_name;
pub use load::{load_dataset, YearWindow};
pub use track::{SourceRecord, TrackRecord};
