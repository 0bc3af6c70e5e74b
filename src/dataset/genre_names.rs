//! Display-friendly genre names.
//!
//! Genre tokens in the source file are lowercase. The presentation layer
//! wants stable display names, so known tokens map through a fixed table
//! and unknown tokens fall back to simple capitalization.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref GENRE_DISPLAY_NAMES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("hip hop", "Hip Hop");
        m.insert("pop", "Pop");
        m.insert("rock", "Rock");
        m.insert("dance/electronic", "Dance/Electronic");
        m.insert("r&b", "R&B");
        m.insert("latin", "Latin");
        m.insert("country", "Country");
        m.insert("metal", "Metal");
        m.insert("indie", "Indie");
        m.insert("folk", "Folk");
        m.insert("jazz", "Jazz");
        m.insert("classical", "Classical");
        m.insert("folk/acoustic", "Folk/Acoustic");
        m.insert("world/traditional", "World/Traditional");
        m.insert("easy listening", "Easy Listening");
        m.insert("blues", "Blues");
        m
    };
}

/// Maps a raw genre token to its display name.
///
/// Unknown tokens get their first character uppercased and the rest
/// lowercased.
pub fn display_genre_name(genre: &str) -> String {
    if let Some(name) = GENRE_DISPLAY_NAMES.get(genre.to_lowercase().as_str()) {
        return (*name).to_owned();
    }
    capitalize(genre)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}
