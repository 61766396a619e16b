//! Track catalog parsing
//!
//! The library's "Tracks" key holds a dictionary keyed by track id
//! (string form of an integer), each value being the field dictionary
//! for one track.

use crate::model::Track;
use plist::{Dictionary, Value};

/// Extract all tracks from the decoded library root
///
/// A missing or malformed "Tracks" key yields an empty catalog; the
/// caller decides whether that warrants a warning.
pub fn parse_tracks(root: &Dictionary) -> Vec<Track> {
    let mut tracks = Vec::new();

    let catalog = match root.get("Tracks").and_then(Value::as_dictionary) {
        Some(catalog) => catalog,
        None => {
            log::debug!("Library file has no Tracks dictionary");
            return tracks;
        }
    };

    for (id, entry) in catalog {
        match entry.as_dictionary() {
            Some(fields) => tracks.push(Track::new(id.clone(), fields.clone())),
            None => log::debug!("Track {} is not a dictionary, skipping", id),
        }
    }

    log::debug!("Parsed {} tracks from the catalog", tracks.len());
    tracks
}
