//! Playlist list parsing
//!
//! The library's "Playlists" key holds an array of dictionaries, each
//! with a name, system-collection markers, and a "Playlist Items"
//! array whose entries reference tracks by "Track ID".

use crate::model::Playlist;
use plist::{Dictionary, Value};

/// Extract all playlists from the decoded library root, in file order
///
/// Item entries without a "Track ID" are dropped here; an id that
/// later fails to resolve against the catalog is skipped at export
/// time with the same visible result.
pub fn parse_playlists(root: &Dictionary) -> Vec<Playlist> {
    let entries = match root.get("Playlists").and_then(Value::as_array) {
        Some(entries) => entries,
        None => return Vec::new(),
    };

    let mut playlists = Vec::new();
    for entry in entries {
        if let Some(dict) = entry.as_dictionary() {
            playlists.push(parse_playlist(dict));
        }
    }

    log::debug!("Parsed {} playlists from the library", playlists.len());
    playlists
}

fn parse_playlist(dict: &Dictionary) -> Playlist {
    let name = dict
        .get("Name")
        .and_then(Value::as_string)
        .map(str::to_owned);

    let mut playlist = Playlist::new(name);
    playlist.master = dict
        .get("Master")
        .and_then(Value::as_boolean)
        .unwrap_or(false);
    playlist.music = dict
        .get("Music")
        .and_then(Value::as_boolean)
        .unwrap_or(false);

    if let Some(items) = dict.get("Playlist Items").and_then(Value::as_array) {
        for item in items {
            let track_id = item
                .as_dictionary()
                .and_then(|d| d.get("Track ID"))
                .and_then(Value::as_signed_integer);

            match track_id {
                Some(id) => playlist.add_track(id.to_string()),
                None => log::debug!("Playlist item without a track id, skipping"),
            }
        }
    }

    playlist
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist_entry(name: Option<&str>, ids: &[i64]) -> Dictionary {
        let mut dict = Dictionary::new();
        if let Some(name) = name {
            dict.insert("Name".to_string(), Value::String(name.to_string()));
        }
        let items: Vec<Value> = ids
            .iter()
            .map(|id| {
                let mut item = Dictionary::new();
                item.insert("Track ID".to_string(), Value::Integer((*id).into()));
                Value::Dictionary(item)
            })
            .collect();
        dict.insert("Playlist Items".to_string(), Value::Array(items));
        dict
    }

    #[test]
    fn test_parse_playlists_in_order() {
        let mut root = Dictionary::new();
        root.insert(
            "Playlists".to_string(),
            Value::Array(vec![
                Value::Dictionary(playlist_entry(Some("First"), &[1, 2])),
                Value::Dictionary(playlist_entry(Some("Second"), &[3])),
            ]),
        );

        let playlists = parse_playlists(&root);
        assert_eq!(playlists.len(), 2);
        assert_eq!(playlists[0].name.as_deref(), Some("First"));
        assert_eq!(playlists[0].track_ids, vec!["1", "2"]);
        assert_eq!(playlists[1].track_ids, vec!["3"]);
    }

    #[test]
    fn test_system_markers() {
        let mut dict = playlist_entry(Some("Library"), &[1]);
        dict.insert("Master".to_string(), Value::Boolean(true));

        let playlist = parse_playlist(&dict);
        assert!(playlist.master);
        assert!(!playlist.music);
        assert!(!playlist.is_exportable());
    }

    #[test]
    fn test_items_without_track_id_are_dropped() {
        let mut dict = playlist_entry(Some("Mixed"), &[7]);
        let items = dict
            .get_mut("Playlist Items")
            .and_then(Value::as_array_mut)
            .unwrap();
        items.push(Value::Dictionary(Dictionary::new()));

        let playlist = parse_playlist(&dict);
        assert_eq!(playlist.track_ids, vec!["7"]);
    }

    #[test]
    fn test_missing_playlists_key() {
        let root = Dictionary::new();
        assert!(parse_playlists(&root).is_empty());
    }
}
