use super::{Playlist, Track};
use std::collections::HashMap;

/// Complete media library containing the track catalog and playlists
#[derive(Debug, Clone)]
pub struct Library {
    /// All tracks indexed by their catalog id
    tracks: HashMap<String, Track>,

    /// All playlists, in file order
    playlists: Vec<Playlist>,
}

impl Library {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            tracks: HashMap::new(),
            playlists: Vec::new(),
        }
    }

    /// Add a track to the catalog
    pub fn add_track(&mut self, track: Track) {
        self.tracks.insert(track.id().to_string(), track);
    }

    /// Add a playlist to the library
    pub fn add_playlist(&mut self, playlist: Playlist) {
        self.playlists.push(playlist);
    }

    /// Get a track by catalog id
    pub fn get_track(&self, id: &str) -> Option<&Track> {
        self.tracks.get(id)
    }

    /// Get all playlists, in file order
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Total number of tracks in the catalog
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Total number of playlists
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plist::{Dictionary, Value};

    #[test]
    fn test_library_creation() {
        let lib = Library::new();
        assert_eq!(lib.track_count(), 0);
        assert_eq!(lib.playlist_count(), 0);
    }

    #[test]
    fn test_add_track() {
        let mut lib = Library::new();

        let mut fields = Dictionary::new();
        fields.insert("Name".to_string(), Value::String("Test Song".to_string()));
        lib.add_track(Track::new("1001".to_string(), fields));

        assert_eq!(lib.track_count(), 1);
        let track = lib.get_track("1001").expect("track should resolve");
        assert_eq!(
            track.field("Name").and_then(Value::as_string),
            Some("Test Song")
        );
        assert!(lib.get_track("9999").is_none());
    }

    #[test]
    fn test_add_playlist_preserves_order() {
        let mut lib = Library::new();

        lib.add_playlist(Playlist::new(Some("First".to_string())));
        lib.add_playlist(Playlist::new(Some("Second".to_string())));

        assert_eq!(lib.playlist_count(), 2);
        assert_eq!(lib.playlists()[0].name.as_deref(), Some("First"));
        assert_eq!(lib.playlists()[1].name.as_deref(), Some("Second"));
    }
}
