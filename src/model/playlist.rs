use serde::{Deserialize, Serialize};

/// Represents a playlist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name; playlists without one are never exported
    pub name: Option<String>,

    /// Ordered track ids (references into the library catalog)
    pub track_ids: Vec<String>,

    /// Whether this is the master "library" collection
    pub master: bool,

    /// Whether this is the "music" system collection
    pub music: bool,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            track_ids: Vec::new(),
            master: false,
            music: false,
        }
    }

    /// Append a track reference to this playlist
    pub fn add_track(&mut self, track_id: String) {
        self.track_ids.push(track_id);
    }

    /// Number of item references in this playlist
    pub fn len(&self) -> usize {
        self.track_ids.len()
    }

    /// Check if playlist has no item references
    pub fn is_empty(&self) -> bool {
        self.track_ids.is_empty()
    }

    /// A playlist is exportable when it has a non-empty name, at least
    /// one item reference, and is not a system-reserved collection.
    pub fn is_exportable(&self) -> bool {
        let named = self.name.as_deref().map(|n| !n.is_empty()).unwrap_or(false);
        named && !self.is_empty() && !self.master && !self.music
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exportable_requires_name_and_items() {
        let mut playlist = Playlist::new(Some("Favourites".to_string()));
        assert!(!playlist.is_exportable());

        playlist.add_track("42".to_string());
        assert!(playlist.is_exportable());

        let mut unnamed = Playlist::new(None);
        unnamed.add_track("42".to_string());
        assert!(!unnamed.is_exportable());

        let mut blank = Playlist::new(Some(String::new()));
        blank.add_track("42".to_string());
        assert!(!blank.is_exportable());
    }

    #[test]
    fn test_system_playlists_not_exportable() {
        let mut playlist = Playlist::new(Some("Library".to_string()));
        playlist.add_track("42".to_string());
        playlist.master = true;
        assert!(!playlist.is_exportable());

        let mut music = Playlist::new(Some("Music".to_string()));
        music.add_track("42".to_string());
        music.music = true;
        assert!(!music.is_exportable());
    }
}
