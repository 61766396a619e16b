//! iTunes/Music library parsing
//!
//! Decodes the application's property-list library file (XML or
//! binary) to extract the track catalog and playlist structure.

mod tracks;
mod playlists;

pub use tracks::parse_tracks;
pub use playlists::parse_playlists;

use crate::model::Library;
use plist::Value;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Terminal failures while loading the library file.
///
/// Both abort the run before any output directory or file is created.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The library file does not exist at the given path.
    #[error("library file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be decoded as a property list.
    #[error("failed to parse library file: {message}")]
    Parse { message: String },
}

/// Load a complete library from its property-list file
///
/// # Arguments
/// * `path` - Path to the library file (typically Library.xml exported
///   from iTunes/Music)
///
/// # Returns
/// A unified Library containing all tracks and playlists
pub fn load_library(path: &Path) -> Result<Library, LoadError> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Parse {
                message: e.to_string(),
            }
        }
    })?;

    let value = Value::from_reader(BufReader::new(file)).map_err(|e| LoadError::Parse {
        message: e.to_string(),
    })?;

    let root = value.as_dictionary().ok_or_else(|| LoadError::Parse {
        message: "root element is not a dictionary".to_string(),
    })?;

    let mut library = Library::new();

    for track in parse_tracks(root) {
        library.add_track(track);
    }

    for playlist in parse_playlists(root) {
        library.add_playlist(playlist);
    }

    log::info!(
        "Loaded library: {} tracks, {} playlists",
        library.track_count(),
        library.playlist_count()
    );

    Ok(library)
}
