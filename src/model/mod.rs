//! Unified data model for the media library
//!
//! This module defines data structures that are independent of
//! the property-list input format and the text output format.

mod track;
mod playlist;
mod library;

pub use track::Track;
pub use playlist::Playlist;
pub use library::Library;
