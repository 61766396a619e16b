//! Playlist Exporter - iTunes/Music library to tab-separated text
//!
//! This library reads an iTunes/Music property-list library file and
//! writes each eligible playlist as a tab-separated text file, one
//! row per track.

pub mod export;
pub mod itunes;
pub mod model;

pub use export::config::{CollisionPolicy, ExportConfig};
pub use export::pipeline::ExportPipeline;
