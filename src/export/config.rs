//! Export configuration

use super::fields::FieldMapping;
use std::path::PathBuf;

/// Configuration for the export process
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory the playlist files are written into
    pub output_dir: PathBuf,

    /// Ordered output column table
    pub fields: FieldMapping,

    /// What to do when two playlist names sanitize to the same filename
    pub collisions: CollisionPolicy,
}

/// Filename collision handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Later playlists silently overwrite earlier ones (reference behavior)
    Overwrite,

    /// Second and later collisions get a numeric suffix before `.txt`
    NumberSuffix,
}

impl ExportConfig {
    /// Create a new export configuration with the standard column table
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            fields: FieldMapping::standard(),
            collisions: CollisionPolicy::Overwrite,
        }
    }

    /// Replace the output column table
    pub fn with_fields(mut self, fields: FieldMapping) -> Self {
        self.fields = fields;
        self
    }

    /// Set the filename collision policy
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collisions = policy;
        self
    }
}
