//! Main export orchestration
//!
//! Renders each eligible playlist into one tab-separated text file
//! under the configured output directory, one playlist at a time.

use super::config::{CollisionPolicy, ExportConfig};
use super::render::{field_value, sanitize_filename};
use super::rewrite::PathRewrite;
use crate::model::{Library, Playlist};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Main export pipeline
pub struct ExportPipeline<R: PathRewrite> {
    config: ExportConfig,
    rewrite: R,
}

impl<R: PathRewrite> ExportPipeline<R> {
    /// Create a new export pipeline
    pub fn new(config: ExportConfig, rewrite: R) -> Self {
        Self { config, rewrite }
    }

    /// Run the complete export process
    ///
    /// Returns the number of playlists written. Per-playlist I/O
    /// failures propagate and abort the run; this is a single-pass
    /// batch job with no partial-completion contract.
    pub fn export(&self, library: &Library) -> Result<usize> {
        fs::create_dir_all(&self.config.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {:?}",
                self.config.output_dir
            )
        })?;

        if library.track_count() == 0 {
            log::warn!("No tracks found in the library file");
        }
        if library.playlist_count() == 0 {
            log::warn!("No playlists found in the library file");
            return Ok(0);
        }

        log::info!("Saving playlists to {:?}", self.config.output_dir);

        let mut written = 0;
        let mut used_names: HashMap<String, u32> = HashMap::new();

        for playlist in library.playlists() {
            if !playlist.is_exportable() {
                log::debug!(
                    "Skipping playlist: {:?}",
                    playlist.name.as_deref().unwrap_or("<unnamed>")
                );
                continue;
            }

            // is_exportable guarantees a non-empty name
            let name = playlist.name.as_deref().unwrap_or_default();
            let filename = self.output_filename(name, &mut used_names);
            let path = self.config.output_dir.join(&filename);

            log::info!(
                "Extracting playlist: '{}' ({} tracks)",
                name,
                playlist.len()
            );

            self.write_playlist(library, playlist, &path)
                .with_context(|| format!("Failed to write playlist file: {:?}", path))?;

            written += 1;
        }

        Ok(written)
    }

    /// Compute the output filename for a playlist name
    fn output_filename(&self, name: &str, used_names: &mut HashMap<String, u32>) -> String {
        let base = sanitize_filename(name);

        match self.config.collisions {
            CollisionPolicy::Overwrite => format!("{}.txt", base),
            CollisionPolicy::NumberSuffix => {
                let seen = used_names.entry(base.clone()).or_insert(0);
                *seen += 1;
                if *seen == 1 {
                    format!("{}.txt", base)
                } else {
                    format!("{} ({}).txt", base, *seen - 1)
                }
            }
        }
    }

    /// Write one playlist file: header line, then one row per
    /// resolvable track reference
    fn write_playlist(&self, library: &Library, playlist: &Playlist, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{}", self.config.fields.header_line())?;

        for track_id in &playlist.track_ids {
            let track = match library.get_track(track_id) {
                Some(track) => track,
                None => {
                    log::debug!("Track {} not in catalog, skipping", track_id);
                    continue;
                }
            };

            let row: Vec<String> = self
                .config
                .fields
                .columns()
                .iter()
                .map(|column| field_value(track, column, &self.rewrite))
                .collect();

            writeln!(writer, "{}", row.join("\t"))?;
        }

        writer.flush()?;
        Ok(())
    }
}
