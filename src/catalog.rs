//! The fixed, ordered track list the selector is built from.
//!
//! A catalog comes either from the configured `[[catalog.tracks]]` entries or
//! from scanning a directory given on the command line. It never changes
//! after startup.

mod model;
mod scan;

pub use model::Track;
pub use scan::probe_duration;

use std::path::Path;

use crate::config::CatalogSettings;
use crate::error::{PlayerError, Result};

#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(PlayerError::EmptyCatalog);
        }
        Ok(Self { tracks })
    }

    /// Build the catalog from the configured fixed entries.
    pub fn from_settings(settings: &CatalogSettings) -> Result<Self> {
        let tracks = settings
            .tracks
            .iter()
            .map(|entry| {
                let mut track = Track::from(entry);
                track.duration = probe_duration(&track.resource);
                track
            })
            .collect();
        Self::new(tracks)
    }

    /// Build the catalog by scanning `dir` for audio files.
    pub fn scan_dir(dir: &Path, settings: &CatalogSettings) -> Result<Self> {
        Self::new(scan::scan(dir, settings))
    }

    pub fn get(&self, index: usize) -> Result<&Track> {
        self.tracks.get(index).ok_or(PlayerError::TrackOutOfRange {
            index,
            len: self.tracks.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Tracks whose resource is not a file on disk.
    pub fn missing(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(|t| !t.resource.is_file())
    }
}
