//! Error types for playback and device control.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    /// The selector asked for an index outside the catalog.
    #[error("track index {index} out of range (catalog has {len} tracks)")]
    TrackOutOfRange { index: usize, len: usize },

    #[error("catalog is empty")]
    EmptyCatalog,

    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },

    /// Re-priming a stopped handle failed; the handle stays unusable.
    #[error("failed to prepare playback: {0}")]
    Prepare(String),

    #[error("seek failed: {0}")]
    Seek(String),

    #[error("no audio output device: {0}")]
    Output(String),

    #[error("volume service error: {0}")]
    Volume(String),
}

pub type Result<T> = std::result::Result<T, PlayerError>;
