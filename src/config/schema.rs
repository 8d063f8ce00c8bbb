use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/andante/config.toml` or `~/.config/andante/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ANDANTE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub controls: ControlsSettings,
    pub ui: UiSettings,
    pub volume: VolumeSettings,
    pub catalog: CatalogSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// How far the back/forward transport buttons move playback (milliseconds).
    pub seek_step_ms: u64,
    /// Volume change applied by the `-` / `+` keys, in device volume units.
    pub volume_step: u32,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            seek_step_ms: 10_000,
            volume_step: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Delay between progress refreshes while playing (milliseconds).
    pub refresh_interval_ms: u64,
    /// Show tag durations next to track names in the selector.
    pub show_durations: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ andante ~ ".to_string(),
            refresh_interval_ms: 1000,
            show_durations: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VolumeSettings {
    /// Mirror and drive the system media volume.
    pub enabled: bool,
    /// `pactl` sink name.
    pub sink: String,
    /// Upper bound of the volume range control (percent of the sink's nominal volume).
    pub max: u32,
}

impl Default for VolumeSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            sink: "@DEFAULT_SINK@".to_string(),
            max: 100,
        }
    }
}

/// One fixed catalog entry.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TrackEntry {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Fixed track list used when no directory is given on the command line.
    pub tracks: Vec<TrackEntry>,

    /// File extensions to treat as audio when scanning (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            tracks: vec![
                TrackEntry {
                    name: "Song 1".to_string(),
                    path: PathBuf::from("assets/song1.mp3"),
                },
                TrackEntry {
                    name: "Song 2".to_string(),
                    path: PathBuf::from("assets/song2.mp3"),
                },
            ],
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter directive; `ANDANTE_LOG` takes precedence.
    pub level: String,
    /// Log file; defaults to `$XDG_STATE_HOME/andante/andante.log`.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
