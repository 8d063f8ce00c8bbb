use std::path::Path;
use std::time::Duration;

use lofty::prelude::*;
use walkdir::WalkDir;

use crate::config::CatalogSettings;

use super::model::Track;

fn is_audio_file(path: &Path, settings: &CatalogSettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn make_name(title: &str, artist: Option<&str>) -> String {
    match artist.map(str::trim) {
        Some(a) if !a.is_empty() => format!("{} - {}", a, title.trim()),
        _ => title.trim().to_string(),
    }
}

/// Read the tag-reported duration of `path`, if the file can be probed.
pub fn probe_duration(path: &Path) -> Option<Duration> {
    lofty::read_from_path(path)
        .ok()
        .map(|tagged| tagged.properties().duration())
        .filter(|d| !d.is_zero())
}

fn read_track(path: &Path) -> Track {
    let mut title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN")
        .to_string();
    let mut artist: Option<String> = None;
    let mut duration: Option<Duration> = None;

    if let Ok(tagged) = lofty::read_from_path(path) {
        duration = Some(tagged.properties().duration()).filter(|d| !d.is_zero());

        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            if let Some(v) = tag.title() {
                if !v.trim().is_empty() {
                    title = v.to_string();
                }
            }
            if let Some(v) = tag.artist() {
                if !v.trim().is_empty() {
                    artist = Some(v.to_string());
                }
            }
        }
    }

    Track {
        name: make_name(&title, artist.as_deref()),
        resource: path.to_path_buf(),
        duration,
    }
}

/// Build a catalog from the audio files under `dir`, sorted by name.
pub fn scan(dir: &Path, settings: &CatalogSettings) -> Vec<Track> {
    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    let mut tracks: Vec<Track> = walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file() && is_audio_file(entry.path(), settings))
        .map(|entry| read_track(entry.path()))
        .collect();

    tracks.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    tracks
}
