use std::path::PathBuf;
use std::time::Duration;

use crate::config::TrackEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub resource: PathBuf,
    /// Tag duration, if known before the track is prepared. Display only.
    pub duration: Option<Duration>,
}

impl From<&TrackEntry> for Track {
    fn from(entry: &TrackEntry) -> Self {
        Self {
            name: entry.name.clone(),
            resource: entry.path.clone(),
            duration: None,
        }
    }
}
