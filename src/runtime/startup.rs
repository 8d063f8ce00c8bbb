use tracing::{info, warn};

use crate::app::App;
use crate::config::VolumeSettings;
use crate::volume::{PactlVolume, VolumeControl};

/// Connect to the system volume, or run without a volume control.
pub fn open_volume(settings: &VolumeSettings) -> Option<Box<dyn VolumeControl>> {
    if !settings.enabled {
        info!("volume control disabled by config");
        return None;
    }
    match PactlVolume::probe(settings) {
        Ok(v) => Some(Box::new(v)),
        Err(e) => {
            warn!(error = %e, "system volume unavailable, volume control disabled");
            None
        }
    }
}

/// The selector starts on its first entry, so the first track is loaded paused.
pub fn select_initial(app: &mut App) {
    app.cursor = 0;
    app.select_at_cursor();
}
