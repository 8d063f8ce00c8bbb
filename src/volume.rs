//! System media volume.
//!
//! The player never owns the volume: it mirrors the device level into its
//! range control and pushes drags straight back to the system. The
//! production implementation drives the PulseAudio/PipeWire sink through
//! `pactl`.

use std::process::Command;

use tracing::debug;

use crate::config::VolumeSettings;
use crate::error::{PlayerError, Result};

pub trait VolumeControl {
    /// Upper bound of the volume scale.
    fn max(&self) -> u32;
    fn current(&self) -> Result<u32>;
    fn set_current(&mut self, level: u32) -> Result<()>;
}

/// Volume of a `pactl` sink, in percent of its nominal volume.
pub struct PactlVolume {
    sink: String,
    max: u32,
}

impl PactlVolume {
    /// Connect to the configured sink, failing when `pactl` cannot read it.
    pub fn probe(settings: &VolumeSettings) -> Result<Self> {
        let volume = Self {
            sink: settings.sink.clone(),
            max: settings.max,
        };
        let level = volume.current()?;
        debug!(sink = %volume.sink, level, "volume service available");
        Ok(volume)
    }

    fn pactl(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("pactl")
            .args(args)
            .output()
            .map_err(|e| PlayerError::Volume(format!("failed to run pactl: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PlayerError::Volume(format!(
                "pactl {} failed: {}",
                args.join(" "),
                stderr.trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl VolumeControl for PactlVolume {
    fn max(&self) -> u32 {
        self.max
    }

    fn current(&self) -> Result<u32> {
        let out = self.pactl(&["get-sink-volume", &self.sink])?;
        parse_percent(&out)
            .ok_or_else(|| PlayerError::Volume(format!("unexpected pactl output: {}", out.trim())))
    }

    fn set_current(&mut self, level: u32) -> Result<()> {
        let level = level.min(self.max);
        self.pactl(&["set-sink-volume", &self.sink, &format!("{level}%")])?;
        Ok(())
    }
}

/// Extract the first channel's percentage from `pactl get-sink-volume` output.
///
/// Example input:
/// `Volume: front-left: 32768 /  50% / -18.06 dB,   front-right: 32768 /  50% / -18.06 dB`
fn parse_percent(output: &str) -> Option<u32> {
    output
        .split_whitespace()
        .find_map(|token| token.strip_suffix('%'))
        .and_then(|n| n.parse().ok())
}
