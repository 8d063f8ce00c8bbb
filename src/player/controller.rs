use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use crate::audio::{MediaBackend, MediaHandle};
use crate::catalog::Catalog;
use crate::config::Settings;
use crate::error::Result;
use crate::volume::VolumeControl;

use super::progress::ProgressView;
use super::range::RangeControl;
use super::timer::Deferred;

/// Work the controller defers to a later turn of the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    RefreshDisplay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    pub seek_step_ms: u64,
    pub refresh_interval: Duration,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            seek_step_ms: 10_000,
            refresh_interval: Duration::from_millis(1000),
        }
    }
}

impl From<&Settings> for ControllerOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            seek_step_ms: settings.controls.seek_step_ms,
            refresh_interval: Duration::from_millis(settings.ui.refresh_interval_ms),
        }
    }
}

/// Owns the single playback handle and keeps the progress and volume
/// controls in sync with it.
///
/// Every operation is a silent no-op when no handle is loaded.
pub struct Controller {
    catalog: Catalog,
    media: Box<dyn MediaBackend>,
    volume: Option<Box<dyn VolumeControl>>,
    handle: Option<Box<dyn MediaHandle>>,
    /// Cleared when re-priming the handle fails; reselecting sets it again.
    ready: bool,
    selected: Option<usize>,
    progress: ProgressView,
    volume_range: RangeControl,
    ticks: Deferred<Tick>,
    options: ControllerOptions,
}

impl Controller {
    pub fn new(
        catalog: Catalog,
        media: Box<dyn MediaBackend>,
        volume: Option<Box<dyn VolumeControl>>,
        options: ControllerOptions,
    ) -> Self {
        let volume_range = match volume.as_deref() {
            Some(v) => {
                let current = v.current().unwrap_or_else(|e| {
                    warn!(error = %e, "could not read device volume");
                    0
                });
                RangeControl::new(u64::from(v.max()), u64::from(current))
            }
            None => RangeControl::default(),
        };

        Self {
            catalog,
            media,
            volume,
            handle: None,
            ready: false,
            selected: None,
            progress: ProgressView::default(),
            volume_range,
            ticks: Deferred::default(),
            options,
        }
    }

    /// Replace the current handle with a fresh, paused one for track `index`.
    pub fn select_track(&mut self, index: usize) -> Result<()> {
        let track = self.catalog.get(index)?.clone();

        self.release_handle();
        self.selected = Some(index);

        match self.media.create(&track.resource) {
            Ok(handle) => {
                let duration = handle.duration();
                self.handle = Some(handle);
                self.ready = true;
                self.progress.reset(duration);
                info!(index, name = %track.name, duration_ms = duration, "track selected");
                Ok(())
            }
            Err(e) => {
                error!(index, resource = ?track.resource, error = %e, "failed to prepare track");
                self.progress.reset(0);
                Err(e)
            }
        }
    }

    pub fn play(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        if handle.is_playing() {
            return;
        }
        handle.start();
        info!(position_ms = handle.current_position(), "play");
        self.refresh_display();
    }

    pub fn pause(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        if !handle.is_playing() {
            return;
        }
        handle.pause();
        info!(position_ms = handle.current_position(), "pause");
    }

    /// Halt, re-prime for replay and show the start of the track.
    pub fn stop(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        handle.stop();
        if let Err(e) = handle.prepare() {
            // Left unusable until the track is selected again.
            warn!(error = %e, "re-prime after stop failed");
            self.ready = false;
        }
        self.progress.reset(handle.duration());
        info!("stop");
    }

    pub fn seek_back(&mut self) {
        let step = self.options.seek_step_ms;
        self.seek_by(|pos, _| pos.saturating_sub(step));
    }

    pub fn seek_forward(&mut self) {
        let step = self.options.seek_step_ms;
        self.seek_by(|pos, duration| pos.saturating_add(step).min(duration));
    }

    fn seek_by(&mut self, target: impl FnOnce(u64, u64) -> u64) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        let to = target(handle.current_position(), handle.duration());
        if let Err(e) = handle.seek_to(to) {
            warn!(position_ms = to, error = %e, "seek failed");
        }
        debug!(position_ms = to, "seek");
        self.refresh_display();
    }

    /// Mirror the handle into the progress view, re-arming while playing.
    pub fn refresh_display(&mut self) {
        self.refresh_display_at(Instant::now());
    }

    fn refresh_display_at(&mut self, now: Instant) {
        let Some(handle) = self.handle.as_ref() else {
            return;
        };
        self.progress
            .show(handle.current_position(), handle.duration());

        if handle.is_playing() {
            self.ticks
                .post_once(Tick::RefreshDisplay, self.options.refresh_interval, now);
        }
    }

    /// End of stream: back to the start, without playing or advancing.
    pub fn on_completion(&mut self) {
        let Some(handle) = self.handle.as_ref() else {
            return;
        };
        self.ticks.cancel_all();
        self.progress.reset(handle.duration());
        info!("playback completed");
    }

    /// Push a volume level to the device.
    pub fn on_volume_dragged(&mut self, level: u32) {
        let Some(volume) = self.volume.as_mut() else {
            return;
        };
        match volume.set_current(level) {
            Ok(()) => {
                self.volume_range.set_value(u64::from(level));
                debug!(level, "volume set");
            }
            Err(e) => warn!(level, error = %e, "failed to set device volume"),
        }
    }

    /// Seek to a position picked on the progress control.
    ///
    /// Only user drags are applied; programmatic updates of the control must
    /// not feed back into the handle.
    pub fn on_progress_dragged(&mut self, position_ms: u64, user_driven: bool) {
        if !user_driven {
            return;
        }
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        let to = position_ms.min(handle.duration());
        if let Err(e) = handle.seek_to(to) {
            warn!(position_ms = to, error = %e, "seek failed");
        }
        debug!(position_ms = to, "progress dragged");
        self.refresh_display();
    }

    /// Run due refresh ticks and deliver the end-of-stream notification.
    pub fn poll(&mut self, now: Instant) {
        for tick in self.ticks.take_due(now) {
            match tick {
                Tick::RefreshDisplay => self.refresh_display_at(now),
            }
        }

        let completed = self
            .handle
            .as_mut()
            .is_some_and(|handle| handle.take_completion());
        if completed {
            self.on_completion();
        }
    }

    /// Cancel pending ticks and free the handle.
    pub fn teardown(&mut self) {
        self.release_handle();
        self.selected = None;
    }

    fn release_handle(&mut self) {
        self.ticks.cancel_all();
        self.ready = false;
        if let Some(mut handle) = self.handle.take() {
            handle.stop();
            handle.release();
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.ticks.next_deadline()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    /// A handle is loaded and can start playing.
    pub fn is_ready(&self) -> bool {
        self.ready && self.handle.is_some()
    }

    pub fn is_playing(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| h.is_playing())
    }

    pub fn progress(&self) -> &ProgressView {
        &self.progress
    }

    pub fn volume_enabled(&self) -> bool {
        self.volume.is_some()
    }

    pub fn volume_range(&self) -> &RangeControl {
        &self.volume_range
    }

    #[cfg(test)]
    pub(crate) fn pending_ticks(&self) -> usize {
        self.ticks.len()
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.teardown();
    }
}
