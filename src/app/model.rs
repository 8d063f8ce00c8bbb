//! Application model: the controller plus the selector cursor and the
//! screen areas the range controls were last drawn in.

use ratatui::layout::Rect;

use crate::config::Settings;
use crate::player::{Controller, RangeControl};

/// Where the draggable controls sit on screen, for mouse hit testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub progress: Rect,
    pub volume: Rect,
}

/// The main application model.
pub struct App {
    pub controller: Controller,
    /// Highlighted entry in the track selector.
    pub cursor: usize,
    pub areas: HitAreas,
    pub volume_step: u32,
}

impl App {
    /// Create a new `App` around `controller`.
    pub fn new(controller: Controller, settings: &Settings) -> Self {
        Self {
            controller,
            cursor: 0,
            areas: HitAreas::default(),
            volume_step: settings.controls.volume_step,
        }
    }

    fn track_count(&self) -> usize {
        self.controller.catalog().len()
    }

    /// Move the cursor to the next track, wrapping to the first.
    pub fn next(&mut self) {
        let len = self.track_count();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    /// Move the cursor to the previous track, wrapping to the last.
    pub fn prev(&mut self) {
        let len = self.track_count();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    /// Select the track under the cursor. Failures are logged by the controller.
    ///
    /// Selecting the loaded track again only reloads it when it is unusable.
    pub fn select_at_cursor(&mut self) {
        if self.controller.selected() == Some(self.cursor) && self.controller.is_ready() {
            return;
        }
        let _ = self.controller.select_track(self.cursor);
    }

    /// Move the volume control by `delta` steps of `volume_step`.
    pub fn nudge_volume(&mut self, delta: i64) {
        if !self.controller.volume_enabled() {
            return;
        }
        let range = self.controller.volume_range();
        let step = i64::from(self.volume_step) * delta;
        let level = (range.value() as i64 + step).clamp(0, range.max() as i64);
        self.controller.on_volume_dragged(level as u32);
    }

    /// Handle a press or drag at terminal cell (`column`, `row`).
    pub fn drag_at(&mut self, column: u16, row: u16) {
        if let Some(pos) = value_at(self.areas.progress, self.controller.progress().range(), column, row) {
            self.controller.on_progress_dragged(pos, true);
        } else if let Some(level) = value_at(self.areas.volume, self.controller.volume_range(), column, row) {
            self.controller
                .on_volume_dragged(level.min(u64::from(u32::MAX)) as u32);
        }
    }
}

/// Map a cell inside a bordered gauge at `area` to a value of `range`.
///
/// The left edge of the inner area is 0 and the right edge is `range.max()`.
pub fn value_at(area: Rect, range: &RangeControl, column: u16, row: u16) -> Option<u64> {
    if area.width < 3 || area.height < 3 {
        return None;
    }
    let inner_x = area.x + 1;
    let inner_w = area.width - 2;
    let inner_y = area.y + 1;
    let inner_h = area.height - 2;
    if column < inner_x || column >= inner_x + inner_w || row < inner_y || row >= inner_y + inner_h {
        return None;
    }

    let offset = u64::from(column - inner_x);
    let span = u64::from(inner_w.saturating_sub(1)).max(1);
    Some((offset * range.max() / span).min(range.max()))
}
