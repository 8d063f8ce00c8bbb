//! Handle bookkeeping over a replaceable output voice.
//!
//! rodio tracks the position of one sink, but seeking may have to throw the
//! sink away and build a new one skipped into the file. `Transport` keeps the
//! lifecycle, the offset of the current voice and completion detection, and
//! only talks to the sink through `Voice`.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{PlayerError, Result};

use super::types::{HandleState, MediaHandle};

pub(super) fn to_ms(d: Duration) -> u64 {
    d.as_millis().min(u64::MAX as u128) as u64
}

/// One playing source on the output device.
pub(super) trait Voice {
    fn play(&self);
    fn pause(&self);
    fn stop(&self);
    /// Time played since the voice was opened or last seeked.
    fn position(&self) -> Duration;
    /// Nothing left to play.
    fn is_drained(&self) -> bool;
    fn try_seek(&self, to: Duration) -> Result<()>;
}

/// Opens paused voices for one resource.
pub(super) trait VoiceSource {
    type Voice: Voice;

    fn open_at(&self, start_at: Duration) -> Result<Self::Voice>;
}

pub(super) struct Transport<S: VoiceSource> {
    voice: Option<S::Voice>,
    source: S,
    /// Offset of the current voice, set when seeking by reopening.
    base: Duration,
    /// Cleared once seeking has to reopen; later seeks reopen too.
    seekable: bool,
    duration: Duration,
    state: HandleState,
}

impl<S: VoiceSource> Transport<S> {
    pub(super) fn new(source: S, voice: S::Voice, duration: Duration) -> Self {
        Self {
            voice: Some(voice),
            source,
            base: Duration::ZERO,
            seekable: true,
            duration,
            state: HandleState::Prepared,
        }
    }

    /// Swap in a voice starting at `at`. The current voice survives a failed open.
    fn reopen_at(&mut self, at: Duration) -> Result<()> {
        let voice = self.source.open_at(at)?;
        if let Some(old) = self.voice.replace(voice) {
            old.stop();
        }
        self.base = at;
        // A skipped source no longer maps `try_seek` targets onto file positions.
        if !at.is_zero() {
            self.seekable = false;
        }
        Ok(())
    }

    fn position(&self) -> Duration {
        match self.state {
            HandleState::Completed => self.duration,
            HandleState::Stopped | HandleState::Released => Duration::ZERO,
            _ => self
                .voice
                .as_ref()
                .map_or(Duration::ZERO, |v| self.base + v.position())
                .min(self.duration),
        }
    }

    fn reached_end(&self) -> bool {
        self.state == HandleState::Playing && self.voice.as_ref().is_none_or(|v| v.is_drained())
    }

    #[cfg(test)]
    pub(super) fn state(&self) -> HandleState {
        self.state
    }
}

impl<S: VoiceSource> MediaHandle for Transport<S> {
    fn start(&mut self) {
        match self.state {
            HandleState::Prepared | HandleState::Paused => {}
            HandleState::Completed => {
                if let Err(e) = self.reopen_at(Duration::ZERO) {
                    warn!(error = %e, "restart after completion failed");
                    return;
                }
            }
            HandleState::Playing | HandleState::Stopped | HandleState::Released => return,
        }
        if let Some(v) = self.voice.as_ref() {
            v.play();
            self.state = HandleState::Playing;
        }
    }

    fn pause(&mut self) {
        if self.state == HandleState::Playing {
            if let Some(v) = self.voice.as_ref() {
                v.pause();
            }
            self.state = HandleState::Paused;
        }
    }

    fn stop(&mut self) {
        if let Some(v) = self.voice.take() {
            v.stop();
        }
        self.base = Duration::ZERO;
        if self.state != HandleState::Released {
            self.state = HandleState::Stopped;
        }
    }

    fn prepare(&mut self) -> Result<()> {
        if self.state == HandleState::Released {
            return Err(PlayerError::Prepare("handle was released".to_string()));
        }
        self.reopen_at(Duration::ZERO)
            .map_err(|e| PlayerError::Prepare(e.to_string()))?;
        self.seekable = true;
        self.state = HandleState::Prepared;
        Ok(())
    }

    fn release(&mut self) {
        if let Some(v) = self.voice.take() {
            v.stop();
        }
        self.state = HandleState::Released;
    }

    fn seek_to(&mut self, position_ms: u64) -> Result<()> {
        let target = Duration::from_millis(position_ms).min(self.duration);
        match self.state {
            HandleState::Stopped | HandleState::Released => return Ok(()),
            HandleState::Completed => {
                self.reopen_at(target)
                    .map_err(|e| PlayerError::Seek(e.to_string()))?;
                self.state = HandleState::Paused;
                return Ok(());
            }
            _ => {}
        }

        if self.seekable {
            if let Some(v) = self.voice.as_ref() {
                match v.try_seek(target) {
                    Ok(()) => return Ok(()),
                    Err(e) => {
                        debug!(error = %e, "try_seek unsupported, reopening");
                        self.seekable = false;
                    }
                }
            }
        }

        self.reopen_at(target)
            .map_err(|e| PlayerError::Seek(e.to_string()))?;
        if self.state == HandleState::Playing {
            if let Some(v) = self.voice.as_ref() {
                v.play();
            }
        }
        Ok(())
    }

    fn current_position(&self) -> u64 {
        to_ms(self.position())
    }

    fn duration(&self) -> u64 {
        to_ms(self.duration)
    }

    fn is_playing(&self) -> bool {
        self.state == HandleState::Playing && !self.reached_end()
    }

    fn take_completion(&mut self) -> bool {
        if self.reached_end() {
            self.state = HandleState::Completed;
            return true;
        }
        false
    }
}

impl<S: VoiceSource> Drop for Transport<S> {
    fn drop(&mut self) {
        self.release();
    }
}
