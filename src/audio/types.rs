//! Media service seams.
//!
//! The controller talks to playback only through these traits so the rodio
//! implementation can be swapped for fakes in tests. All positions and
//! durations are milliseconds.

use std::path::Path;

use crate::error::Result;

/// One prepared, seekable audio stream.
pub trait MediaHandle {
    /// Start or resume playback. Restarts from 0 after completion.
    fn start(&mut self);
    fn pause(&mut self);
    /// Halt playback. The handle cannot start again until `prepare` succeeds.
    fn stop(&mut self);
    /// Re-prime a stopped handle so it can start again from 0.
    fn prepare(&mut self) -> Result<()>;
    /// Free the underlying stream. The handle is unusable afterwards.
    fn release(&mut self);
    fn seek_to(&mut self, position_ms: u64) -> Result<()>;
    fn current_position(&self) -> u64;
    fn duration(&self) -> u64;
    fn is_playing(&self) -> bool;
    /// Returns `true` once after playback reaches the end of the stream.
    fn take_completion(&mut self) -> bool;
}

/// Creates prepared handles, paused at 0.
pub trait MediaBackend {
    fn create(&self, resource: &Path) -> Result<Box<dyn MediaHandle>>;
}

/// Lifecycle of a handle as seen by the backend.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum HandleState {
    /// Prepared and paused at the start.
    #[default]
    Prepared,
    Playing,
    Paused,
    Stopped,
    /// Reached end of stream.
    Completed,
    Released,
}
