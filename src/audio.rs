//! Audio playback: the media seams and their rodio implementation.
//!
//! `MediaBackend`/`MediaHandle` are what the playback controller sees;
//! `RodioBackend` drives the default output device through `rodio` sinks,
//! with the handle bookkeeping kept in `transport`.

mod device;
mod sink;
mod transport;
mod types;

pub use device::RodioBackend;
pub use types::{HandleState, MediaBackend, MediaHandle};
