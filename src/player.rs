//! Playback control: the controller, its refresh timer and the view state
//! it keeps in sync with the playback handle.

mod controller;
mod progress;
mod range;
mod timer;

pub use controller::{Controller, ControllerOptions};
pub use progress::format_time;
pub use range::RangeControl;

#[cfg(test)]
pub(crate) mod fakes;
