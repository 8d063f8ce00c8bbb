//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the playback controller,
//! the selector cursor and the on-screen areas of the range controls.

mod model;

pub use model::*;
