//! andante: a single-screen terminal audio player.
//!
//! Usage: `andante [DIR]`. Without a directory the track list comes from the
//! configuration file.

mod app;
mod audio;
mod catalog;
mod config;
mod error;
mod player;
mod runtime;
mod ui;
mod volume;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
