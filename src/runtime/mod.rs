use std::env;
use std::path::Path;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::audio::RodioBackend;
use crate::catalog::Catalog;
use crate::player::{Controller, ControllerOptions};

mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, config_warning) = settings::load_settings();
    logging::init(&settings.log);
    if let Some(msg) = config_warning {
        warn!(%msg, "using default settings");
    }

    // An optional directory argument replaces the configured track list.
    let catalog = match env::args().nth(1) {
        Some(dir) => Catalog::scan_dir(Path::new(&dir), &settings.catalog)?,
        None => Catalog::from_settings(&settings.catalog)?,
    };
    info!(tracks = catalog.len(), "catalog loaded");
    let missing: Vec<_> = catalog.missing().map(|t| t.resource.display().to_string()).collect();
    if !missing.is_empty() {
        // The terminal is not in raw mode yet.
        eprintln!(
            "andante: {} track file(s) not found: {}; set [[catalog.tracks]] in the config or pass a directory",
            missing.len(),
            missing.join(", ")
        );
        warn!(?missing, "configured track files not found");
    }

    let media = RodioBackend::open_default()?;
    let volume = startup::open_volume(&settings.volume);
    let controller = Controller::new(
        catalog,
        Box::new(media),
        volume,
        ControllerOptions::from(&settings),
    );

    let mut app = App::new(controller, &settings);
    startup::select_initial(&mut app);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    app.controller.teardown();
    info!("shutting down");

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
