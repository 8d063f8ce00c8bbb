use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::App;
use crate::config;
use crate::ui;

/// Upper bound on how long the loop waits for input before polling the controller.
const MAX_IDLE: Duration = Duration::from_millis(50);

/// Main terminal event loop: draws the screen, drives the controller's
/// deferred ticks and dispatches input. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.controller.poll(Instant::now());

        terminal.draw(|f| {
            let areas = ui::draw(f, app, &settings.ui);
            app.areas = areas;
        })?;

        let timeout = app
            .controller
            .next_deadline()
            .map(|at| at.saturating_duration_since(Instant::now()).min(MAX_IDLE))
            .unwrap_or(MAX_IDLE);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key_event(key, app) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Returns `true` when the user asked to quit.
fn handle_key_event(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Enter => app.select_at_cursor(),
        KeyCode::Char('p') => app.controller.play(),
        KeyCode::Char('P') => app.controller.pause(),
        KeyCode::Char(' ') => {
            if app.controller.is_playing() {
                app.controller.pause();
            } else {
                app.controller.play();
            }
        }
        KeyCode::Char('s') => app.controller.stop(),
        KeyCode::Char('h') | KeyCode::Left => app.controller.seek_back(),
        KeyCode::Char('l') | KeyCode::Right => app.controller.seek_forward(),
        KeyCode::Char('-') => app.nudge_volume(-1),
        KeyCode::Char('+') | KeyCode::Char('=') => app.nudge_volume(1),
        _ => {}
    }
    false
}

fn handle_mouse_event(mouse: MouseEvent, app: &mut App) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            debug!(column = mouse.column, row = mouse.row, "pointer drag");
            app.drag_at(mouse.column, mouse.row);
        }
        _ => {}
    }
}
