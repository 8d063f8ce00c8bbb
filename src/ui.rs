//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the single player screen using
//! `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, HitAreas};
use crate::config::UiSettings;
use crate::player::format_time;

const CONTROLS: &[(&str, &str)] = &[
    ("j/k", "up/down"),
    ("enter", "select track"),
    ("p", "play"),
    ("P", "pause"),
    ("space", "play/pause"),
    ("s", "stop"),
    ("h/l", "back/forward"),
    ("-/+", "volume"),
    ("mouse", "drag bars"),
    ("q", "quit"),
];

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn padded() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

/// Render the player into `frame`, returning where the range controls landed.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) -> HitAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" andante ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Track selector
    let controller = &app.controller;
    let items: Vec<ListItem> = controller
        .catalog()
        .tracks()
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let marker = if controller.selected() == Some(i) { "* " } else { "  " };
            let mut line = format!("{marker}{}", track.name);
            if ui_settings.show_durations {
                if let Some(d) = track.duration {
                    line.push_str(&format!(" ({})", format_time(d.as_secs())));
                }
            }
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" tracks "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(app.cursor));
    frame.render_stateful_widget(list, chunks[1], &mut state);

    // Status
    let status = match controller.selected() {
        Some(i) if controller.is_ready() => {
            let name = controller
                .catalog()
                .get(i)
                .map(|t| t.name.as_str())
                .unwrap_or("-");
            let state = if controller.is_playing() {
                "Playing"
            } else {
                "Paused"
            };
            format!("{state} • {name}")
        }
        Some(_) => "Track unavailable, press enter to retry".to_string(),
        None => "No track".to_string(),
    };
    let status_par = Paragraph::new(status)
        .block(Block::bordered().padding(padded()).title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[2]);

    // Progress
    let progress = controller.progress();
    let progress_gauge = Gauge::default()
        .block(Block::bordered().title(" progress "))
        .ratio(progress.range().ratio())
        .label(progress.label().to_string())
        .use_unicode(true);
    frame.render_widget(progress_gauge, chunks[3]);

    // Volume
    let volume = controller.volume_range();
    let (volume_label, volume_ratio) = if controller.volume_enabled() {
        (format!("{} / {}", volume.value(), volume.max()), volume.ratio())
    } else {
        ("unavailable".to_string(), 0.0)
    };
    let volume_gauge = Gauge::default()
        .block(Block::bordered().title(" volume "))
        .ratio(volume_ratio)
        .label(volume_label)
        .use_unicode(true);
    frame.render_widget(volume_gauge, chunks[4]);

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(padded()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[5]);

    HitAreas {
        progress: chunks[3],
        volume: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_text_lists_every_binding_in_order() {
        let text = controls_text();
        assert!(text.starts_with("[j/k] up/down | [enter] select track"));
        assert!(text.ends_with("[q] quit"));
        assert_eq!(text.matches(" | ").count(), CONTROLS.len() - 1);
    }
}
