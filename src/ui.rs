//! UI rendering helpers for the terminal user interface.
//!
//! The whole display is a pure function of a `ViewState` snapshot: the
//! playlist, the player bar and the controls footer are rebuilt from it
//! on every draw.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::config::UiSettings;
use crate::player::ViewState;

static CONTROLS_MAP: LazyLock<BTreeMap<String, String>> = LazyLock::new(|| {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    map.insert("j/k".to_string(), "up/down".to_string());
    map.insert("g/G".to_string(), "top/bottom".to_string());
    map.insert("enter".to_string(), "select track".to_string());
    map.insert("space/p".to_string(), "play/pause".to_string());
    map.insert("h/l".to_string(), "prev/next track".to_string());
    map.insert("-/+".to_string(), "volume".to_string());
    map.insert("q".to_string(), "quit".to_string());
    map
});

/// Render the controls help text in a stable, human-friendly order.
fn controls_text() -> String {
    let order = ["j/k", "enter", "space/p", "h/l", "-/+", "g/G", "q"];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Render a ten-cell volume gauge, e.g. `80% ########--`.
fn volume_gauge(volume: u8) -> String {
    let filled = usize::from(volume) / 10;
    let mut gauge = String::with_capacity(10);
    for i in 0..10 {
        gauge.push(if i < filled { '#' } else { '-' });
    }
    format!("{}% {}", volume, gauge)
}

/// One playlist line: artist and title, with a marker on the loaded track.
fn entry_text(view: &ViewState, index: usize) -> String {
    let track = &view.entries[index];
    let marker = if index == view.current {
        if view.playing { "♪ " } else { "· " }
    } else {
        "  "
    };
    format!("{}{} - {}", marker, track.artist, track.title)
}

/// Build the player-bar lines: now playing, transport + volume, and the
/// cover reference when enabled.
fn player_bar_text(view: &ViewState, ui_settings: &UiSettings) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "{} - {}",
        view.now_playing.artist, view.now_playing.title
    ));
    lines.push(format!(
        "[ {} ]  Volume: {}",
        view.transport_label,
        volume_gauge(view.volume)
    ));
    if ui_settings.show_cover && !view.now_playing.cover.is_empty() {
        lines.push(format!("Cover: {}", view.now_playing.cover));
    }

    lines.join("\n")
}

/// Render the entire UI into the provided `frame` from the `view` snapshot.
pub fn draw(frame: &mut Frame, view: &ViewState, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" musicflow ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Playlist
    {
        let items: Vec<ListItem> = (0..view.entries.len())
            .map(|i| {
                let item = ListItem::new(entry_text(view, i));
                if i == view.current {
                    item.style(Style::default().add_modifier(Modifier::BOLD))
                } else {
                    item
                }
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" playlist "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(view.cursor));
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }

    // Player bar
    let bar = Paragraph::new(player_bar_text(view, ui_settings))
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" now playing "),
        )
        .wrap(Wrap { trim: true });
    let bar = if view.playing { bar } else { bar.dim() };
    frame.render_widget(bar, chunks[2]);

    // Footer
    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;
    use crate::player::{Playback, Player, ViewState};
    use std::path::Path;

    struct NullBackend;

    impl Playback for NullBackend {
        fn load(&mut self, _audio: &Path) {}
        fn set_volume(&mut self, _volume: f32) {}
        fn play(&mut self) {}
        fn pause(&mut self) {}
    }

    #[test]
    fn volume_gauge_fills_one_cell_per_ten_levels() {
        assert_eq!(volume_gauge(0), "0% ----------");
        assert_eq!(volume_gauge(55), "55% #####-----");
        assert_eq!(volume_gauge(80), "80% ########--");
        assert_eq!(volume_gauge(100), "100% ##########");
    }

    #[test]
    fn entry_text_marks_only_the_loaded_track() {
        let mut player = Player::new(builtin(), NullBackend, 80);
        let view = ViewState::capture(&player, 0);
        assert_eq!(entry_text(&view, 0), "· Beach Wave - Summer Vibes");
        assert_eq!(entry_text(&view, 1), "  Nature Sound - Mountain Echo");

        player.toggle_playback();
        let view = ViewState::capture(&player, 0);
        assert_eq!(entry_text(&view, 0), "♪ Beach Wave - Summer Vibes");
    }

    #[test]
    fn player_bar_shows_transport_label_and_optional_cover() {
        let mut player = Player::new(builtin(), NullBackend, 80);
        let ui = UiSettings::default();

        let view = ViewState::capture(&player, 0);
        let bar = player_bar_text(&view, &ui);
        assert!(bar.contains("[ Play ]"));
        assert!(bar.contains("Volume: 80%"));
        assert!(bar.contains("Cover: https://"));

        player.toggle_playback();
        let view = ViewState::capture(&player, 0);
        assert!(player_bar_text(&view, &ui).contains("[ Pause ]"));

        let hidden = UiSettings {
            show_cover: false,
            ..UiSettings::default()
        };
        assert!(!player_bar_text(&view, &hidden).contains("Cover:"));
    }

    #[test]
    fn controls_text_lists_every_binding() {
        let text = controls_text();
        for key in ["[j/k]", "[enter]", "[space/p]", "[h/l]", "[-/+]", "[q]"] {
            assert!(text.contains(key), "missing {key} in {text}");
        }
    }
}
