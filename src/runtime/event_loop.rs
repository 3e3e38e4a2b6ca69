use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config;
use crate::player::{Direction, Playback, Player, ViewState};
use crate::ui;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Playlist cursor. Owned by the input layer, kept inside the catalog
    /// range by construction.
    pub cursor: usize,
}

impl EventLoopState {
    /// Construct a new `EventLoopState` with the cursor on the loaded track.
    pub fn new(player: &Player<impl Playback>) -> Self {
        Self {
            cursor: player.state().current,
        }
    }
}

// The volume slider clamps here, at the input boundary; the controller
// applies levels as-is.
fn volume_up(level: u8, step: u8) -> u8 {
    level.saturating_add(step).min(100)
}

fn volume_down(level: u8, step: u8) -> u8 {
    level.saturating_sub(step)
}

/// Main terminal event loop: redraws from a fresh snapshot and dispatches
/// key events to the controller. Returns `Ok(())` when quit is requested.
pub fn run<B: Playback>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    player: &mut Player<B>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    let step = settings.controls.volume_step;

    loop {
        let view = ViewState::capture(player, state.cursor);
        terminal.draw(|f| ui::draw(f, &view, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let len = player.catalog().len();
                match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Char('j') | KeyCode::Down => {
                        state.cursor = (state.cursor + 1) % len;
                    }
                    KeyCode::Char('k') | KeyCode::Up => {
                        state.cursor = (state.cursor + len - 1) % len;
                    }
                    KeyCode::Char('g') => state.cursor = 0,
                    KeyCode::Char('G') => state.cursor = len - 1,
                    // The "click a track card" path: select only, never resume.
                    KeyCode::Enter => player.select_track(state.cursor),
                    KeyCode::Char(' ') | KeyCode::Char('p') => player.toggle_playback(),
                    KeyCode::Char('l') | KeyCode::Right => player.advance(Direction::Next),
                    KeyCode::Char('h') | KeyCode::Left => player.advance(Direction::Previous),
                    KeyCode::Char('+') | KeyCode::Char('=') => {
                        player.set_volume(volume_up(player.state().volume, step));
                    }
                    KeyCode::Char('-') | KeyCode::Char('_') => {
                        player.set_volume(volume_down(player.state().volume, step));
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(())
}
