//! Runtime orchestration: settings and catalog resolution, terminal
//! setup/teardown and the blocking event loop.

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::player::{Player, RodioBackend};

mod event_loop;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    let catalog = startup::resolve_catalog(&settings);

    let backend = RodioBackend::new()?;
    let mut player = Player::new(catalog, backend, settings.playback.volume);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(terminal_backend)?;

    let run_result = {
        let mut state = event_loop::EventLoopState::new(&player);
        event_loop::run(&mut terminal, &settings, &mut player, &mut state)
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
